pub mod collation;
pub mod filter;
pub mod pager;
pub mod sort;
