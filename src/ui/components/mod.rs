pub mod column_filter;
pub mod pagination;
