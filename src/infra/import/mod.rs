pub mod csv;
pub mod rows;
pub mod xlsx;
