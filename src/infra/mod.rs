pub mod format;
pub mod import;
pub mod seed;
pub mod sqlite;
