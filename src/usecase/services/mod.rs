pub mod catalog_service;
pub mod import_service;
pub mod table_view;
