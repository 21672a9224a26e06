use std::path::PathBuf;

use crate::domain::entities::product::Product;
use crate::infra::sqlite::queries::{count_products, fetch_products, last_import, replace_products};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{CatalogRepository, ImportSummary, RepoError};

pub struct SqliteCatalogRepo {
    pub db_path: PathBuf,
}

impl SqliteCatalogRepo {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl CatalogRepository for SqliteCatalogRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(|err| RepoError::Message(format!("{err:#}")))
    }

    fn fetch_all(&self) -> Result<Vec<Product>, RepoError> {
        fetch_products(&self.db_path).map_err(|err| RepoError::Message(format!("{err:#}")))
    }

    fn count(&self) -> Result<usize, RepoError> {
        count_products(&self.db_path).map_err(|err| RepoError::Message(format!("{err:#}")))
    }

    fn replace_all(&self, products: &[Product], source_path: &str) -> Result<usize, RepoError> {
        replace_products(&self.db_path, products, source_path)
            .map_err(|err| RepoError::Message(format!("{err:#}")))
    }

    fn last_import(&self) -> Result<Option<ImportSummary>, RepoError> {
        last_import(&self.db_path).map_err(|err| RepoError::Message(format!("{err:#}")))
    }
}
