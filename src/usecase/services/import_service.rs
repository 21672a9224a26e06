use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::domain::entities::product::Product;
use crate::infra::import::csv::read_products_csv;
use crate::infra::import::xlsx::read_products_xlsx;
use crate::usecase::ports::repo::CatalogRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Xlsx,
}

impl ImportFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(ImportFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(ImportFormat::Xlsx),
            _ => None,
        }
    }
}

pub struct ImportService {
    repo: Arc<dyn CatalogRepository>,
}

impl ImportService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    /// Replace the catalog with the contents of `path`. Returns the row count.
    pub fn import_file(&self, path: &Path) -> Result<usize> {
        let format = ImportFormat::from_path(path)
            .with_context(|| format!("unsupported file type: {}", path.display()))?;
        match format {
            ImportFormat::Csv => self.import_csv(path),
            ImportFormat::Xlsx => self.import_xlsx(path),
        }
    }

    pub fn import_csv(&self, path: &Path) -> Result<usize> {
        let products = read_products_csv(path)?;
        self.store(&products, path)
    }

    pub fn import_xlsx(&self, path: &Path) -> Result<usize> {
        let products = read_products_xlsx(path)?;
        self.store(&products, path)
    }

    fn store(&self, products: &[Product], path: &Path) -> Result<usize> {
        let source_path = path.to_string_lossy();
        let row_count = self
            .repo
            .replace_all(products, &source_path)
            .map_err(|err| anyhow!(err.to_string()))?;
        info!(row_count, source = %source_path, "imported catalog");
        Ok(row_count)
    }
}
