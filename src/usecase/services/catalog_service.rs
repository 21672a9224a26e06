use std::sync::Arc;

use tracing::info;

use crate::domain::entities::product::{Product, ProductRecord};
use crate::usecase::ports::repo::{CatalogRepository, ImportSummary, RepoError};

/// Maps a numeric price to its display text.
pub type PriceFormatter = fn(f64) -> String;

pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
    format_price: PriceFormatter,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>, format_price: PriceFormatter) -> Self {
        Self { repo, format_price }
    }

    /// Create the schema and fill a never-imported, empty catalog with `seed`.
    pub fn prepare(
        &self,
        seed: impl FnOnce() -> Vec<Product>,
        seed_source: &str,
    ) -> Result<(), RepoError> {
        self.repo.init()?;
        if self.repo.count()? == 0 && self.repo.last_import()?.is_none() {
            let seeded = self.repo.replace_all(&seed(), seed_source)?;
            info!(seeded, source = seed_source, "seeded empty catalog");
        }
        Ok(())
    }

    /// Fetch the whole catalog and attach the display price to every record.
    pub fn load_records(&self) -> Result<Vec<ProductRecord>, RepoError> {
        let products = self.repo.fetch_all()?;
        info!(records = products.len(), "loaded catalog");
        Ok(products
            .into_iter()
            .map(|product| {
                let display_price = (self.format_price)(product.price);
                ProductRecord::from_product(product, display_price)
            })
            .collect())
    }

    pub fn last_import(&self) -> Result<Option<ImportSummary>, RepoError> {
        self.repo.last_import()
    }
}
