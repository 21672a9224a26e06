use crate::domain::entities::product::Product;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("{0}")]
    Message(String),
}

/// Data source of the product table. The table view asks for the whole
/// catalog once per load and does all filtering, sorting and paging itself.
pub trait CatalogRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    fn fetch_all(&self) -> Result<Vec<Product>, RepoError>;
    fn count(&self) -> Result<usize, RepoError>;

    /// Swap the whole catalog in one transaction.
    fn replace_all(&self, products: &[Product], source_path: &str) -> Result<usize, RepoError>;
    fn last_import(&self) -> Result<Option<ImportSummary>, RepoError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub source_path: String,
    pub row_count: usize,
    pub imported_at: String,
}
