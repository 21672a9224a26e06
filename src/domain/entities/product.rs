use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub i64);

/// A catalog row as stored by the data source.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: String,
}

/// A product as ingested by the table view.
///
/// `display_price` is attached once when the catalog is loaded and is never
/// recomputed by the filter/sort/page pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub display_price: String,
}

impl ProductRecord {
    pub fn from_product(product: Product, display_price: String) -> Self {
        let Product {
            id,
            title,
            price,
            category,
            description,
        } = product;
        Self {
            id,
            title,
            price,
            category,
            description,
            display_price,
        }
    }
}

/// Records are shared between the raw, filtered, sorted and visible sets.
pub type SharedRecord = Arc<ProductRecord>;
