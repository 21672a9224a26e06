use anyhow::{Context, Result};

use crate::domain::entities::product::{Product, ProductId};
use crate::domain::entities::table::Column;

/// Position of each catalog column in an imported sheet, found by header name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMap {
    id: usize,
    title: usize,
    price: usize,
    category: usize,
    description: usize,
}

impl HeaderMap {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let find = |column: Column| -> Result<usize> {
            headers
                .iter()
                .position(|header| header.as_ref().trim().eq_ignore_ascii_case(column.key()))
                .with_context(|| format!("missing required header: {}", column.key()))
        };

        Ok(Self {
            id: find(Column::Id)?,
            title: find(Column::Title)?,
            price: find(Column::Price)?,
            category: find(Column::Category)?,
            description: find(Column::Description)?,
        })
    }

    /// Build a product from one data row. `row_number` is 1-based and counts
    /// the header, matching what a spreadsheet shows.
    pub fn product<S: AsRef<str>>(&self, row_number: usize, fields: &[S]) -> Result<Product> {
        let field = |idx: usize| fields.get(idx).map(|v| v.as_ref().trim()).unwrap_or("");

        let id = parse_id(field(self.id))
            .with_context(|| format!("row {row_number}: invalid id {:?}", field(self.id)))?;
        let price = field(self.price)
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .with_context(|| format!("row {row_number}: invalid price {:?}", field(self.price)))?;
        if price < 0.0 {
            anyhow::bail!("row {row_number}: price must not be negative: {price}")
        }

        Ok(Product {
            id: ProductId(id),
            title: field(self.title).to_string(),
            price,
            category: field(self.category).to_string(),
            description: field(self.description).to_string(),
        })
    }
}

/// Float ids at or above 2^53 may already have been rounded by the parse.
const MAX_EXACT_FLOAT_ID: f64 = 9_007_199_254_740_992.0;

/// Integer ids parse as-is. Spreadsheets hand whole numbers over as floats
/// (`"7.0"`), which are accepted only while the conversion is exact.
fn parse_id(text: &str) -> Option<i64> {
    if let Ok(id) = text.parse::<i64>() {
        return Some(id);
    }
    text.parse::<f64>()
        .ok()
        .filter(|v| v.fract() == 0.0 && v.abs() < MAX_EXACT_FLOAT_ID)
        .map(|v| v as i64)
}

/// Rows that are entirely blank are skipped rather than rejected.
pub fn is_blank_row<S: AsRef<str>>(fields: &[S]) -> bool {
    fields.iter().all(|v| v.as_ref().trim().is_empty())
}
