use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::product::Product;
use crate::infra::import::rows::{is_blank_row, HeaderMap};

pub fn read_products_csv(csv_path: &Path) -> Result<Vec<Product>> {
    let reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    read_products(reader).with_context(|| format!("failed to import csv: {}", csv_path.display()))
}

pub fn read_products<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<Product>> {
    let headers = reader
        .headers()
        .context("failed to read csv headers")?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }
    let header_map = HeaderMap::from_headers(&headers)?;

    let mut products = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let row_number = idx + 2;
        let record = record.with_context(|| format!("failed to parse csv row {row_number}"))?;
        let fields = record.iter().collect::<Vec<_>>();
        if is_blank_row(&fields) {
            continue;
        }
        products.push(header_map.product(row_number, &fields)?);
    }

    Ok(products)
}
