use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::product::Product;
use crate::infra::import::rows::{is_blank_row, HeaderMap};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

/// Read products from the first worksheet; the first row holds the headers.
pub fn read_products_xlsx(xlsx_path: &Path) -> Result<Vec<Product>> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .with_context(|| format!("workbook has no sheets: {}", xlsx_path.display()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect())
        .collect();

    products_from_rows(&rows).with_context(|| format!("failed to import sheet: {sheet_name}"))
}

pub fn products_from_rows(rows: &[Vec<String>]) -> Result<Vec<Product>> {
    let Some((headers, data)) = rows.split_first() else {
        anyhow::bail!("sheet header is required")
    };
    let header_map = HeaderMap::from_headers(headers)?;

    let mut products = Vec::with_capacity(data.len());
    for (idx, row) in data.iter().enumerate() {
        if is_blank_row(row) {
            continue;
        }
        products.push(header_map.product(idx + 2, row)?);
    }
    Ok(products)
}
