use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::params;

use crate::domain::entities::product::{Product, ProductId};
use crate::infra::sqlite::schema::open_connection;
use crate::usecase::ports::repo::ImportSummary;

pub fn fetch_products(db_path: &Path) -> Result<Vec<Product>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT id, title, price, category, description
             FROM product
             ORDER BY id ASC",
        )
        .context("failed to prepare product query")?;

    let products = stmt
        .query_map([], |row| {
            Ok(Product {
                id: ProductId(row.get(0)?),
                title: row.get(1)?,
                price: row.get(2)?,
                category: row.get(3)?,
                description: row.get(4)?,
            })
        })
        .context("failed to query products")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to collect products")?;

    Ok(products)
}

pub fn count_products(db_path: &Path) -> Result<usize> {
    let conn = open_connection(db_path)?;
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM product", [], |row| row.get(0))
        .context("failed to count products")?;
    Ok(count.max(0) as usize)
}

pub fn replace_products(db_path: &Path, products: &[Product], source_path: &str) -> Result<usize> {
    let mut seen = HashSet::with_capacity(products.len());
    if let Some(duplicate) = products.iter().find(|product| !seen.insert(product.id)) {
        anyhow::bail!("duplicate product id: {}", duplicate.id.0)
    }

    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start catalog replace transaction")?;

    tx.execute("DELETE FROM product", [])
        .context("failed to clear existing products")?;

    let mut insert_product = tx
        .prepare(
            "INSERT INTO product(id, title, price, category, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .context("failed to prepare product insert")?;

    for product in products {
        insert_product
            .execute(params![
                product.id.0,
                product.title,
                product.price,
                product.category,
                product.description
            ])
            .with_context(|| format!("failed to insert product #{}", product.id.0))?;
    }
    drop(insert_product);

    tx.execute(
        "INSERT INTO catalog_import(source_path, row_count) VALUES (?1, ?2)",
        params![source_path, products.len() as i64],
    )
    .context("failed to record catalog import")?;

    tx.commit()
        .context("failed to commit catalog replace transaction")?;
    Ok(products.len())
}

pub fn last_import(db_path: &Path) -> Result<Option<ImportSummary>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT source_path, row_count, imported_at
             FROM catalog_import
             ORDER BY id DESC
             LIMIT 1",
        )
        .context("failed to prepare last import query")?;

    let mut rows = stmt
        .query_map([], |row| {
            let row_count: i64 = row.get(1)?;
            Ok(ImportSummary {
                source_path: row.get(0)?,
                row_count: row_count.max(0) as usize,
                imported_at: row.get(2)?,
            })
        })
        .context("failed to query last import")?;

    let summary = rows
        .next()
        .transpose()
        .context("failed to read last import row")?;
    Ok(summary)
}
