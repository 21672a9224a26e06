use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing::Level;

use crate::domain::entities::table::DEFAULT_PAGE_SIZE;

pub const DB_PATH_ENV: &str = "PRODUCT_TABLE_DB";
pub const PAGE_SIZE_ENV: &str = "PRODUCT_TABLE_PAGE_SIZE";
pub const LOG_LEVEL_ENV: &str = "PRODUCT_TABLE_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub webview_data_dir: PathBuf,
    pub page_size: usize,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let lookup = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self::from_lookup(lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = project_data_dir()?;

        let db_path = lookup(DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("catalog.sqlite"));
        let page_size = match lookup(PAGE_SIZE_ENV) {
            Some(raw) => parse_page_size(&raw)?,
            None => DEFAULT_PAGE_SIZE,
        };
        let log_level = match lookup(LOG_LEVEL_ENV) {
            Some(raw) => raw.trim().parse::<Level>().map_err(|_| {
                anyhow!("{LOG_LEVEL_ENV} must be error, warn, info, debug or trace: {raw:?}")
            })?,
            None => Level::INFO,
        };

        Ok(Self {
            db_path,
            webview_data_dir: data_dir.join("webview"),
            page_size,
            log_level,
        })
    }
}

pub fn parse_page_size(raw: &str) -> Result<usize> {
    let page_size = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("{PAGE_SIZE_ENV} must be a positive integer: {raw:?}"))?;
    if page_size == 0 {
        anyhow::bail!("page_size must be greater than zero")
    }
    Ok(page_size)
}

fn project_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "producttable", "product-table")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().to_path_buf())
}

pub fn ensure_webview_data_dir(webview_data_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(webview_data_dir).with_context(|| {
        format!(
            "failed to create webview data dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir.to_path_buf())
}
