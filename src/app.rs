use std::sync::Arc;

use anyhow::anyhow;
use dioxus::prelude::*;
use rfd::FileDialog;
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::entities::table::{Column, SortDirection};
use crate::infra::format::price::format_price;
use crate::infra::seed::catalog::{sample_products, SAMPLE_SOURCE};
use crate::infra::sqlite::repo::SqliteCatalogRepo;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::column_filter::ColumnFilter;
use crate::ui::components::pagination::Pagination;
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::repo::{CatalogRepository, ImportSummary};
use crate::usecase::services::catalog_service::CatalogService;
use crate::usecase::services::import_service::ImportService;
use crate::usecase::services::table_view::TableView;

const IMPORT_EXTENSIONS: &[&str] = &["csv", "xlsx", "xlsm", "xls", "ods"];

#[derive(Clone)]
struct Services {
    catalog: Arc<CatalogService>,
    import: Arc<ImportService>,
}

impl Services {
    fn new(config: &AppConfig) -> Self {
        let repo: Arc<dyn CatalogRepository> =
            Arc::new(SqliteCatalogRepo::new(config.db_path.clone()));
        Self {
            catalog: Arc::new(CatalogService::new(repo.clone(), format_price)),
            import: Arc::new(ImportService::new(repo)),
        }
    }
}

fn sort_indicator(sort: Option<(Column, SortDirection)>, column: Column) -> &'static str {
    match sort {
        Some((active, SortDirection::Asc)) if active == column => " ▲",
        Some((active, SortDirection::Desc)) if active == column => " ▼",
        _ => "",
    }
}

/// Fetch the catalog once and hand it to the table. On failure the table
/// keeps whatever it had; before the first load that is nothing.
fn load_catalog(
    catalog: &CatalogService,
    mut table_view: Signal<TableView>,
    mut loaded: Signal<bool>,
    mut status: Signal<String>,
    mut last_import: Signal<Option<ImportSummary>>,
) {
    let result = run_blocking(|| {
        catalog
            .prepare(sample_products, SAMPLE_SOURCE)
            .and_then(|_| catalog.load_records())
            .map_err(|err| anyhow!(err.to_string()))
    });
    match result {
        Ok(records) => {
            let count = records.len();
            table_view.write().ingest(records);
            loaded.set(true);
            *status.write() = format!(
                "Loaded {count} products at {}",
                chrono::Local::now().format("%H:%M:%S")
            );
        }
        Err(err) => {
            warn!(error = %err, "catalog load failed");
            *status.write() = format!("Failed to load catalog: {err}");
        }
    }

    match run_blocking(|| catalog.last_import()) {
        Ok(summary) => last_import.set(summary),
        Err(err) => warn!(error = %err, "failed to read import history"),
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let services = use_hook(|| Services::new(&config));

    let AppState {
        mut table_view,
        loaded,
        mut busy,
        mut status,
        mut open_filter,
        last_import,
    } = AppState::new(config.page_size);

    let services_for_init = services.clone();
    use_future(move || {
        let catalog = services_for_init.catalog.clone();
        async move {
            load_catalog(&catalog, table_view, loaded, status, last_import);
        }
    });

    let services_for_reload = services.clone();
    let services_for_import = services.clone();

    let snapshot = table_view.read();
    let page = snapshot.visible_page();
    let filters = snapshot.filters().clone();
    let sort = snapshot.sort().map(|spec| (spec.column, spec.direction));
    let page_index = snapshot.page_index();
    let page_size = snapshot.page_size();
    let total_items = snapshot.total_items();
    let page_count = snapshot.page_count();
    let categories = snapshot.categories();
    let raw_count = snapshot.raw().len();
    let filtered_count = snapshot.filtered().len();
    drop(snapshot);
    let global_term = filters.global.clone();
    let status_text = status();

    let import_label = last_import()
        .map(|summary| {
            format!(
                "Source: {} ({} rows, imported {})",
                summary.source_path, summary.row_count, summary.imported_at
            )
        })
        .unwrap_or_default();

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 16px;",
            onclick: move |_| open_filter.set(None),

            h1 { "Products List" }

            div {
                style: "display: flex; gap: 8px; align-items: center; margin-bottom: 12px;",
                input {
                    style: "flex: 1; padding: 6px 10px;",
                    placeholder: "Search products (title, category, description, price…)",
                    value: "{global_term}",
                    oninput: move |event| table_view.write().set_global_search(event.value()),
                }
                button {
                    disabled: busy() || filters.is_cleared(),
                    onclick: move |_| table_view.write().clear_filters(),
                    "Clear All Filters"
                }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        let Some(path) = FileDialog::new()
                            .add_filter("Catalog", IMPORT_EXTENSIONS)
                            .pick_file()
                        else {
                            return;
                        };
                        *busy.write() = true;
                        match run_blocking(|| services_for_import.import.import_file(&path)) {
                            Ok(row_count) => {
                                *status.write() = format!("Imported {row_count} products");
                                load_catalog(
                                    &services_for_import.catalog,
                                    table_view,
                                    loaded,
                                    status,
                                    last_import,
                                );
                            }
                            Err(err) => {
                                warn!("import failed: {err:#}");
                                *status.write() = format!("Import failed: {err:#}");
                            }
                        }
                        *busy.write() = false;
                    },
                    "Import…"
                }
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        *busy.write() = true;
                        load_catalog(
                            &services_for_reload.catalog,
                            table_view,
                            loaded,
                            status,
                            last_import,
                        );
                        *busy.write() = false;
                    },
                    "Reload"
                }
            }

            p { style: "color: #666; margin: 4px 0;", "{status_text}" }
            p { style: "color: #666; margin: 4px 0;", "Showing {filtered_count} of {raw_count} products" }
            if !import_label.is_empty() {
                p { style: "color: #999; margin: 4px 0; font-size: 12px;", "{import_label}" }
            }

            table {
                style: "border-collapse: collapse; width: 100%;",
                thead {
                    tr {
                        {Column::ALL.into_iter().map(|column| {
                            let indicator = sort_indicator(sort, column);
                            let is_open = open_filter() == Some(column);
                            let term = filters.column_term(column).to_string();
                            let label = column.label();
                            let options = if column.has_value_list() {
                                categories.clone()
                            } else {
                                Vec::new()
                            };
                            rsx!(
                                th {
                                    key: "{column}",
                                    style: "position: relative; text-align: left; border-bottom: 2px solid #ddd; padding: 8px; cursor: pointer; user-select: none;",
                                    onclick: move |_| table_view.write().activate_sort(column),
                                    span { "{label}{indicator}" }
                                    if column.is_filterable() || column.has_value_list() {
                                        button {
                                            style: "margin-left: 6px; border: none; background: transparent; cursor: pointer;",
                                            onclick: move |event| {
                                                event.stop_propagation();
                                                if open_filter() == Some(column) {
                                                    open_filter.set(None);
                                                } else {
                                                    open_filter.set(Some(column));
                                                }
                                            },
                                            "🔍"
                                        }
                                    }
                                    if is_open {
                                        ColumnFilter {
                                            column: column,
                                            value: term,
                                            options: options,
                                            on_input: move |value: String| {
                                                table_view.write().set_column_term(column, value)
                                            },
                                            on_search: move |column: Column| {
                                                table_view.write().submit_column_search(column);
                                                open_filter.set(None);
                                            },
                                            on_clear: move |_| {
                                                table_view.write().clear_filters();
                                                open_filter.set(None);
                                            },
                                        }
                                    }
                                }
                            )
                        })}
                    }
                }
                tbody {
                    {page.items.iter().map(|record| {
                        let id = record.id.0;
                        let title = record.title.as_str();
                        let price = record.display_price.as_str();
                        let category = record.category.as_str();
                        let description = record.description.as_str();
                        rsx!(
                            tr {
                                key: "{id}",
                                style: "border-bottom: 1px solid #eee;",
                                td { style: "padding: 6px 8px;", "{id}" }
                                td { style: "padding: 6px 8px;", "{title}" }
                                td { style: "padding: 6px 8px; text-align: right;", "{price}" }
                                td { style: "padding: 6px 8px;", "{category}" }
                                td { style: "padding: 6px 8px;", "{description}" }
                            }
                        )
                    })}
                }
            }

            if page.items.is_empty() {
                p {
                    style: "color: #999; text-align: center; padding: 24px;",
                    if !loaded() {
                        "Loading…"
                    } else if raw_count == 0 {
                        "The catalog is empty."
                    } else {
                        "No products match the current filters."
                    }
                }
            }

            Pagination {
                current_page: page_index,
                page_count: page_count,
                total_items: total_items,
                page_size: page_size,
                disabled: busy(),
                on_page_change: move |index: usize| table_view.write().set_page(index),
            }
        }
    }
}
