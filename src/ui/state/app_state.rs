use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::table::Column;
use crate::usecase::ports::repo::ImportSummary;
use crate::usecase::services::table_view::TableView;

pub struct AppState {
    pub table_view: Signal<TableView>,
    pub loaded: Signal<bool>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub open_filter: Signal<Option<Column>>,
    pub last_import: Signal<Option<ImportSummary>>,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            table_view: use_signal(|| TableView::new(page_size)),
            loaded: use_signal(|| false),
            busy: use_signal(|| false),
            status: use_signal(|| "Loading catalog…".to_string()),
            open_filter: use_signal(|| None::<Column>),
            last_import: use_signal(|| None::<ImportSummary>),
        }
    }
}
