use tracing::debug;

use crate::domain::entities::product::{ProductRecord, SharedRecord};
use crate::domain::entities::table::{ActiveSearch, Column, ColumnKind, FilterState};

/// Which fields a search term is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    AllFields,
    Field(Column),
}

/// A search term prepared once per filter pass.
#[derive(Debug, Clone)]
pub struct Needle<'a> {
    raw: &'a str,
    folded: String,
}

impl<'a> Needle<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            folded: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    fn matches_column(&self, record: &ProductRecord, column: Column) -> bool {
        match column.kind() {
            ColumnKind::Text => column
                .text_of(record)
                .is_some_and(|text| text.to_lowercase().contains(&self.folded)),
            ColumnKind::Numeric => column
                .decimal_of(record)
                .is_some_and(|decimal| decimal.contains(self.raw)),
        }
    }
}

pub fn matches(record: &ProductRecord, scope: SearchScope, needle: &Needle<'_>) -> bool {
    if needle.is_empty() {
        return true;
    }
    match scope {
        SearchScope::AllFields => Column::ALL
            .into_iter()
            .any(|column| needle.matches_column(record, column)),
        SearchScope::Field(column) => needle.matches_column(record, column),
    }
}

/// Narrow `raw` by whichever search entry point was used last.
pub fn apply(raw: &[SharedRecord], filters: &FilterState) -> Vec<SharedRecord> {
    let (scope, term) = match filters.active {
        ActiveSearch::None => return raw.to_vec(),
        ActiveSearch::Global => (SearchScope::AllFields, filters.global.as_str()),
        ActiveSearch::Column(column) => (SearchScope::Field(column), filters.column_term(column)),
    };

    let needle = Needle::new(term);
    if needle.is_empty() {
        return raw.to_vec();
    }

    let filtered: Vec<SharedRecord> = raw
        .iter()
        .filter(|record| matches(record, scope, &needle))
        .cloned()
        .collect();
    debug!(
        ?scope,
        term,
        raw = raw.len(),
        filtered = filtered.len(),
        "filter pass"
    );
    filtered
}
