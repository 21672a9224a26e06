use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entities::product::{ProductRecord, SharedRecord};

pub const DEFAULT_PAGE_SIZE: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Id,
    Title,
    Price,
    Category,
    Description,
}

/// How a column's value takes part in matching and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Numeric,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Id,
        Column::Title,
        Column::Price,
        Column::Category,
        Column::Description,
    ];

    /// Columns that get their own search box in the table header.
    pub const FILTERABLE: [Column; 4] = [
        Column::Id,
        Column::Title,
        Column::Price,
        Column::Description,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Title => "title",
            Column::Price => "price",
            Column::Category => "category",
            Column::Description => "description",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Title => "Title",
            Column::Price => "Price",
            Column::Category => "Category",
            Column::Description => "Description",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            Column::Id | Column::Price => ColumnKind::Numeric,
            Column::Title | Column::Category | Column::Description => ColumnKind::Text,
        }
    }

    pub fn is_filterable(self) -> bool {
        Column::FILTERABLE.contains(&self)
    }

    /// Columns filtered by picking one of the values already in the catalog.
    pub fn has_value_list(self) -> bool {
        self == Column::Category
    }

    /// Borrow the text value of a text column. `None` for numeric columns.
    pub fn text_of(self, record: &ProductRecord) -> Option<&str> {
        match self {
            Column::Title => Some(&record.title),
            Column::Category => Some(&record.category),
            Column::Description => Some(&record.description),
            Column::Id | Column::Price => None,
        }
    }

    /// Decimal form used for substring matching on numeric columns.
    /// `f64`'s `Display` never groups digits and never switches to exponent form.
    pub fn decimal_of(self, record: &ProductRecord) -> Option<String> {
        match self {
            Column::Id => Some(record.id.0.to_string()),
            Column::Price => Some(record.price.to_string()),
            Column::Title | Column::Category | Column::Description => None,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which search entry point produced the current filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveSearch {
    #[default]
    None,
    Global,
    Column(Column),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub global: String,
    pub column_terms: BTreeMap<Column, String>,
    pub active: ActiveSearch,
}

impl FilterState {
    pub fn column_term(&self, column: Column) -> &str {
        self.column_terms
            .get(&column)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_cleared(&self) -> bool {
        self.global.is_empty()
            && self.column_terms.values().all(String::is_empty)
            && self.active == ActiveSearch::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: Column, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Next sort after the user activates `column`: the active column flips
    /// direction, any other column starts ascending.
    pub fn toggled(current: Option<SortSpec>, column: Column) -> SortSpec {
        match current {
            Some(spec) if spec.column == column => {
                SortSpec::new(column, spec.direction.flipped())
            }
            _ => SortSpec::new(column, SortDirection::Asc),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// 1-based.
    pub index: usize,
    pub size: usize,
}

impl PageState {
    pub fn first(size: usize) -> Self {
        Self { index: 1, size }
    }
}

impl Default for PageState {
    fn default() -> Self {
        PageState::first(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub items: Vec<SharedRecord>,
    pub total_items: usize,
}

pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}
