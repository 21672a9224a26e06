use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::product::{ProductRecord, SharedRecord};
use crate::domain::entities::table::{
    page_count, ActiveSearch, Column, FilterState, Page, PageState, SortSpec, DEFAULT_PAGE_SIZE,
};
use crate::domain::services::collation::CollationKey;
use crate::domain::services::{filter, pager, sort};

/// Pipeline stage a mutation invalidates. Filtering always cascades into sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Filter,
    Sort,
}

/// Owns the table state and keeps the derived sets in step with it.
///
/// Every mutating method recomputes the stages it invalidates before it
/// returns, so readers never observe a filtered set that the sorted set
/// has not caught up with.
#[derive(Debug, Clone)]
pub struct TableView {
    raw: Vec<SharedRecord>,
    filters: FilterState,
    sort: Option<SortSpec>,
    page: PageState,
    filtered: Vec<SharedRecord>,
    sorted: Vec<SharedRecord>,
}

impl Default for TableView {
    fn default() -> Self {
        TableView::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableView {
    pub fn new(page_size: usize) -> Self {
        Self {
            raw: Vec::new(),
            filters: FilterState::default(),
            sort: None,
            page: PageState::first(page_size),
            filtered: Vec::new(),
            sorted: Vec::new(),
        }
    }

    /// Replace the raw records after a data-source load. Filters reset,
    /// sort is kept and reapplied to the new records.
    pub fn ingest(&mut self, records: Vec<ProductRecord>) {
        self.raw = records.into_iter().map(Arc::new).collect();
        self.filters = FilterState::default();
        debug!(records = self.raw.len(), "ingested raw records");
        self.recompute(Stage::Filter);
    }

    /// Live global search. Becomes the active search entry point.
    pub fn set_global_search(&mut self, term: impl Into<String>) {
        self.filters.global = term.into();
        self.filters.active = ActiveSearch::Global;
        self.recompute(Stage::Filter);
    }

    /// Edit the text of a column filter box without searching yet.
    pub fn set_column_term(&mut self, column: Column, term: impl Into<String>) {
        self.filters.column_terms.insert(column, term.into());
    }

    pub fn submit_column_search(&mut self, column: Column) {
        self.filters.active = ActiveSearch::Column(column);
        self.recompute(Stage::Filter);
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.recompute(Stage::Filter);
    }

    /// Header click: same column flips direction, another column starts ascending.
    pub fn activate_sort(&mut self, column: Column) {
        self.set_sort(Some(SortSpec::toggled(self.sort, column)));
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
        self.recompute(Stage::Sort);
    }

    /// Only the pager runs on a page change. Index 0 is treated as page 1.
    pub fn set_page(&mut self, index: usize) {
        self.page.index = index.max(1);
    }

    fn recompute(&mut self, from: Stage) {
        if from == Stage::Filter {
            self.filtered = filter::apply(&self.raw, &self.filters);
        }
        self.sorted = sort::apply(&self.filtered, self.sort);
        self.page.index = 1;
        debug!(
            ?from,
            filtered = self.filtered.len(),
            sorted = self.sorted.len(),
            "table recomputed"
        );
    }

    pub fn visible_page(&self) -> Page {
        pager::page(&self.sorted, self.page)
    }

    pub fn raw(&self) -> &[SharedRecord] {
        &self.raw
    }

    pub fn filtered(&self) -> &[SharedRecord] {
        &self.filtered
    }

    pub fn sorted(&self) -> &[SharedRecord] {
        &self.sorted
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page.index
    }

    pub fn page_size(&self) -> usize {
        self.page.size
    }

    pub fn total_items(&self) -> usize {
        self.sorted().len()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total_items(), self.page.size)
    }

    /// Distinct non-empty categories in the raw set, in display order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .raw
            .iter()
            .filter(|record| !record.category.is_empty())
            .map(|record| record.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        categories.sort_by_cached_key(|category| CollationKey::new(category));
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::product::ProductId;
    use crate::domain::entities::table::SortDirection;

    fn product(id: i64, title: &str, price: f64) -> ProductRecord {
        ProductRecord {
            id: ProductId(id),
            title: title.to_string(),
            price,
            category: "misc".to_string(),
            description: String::new(),
            display_price: format!("${price:.2}"),
        }
    }

    fn numbered(count: i64) -> Vec<ProductRecord> {
        (1..=count)
            .map(|id| product(id, &format!("Item {id}"), id as f64))
            .collect()
    }

    fn ids(records: &[SharedRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn unloaded_view_is_empty() {
        let view = TableView::default();

        assert!(view.visible_page().items.is_empty());
        assert_eq!(view.total_items(), 0);
        assert_eq!(view.page_count(), 0);
        assert_eq!(view.page_index(), 1);
    }

    #[test]
    fn pages_through_thirty_records() {
        let mut view = TableView::default();
        view.ingest(numbered(30));

        assert_eq!(ids(&view.visible_page().items), (1..=25).collect::<Vec<_>>());

        view.set_page(2);
        let second = view.visible_page();
        assert_eq!(ids(&second.items), (26..=30).collect::<Vec<_>>());
        assert_eq!(second.total_items, 30, "page change keeps the total");
        assert_eq!(view.page_count(), 2);
    }

    #[test]
    fn header_activation_toggles_direction() {
        let mut view = TableView::default();
        view.ingest(vec![
            product(1, "a", 10.0),
            product(2, "b", 5.0),
            product(3, "c", 20.0),
        ]);
        let prices = |view: &TableView| -> Vec<f64> {
            view.visible_page().items.iter().map(|r| r.price).collect()
        };

        view.activate_sort(Column::Price);
        assert_eq!(prices(&view), vec![5.0, 10.0, 20.0]);

        view.activate_sort(Column::Price);
        assert_eq!(prices(&view), vec![20.0, 10.0, 5.0]);

        view.activate_sort(Column::Title);
        assert_eq!(
            view.sort(),
            Some(SortSpec::new(Column::Title, SortDirection::Asc)),
            "another column starts ascending"
        );
    }

    #[test]
    fn clear_filters_keeps_sort() {
        let mut view = TableView::default();
        view.ingest(vec![
            product(1, "Banana", 1.0),
            product(2, "apple", 2.0),
            product(3, "Cherry", 3.0),
        ]);
        view.set_sort(Some(SortSpec::new(Column::Title, SortDirection::Desc)));
        view.set_column_term(Column::Title, "an");
        view.submit_column_search(Column::Title);
        assert_eq!(ids(view.sorted()), vec![1]);

        view.clear_filters();

        assert_eq!(ids(view.filtered()), ids(view.raw()), "filtered equals raw");
        assert_eq!(ids(view.sorted()), vec![3, 1, 2], "title descending still applies");
        assert_eq!(view.filters().column_term(Column::Title), "");
    }

    #[test]
    fn filter_change_reapplies_sort() {
        let mut view = TableView::default();
        view.ingest(vec![
            product(1, "phone b", 30.0),
            product(2, "tablet", 10.0),
            product(3, "phone a", 20.0),
        ]);
        view.set_sort(Some(SortSpec::new(Column::Price, SortDirection::Asc)));

        view.set_global_search("phone");

        assert_eq!(ids(view.sorted()), vec![3, 1], "sorted follows the new filtered set");
    }

    #[test]
    fn mutations_reset_page_to_first() {
        let mut view = TableView::new(2);
        view.ingest(numbered(10));

        view.set_page(4);
        view.set_global_search("1");
        assert_eq!(view.page_index(), 1, "global search resets the page");

        view.set_page(2);
        view.set_column_term(Column::Id, "1");
        assert_eq!(view.page_index(), 2, "editing a draft term does not");
        view.submit_column_search(Column::Id);
        assert_eq!(view.page_index(), 1, "column search resets the page");

        view.set_page(3);
        view.activate_sort(Column::Id);
        assert_eq!(view.page_index(), 1, "sort resets the page");

        view.set_page(3);
        view.clear_filters();
        assert_eq!(view.page_index(), 1, "clear filters resets the page");
    }

    #[test]
    fn page_beyond_results_is_empty() {
        let mut view = TableView::new(5);
        view.ingest(numbered(20));
        view.set_page(4);
        assert_eq!(view.visible_page().items.len(), 5);

        view.set_page(9);
        assert!(view.visible_page().items.is_empty(), "out of range page is empty");
    }

    #[test]
    fn categories_are_distinct_and_pickable() {
        let mut view = TableView::default();
        let mut records = numbered(4);
        records[0].category = "smartphones".to_string();
        records[1].category = "Laptops".to_string();
        records[2].category = "smartphones".to_string();
        records[3].category = String::new();
        view.ingest(records);

        assert_eq!(view.categories(), vec!["Laptops", "smartphones"]);

        view.set_page(2);
        view.set_column_term(Column::Category, "smartphones");
        view.submit_column_search(Column::Category);

        assert_eq!(ids(view.filtered()), vec![1, 3]);
        assert_eq!(view.filters().column_term(Column::Category), "smartphones");
        assert_eq!(view.page_index(), 1);
        assert_eq!(view.total_items(), 2);
        assert_eq!(view.page_count(), 1);
    }

    #[test]
    fn reingest_resets_filters_but_keeps_sort() {
        let mut view = TableView::default();
        view.ingest(numbered(3));
        view.set_global_search("2");
        view.set_sort(Some(SortSpec::new(Column::Id, SortDirection::Desc)));

        view.ingest(numbered(4));

        assert!(view.filters().is_cleared());
        assert_eq!(ids(view.sorted()), vec![4, 3, 2, 1]);
    }
}
