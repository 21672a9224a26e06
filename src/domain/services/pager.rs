use crate::domain::entities::product::SharedRecord;
use crate::domain::entities::table::{Page, PageState};

/// Slice the requested page out of `sorted`. Out-of-range pages are empty.
pub fn page(sorted: &[SharedRecord], state: PageState) -> Page {
    let total_items = sorted.len();
    let items = match state.index.checked_sub(1) {
        Some(offset_pages) if state.size > 0 => {
            let start = offset_pages.saturating_mul(state.size);
            let end = start.saturating_add(state.size).min(total_items);
            sorted
                .get(start..end)
                .map(|slice| slice.to_vec())
                .unwrap_or_default()
        }
        _ => Vec::new(),
    };
    Page { items, total_items }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::entities::product::{ProductId, ProductRecord};
    use crate::domain::entities::table::{page_count, DEFAULT_PAGE_SIZE};

    fn records(count: i64) -> Vec<SharedRecord> {
        (1..=count)
            .map(|id| {
                Arc::new(ProductRecord {
                    id: ProductId(id),
                    title: format!("Item {id}"),
                    price: id as f64,
                    category: "misc".to_string(),
                    description: String::new(),
                    display_price: String::new(),
                })
            })
            .collect()
    }

    fn ids(page: &Page) -> Vec<i64> {
        page.items.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn thirty_records_split_into_two_pages() {
        let sorted = records(30);

        let first = page(&sorted, PageState::first(DEFAULT_PAGE_SIZE));
        let second = page(
            &sorted,
            PageState {
                index: 2,
                size: DEFAULT_PAGE_SIZE,
            },
        );

        assert_eq!(ids(&first), (1..=25).collect::<Vec<_>>());
        assert_eq!(ids(&second), (26..=30).collect::<Vec<_>>());
        assert_eq!(first.total_items, 30);
        assert_eq!(second.total_items, 30);
        assert_eq!(page_count(first.total_items, DEFAULT_PAGE_SIZE), 2);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let sorted = records(5);

        let beyond = page(&sorted, PageState { index: 3, size: 25 });
        let zero = page(&sorted, PageState { index: 0, size: 25 });

        assert!(beyond.items.is_empty(), "page past the end should be empty");
        assert!(zero.items.is_empty(), "page index is 1-based");
        assert_eq!(beyond.total_items, 5, "total is independent of the page");
    }

    #[test]
    fn empty_input_has_no_pages() {
        let empty = page(&[], PageState::default());

        assert!(empty.items.is_empty());
        assert_eq!(page_count(empty.total_items, DEFAULT_PAGE_SIZE), 0);
    }
}
