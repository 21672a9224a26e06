use tracing::debug;

use crate::domain::entities::product::SharedRecord;
use crate::domain::entities::table::{Column, SortDirection, SortSpec};
use crate::domain::services::collation::CollationKey;

/// Reorder `filtered` by `sort`. With no sort the input order is kept as is.
pub fn apply(filtered: &[SharedRecord], sort: Option<SortSpec>) -> Vec<SharedRecord> {
    let mut sorted = filtered.to_vec();
    let Some(SortSpec { column, direction }) = sort else {
        return sorted;
    };

    match column {
        Column::Id => sorted.sort_by(|a, b| direction.apply(a.id.cmp(&b.id))),
        Column::Price => sorted.sort_by(|a, b| direction.apply(a.price.total_cmp(&b.price))),
        Column::Title | Column::Category | Column::Description => {
            sorted.sort_by_cached_key(|record| {
                CollationKey::new(column.text_of(record).unwrap_or_default())
            });
            if direction == SortDirection::Desc {
                sorted.reverse();
            }
        }
    }

    debug!(%column, ?direction, rows = sorted.len(), "sort pass");
    sorted
}
