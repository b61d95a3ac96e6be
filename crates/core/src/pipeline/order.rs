//! Stable position assignment.

use tokio::sync::mpsc;

use crate::catalog::{CatalogEntry, CatalogError};

use super::types::OrderedItem;

/// Drain the paginator stream into a complete ordered list.
///
/// Positions are a running counter starting at 1, incremented once per
/// entry. A single consumer loop means there is no race on the counter and
/// catalog order is preserved trivially. The whole stream is materialized
/// before any download starts; a listing error aborts with `Err` and
/// discards everything collected so far.
pub async fn collect_ordered(
    rx: &mut mpsc::Receiver<Result<CatalogEntry, CatalogError>>,
    retry_budget: u32,
) -> Result<Vec<OrderedItem>, CatalogError> {
    let mut items = Vec::new();
    let mut position = 1u32;

    while let Some(result) = rx.recv().await {
        let entry = result?;
        items.push(OrderedItem::new(entry, position, retry_budget));
        position += 1;
    }

    Ok(items)
}
