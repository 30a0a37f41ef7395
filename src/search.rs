//! Client-Side Catalog Search

use crate::models::CatalogItem;

/// Keep items whose name or description contains `query` as a
/// case-insensitive substring. An empty query keeps everything.
/// Order is preserved.
pub fn filter_catalog(items: &[CatalogItem], query: &str) -> Vec<CatalogItem> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
