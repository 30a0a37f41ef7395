//! Client-Side Shopping Cart
//!
//! Read-merge-write cart operations over an injected storage capability.
//! The browser build persists to `window.localStorage` under a single key;
//! tests inject an in-memory repository.

use crate::config::upload_url;
use crate::models::{CartLine, CatalogItem};

pub const CART_STORAGE_KEY: &str = "cart";

/// Storage capability for the persisted cart blob.
pub trait CartRepository {
    fn get(&self) -> Vec<CartLine>;
    fn put(&self, lines: &[CartLine]);
}

/// Decode a persisted cart blob. Anything unreadable is an empty cart;
/// the corrupted value is overwritten on the next write.
pub fn decode_cart(raw: &str) -> Vec<CartLine> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub fn encode_cart(lines: &[CartLine]) -> String {
    serde_json::to_string(lines).unwrap_or_else(|_| String::from("[]"))
}

/// Cart repository backed by `window.localStorage`.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageCart;

impl LocalStorageCart {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CartRepository for LocalStorageCart {
    fn get(&self) -> Vec<CartLine> {
        Self::storage()
            .and_then(|storage| storage.get_item(CART_STORAGE_KEY).ok().flatten())
            .map(|raw| decode_cart(&raw))
            .unwrap_or_default()
    }

    fn put(&self, lines: &[CartLine]) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.set_item(CART_STORAGE_KEY, &encode_cart(lines)).is_err() {
            web_sys::console::warn_1(&"cart write failed, storage unavailable".into());
        }
    }
}

/// Cart operations keyed by (name, category).
pub struct CartStore<R: CartRepository> {
    repo: R,
}

impl<R: CartRepository> CartStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Add one unit of `item`, merging into an existing line with the same
    /// (name, category) key. Each call is a full read-merge-write cycle.
    /// Returns the resulting quantity of the touched line.
    pub fn add_item(&self, item: &CatalogItem) -> u32 {
        let mut lines = self.repo.get();
        let quantity = match lines
            .iter_mut()
            .find(|line| line.matches(&item.name, item.category))
        {
            Some(line) => {
                line.quantity += 1;
                line.quantity
            }
            None => {
                lines.push(CartLine {
                    name: item.name.clone(),
                    price: item.price,
                    quantity: 1,
                    image: upload_url(&item.image),
                    category: item.category,
                    origin: item.origin.clone(),
                });
                1
            }
        };
        self.repo.put(&lines);
        quantity
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.repo.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::cell::RefCell;

    #[derive(Default)]
    struct InMemoryCart {
        lines: RefCell<Vec<CartLine>>,
    }

    impl CartRepository for InMemoryCart {
        fn get(&self) -> Vec<CartLine> {
            self.lines.borrow().clone()
        }

        fn put(&self, lines: &[CartLine]) {
            *self.lines.borrow_mut() = lines.to_vec();
        }
    }

    fn tiramisu() -> CatalogItem {
        CatalogItem {
            id: "a1".to_string(),
            name: "Tiramisu".to_string(),
            description: "Espresso-soaked layers".to_string(),
            price: 50000.0,
            category: Category::Dessert,
            image: "tiramisu.jpg".to_string(),
            origin: "Italy".to_string(),
        }
    }

    #[test]
    fn test_add_item_appends_new_line_with_snapshot() {
        let store = CartStore::new(InMemoryCart::default());
        assert_eq!(store.add_item(&tiramisu()), 1);

        let lines = store.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Tiramisu");
        assert_eq!(lines[0].quantity, 1);
        assert_eq!(lines[0].price, 50000.0);
        assert_eq!(lines[0].image, upload_url("tiramisu.jpg"));
        assert_eq!(lines[0].origin, "Italy");
    }

    #[test]
    fn test_add_item_twice_merges_into_one_line() {
        let store = CartStore::new(InMemoryCart::default());
        store.add_item(&tiramisu());
        assert_eq!(store.add_item(&tiramisu()), 2);

        let lines = store.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_same_name_different_category_stays_separate() {
        let store = CartStore::new(InMemoryCart::default());
        let dessert = tiramisu();
        let mut drink = tiramisu();
        drink.category = Category::Drink;

        store.add_item(&dessert);
        store.add_item(&drink);

        let lines = store.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.quantity == 1));
    }

    #[test]
    fn test_corrupted_blob_decodes_to_empty_cart() {
        assert!(decode_cart("not json").is_empty());
        assert!(decode_cart("").is_empty());
        assert!(decode_cart("{\"cart\":1}").is_empty());
    }

    #[test]
    fn test_cart_blob_round_trips() {
        let store = CartStore::new(InMemoryCart::default());
        store.add_item(&tiramisu());
        store.add_item(&tiramisu());
        let mut drink = tiramisu();
        drink.name = "Affogato".to_string();
        drink.category = Category::Drink;
        store.add_item(&drink);

        let lines = store.lines();
        let decoded = decode_cart(&encode_cart(&lines));
        assert_eq!(decoded, lines);
    }
}
