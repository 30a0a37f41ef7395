//! Static Asset References

use crate::models::Category;

/// Placeholder shown when a product image fails to load.
pub fn placeholder(category: Category) -> &'static str {
    match category {
        Category::Food => "/assets/food-placeholder.png",
        Category::Drink => "/assets/drink-placeholder.png",
        Category::Dessert => "/assets/dessert-placeholder.png",
    }
}
