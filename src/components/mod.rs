//! UI Components

mod catalog_card;
mod catalog_view;
mod footer;
mod image_with_fallback;

pub use catalog_card::CatalogCard;
pub use catalog_view::{CatalogView, CategoryTheme};
pub use footer::Footer;
pub use image_with_fallback::ImageWithFallback;
