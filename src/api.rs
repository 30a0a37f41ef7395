//! Catalog API Client
//!
//! One-shot fetch of the full product list over the storefront REST API.

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::config::api_base;
use crate::models::{CatalogItem, Category};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("backend reported failure")]
    Rejected,
}

#[derive(Debug, Deserialize)]
struct FoodsEnvelope {
    success: bool,
    #[serde(default)]
    foods: Vec<CatalogItem>,
}

/// Fetch the full catalog and keep items in the given category.
/// Order follows the API response.
pub async fn fetch_catalog(category: Category) -> Result<Vec<CatalogItem>, ApiError> {
    let url = format!("{}/api/foods", api_base());
    let envelope: FoodsEnvelope = Request::get(&url).send().await?.json().await?;
    if !envelope.success {
        return Err(ApiError::Rejected);
    }
    Ok(envelope
        .foods
        .into_iter()
        .filter(|item| item.category == category)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decodes_success_payload() {
        let raw = r#"{
            "success": true,
            "foods": [{
                "_id": "a1",
                "name": "Tiramisu",
                "description": "Espresso-soaked layers",
                "price": 50000,
                "category": "dessert",
                "image": "tiramisu.jpg",
                "origin": "Italy"
            }]
        }"#;
        let envelope: FoodsEnvelope = serde_json::from_str(raw).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.foods.len(), 1);
        assert_eq!(envelope.foods[0].category, Category::Dessert);
    }

    #[test]
    fn test_envelope_decodes_rejection_without_foods() {
        let envelope: FoodsEnvelope = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.foods.is_empty());
    }
}
