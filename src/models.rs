//! Storefront Models
//!
//! Data structures matching the backend catalog API and the persisted cart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Product category. Parses case-insensitively, serializes lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Drink,
    Dessert,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Drink => "drink",
            Category::Dessert => "dessert",
        }
    }

    /// URL segment for the category's catalog page.
    pub fn route_segment(&self) -> &'static str {
        match self {
            Category::Food => "foods",
            Category::Drink => "drinks",
            Category::Dessert => "desserts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "drink" => Ok(Category::Drink),
            "dessert" => Ok(Category::Dessert),
            _ => Err(UnknownCategory(raw.to_string())),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One purchasable product as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Currency-agnostic amount; the backend sends plain numbers.
    pub price: f64,
    pub category: Category,
    /// File name under the API's uploads path.
    pub image: String,
    #[serde(default)]
    pub origin: String,
}

/// One aggregated line of the persisted cart.
/// Lines are unique per (name, category).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    /// Price snapshot taken when the line was first added.
    pub price: f64,
    pub quantity: u32,
    /// Absolute image URL, resolved at add time.
    pub image: String,
    pub category: Category,
    #[serde(default)]
    pub origin: String,
}

impl CartLine {
    pub fn matches(&self, name: &str, category: Category) -> bool {
        self.name == name && self.category == category
    }
}

/// Thousands-grouped price for display (50000 -> "50,000").
pub fn format_price(price: f64) -> String {
    let value = price.round() as i64;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
