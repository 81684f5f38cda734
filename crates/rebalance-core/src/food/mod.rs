//! Food database lookups
//!
//! The food database (text search and barcode lookup) is an external
//! service. This module defines the collaborator interface, the mapping from
//! the OpenFoodFacts payloads into [`FoodItem`], and a bounded search cache.
//!
//! # Architecture
//!
//! - `FoodSource` trait: the call/response contract for any food database
//! - `openfoodfacts`: payload types and mapping for OpenFoodFacts responses
//! - `CachedFoodSearch`: wraps a source with an LRU cache of search results

pub mod cache;
pub mod openfoodfacts;

pub use cache::{CachedFoodSearch, SearchCache};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::MealEntry;

/// Queries shorter than this are not sent to the source
pub const MIN_QUERY_LEN: usize = 2;

/// A food with nutrients per 100 g, as shown in search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub image: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Reference amount the nutrients are given for
    pub per: String,
}

impl FoodItem {
    /// Turn a per-100 g item into a meal entry for the given portion
    pub fn to_meal_entry(
        &self,
        grams: f64,
        logged_at: chrono::DateTime<chrono::FixedOffset>,
    ) -> MealEntry {
        let factor = grams / 100.0;
        MealEntry {
            name: self.name.clone(),
            calories: Some((self.calories * factor).round()),
            protein: Some((self.protein * factor).round()),
            carbs: Some((self.carbs * factor).round()),
            fat: Some((self.fat * factor).round()),
            logged_at,
        }
    }
}

/// Trait implemented by food database clients
///
/// Implementations do the network I/O; everything in this crate treats
/// them as opaque.
#[async_trait]
pub trait FoodSource: Send + Sync {
    /// Search foods by name (the query is already normalized)
    async fn search(&self, query: &str) -> Result<Vec<FoodItem>>;

    /// Look up a packaged food by barcode (EAN-13, EAN-8, ...)
    async fn lookup_barcode(&self, barcode: &str) -> Result<Option<FoodItem>>;

    /// Name for logging
    fn name(&self) -> &str;
}

/// Normalize a search query for caching and lookup
///
/// Returns `None` for queries too short to search.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return None;
    }
    Some(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Chicken Breast "), Some("chicken breast".into()));
        assert_eq!(normalize_query("a"), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("ÇA"), Some("ça".into()));
    }

    #[test]
    fn test_to_meal_entry_scales_portion() {
        let rice = FoodItem {
            id: "0".into(),
            name: "Rice".into(),
            brand: String::new(),
            image: None,
            calories: 130.0,
            protein: 3.0,
            carbs: 28.0,
            fat: 0.0,
            per: "100g".into(),
        };
        let at = chrono::FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 16, 12, 0, 0)
            .unwrap();

        let entry = rice.to_meal_entry(150.0, at);
        assert_eq!(entry.name, "Rice");
        assert_eq!(entry.calories, Some(195.0));
        assert_eq!(entry.carbs, Some(42.0));
        assert_eq!(entry.fat, Some(0.0));
    }
}
