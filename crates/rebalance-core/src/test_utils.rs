//! Test utilities for rebalance-core
//!
//! Provides an in-memory food source that can be used in unit and
//! integration tests instead of the real food database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::food::{FoodItem, FoodSource};

/// In-memory food source
///
/// Search matches foods whose lowercased name contains the query. Call
/// counts let tests verify caching.
#[derive(Default)]
pub struct MockFoodSource {
    foods: Vec<FoodItem>,
    barcodes: HashMap<String, FoodItem>,
    fail: bool,
    search_calls: AtomicUsize,
    barcode_calls: AtomicUsize,
}

impl MockFoodSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every call fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_food(mut self, item: FoodItem) -> Self {
        self.foods.push(item);
        self
    }

    pub fn with_barcode(mut self, barcode: &str, item: FoodItem) -> Self {
        self.barcodes.insert(barcode.to_string(), item);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn barcode_calls(&self) -> usize {
        self.barcode_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FoodSource for MockFoodSource {
    async fn search(&self, query: &str) -> Result<Vec<FoodItem>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Source("mock search failure".into()));
        }
        Ok(self
            .foods
            .iter()
            .filter(|f| f.name.to_lowercase().contains(query))
            .cloned()
            .collect())
    }

    async fn lookup_barcode(&self, barcode: &str) -> Result<Option<FoodItem>> {
        self.barcode_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Source("mock barcode failure".into()));
        }
        Ok(self.barcodes.get(barcode).cloned())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// A per-100 g food with only calories set
pub fn sample_food(name: &str, calories: f64) -> FoodItem {
    FoodItem {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        brand: String::new(),
        image: None,
        calories,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
        per: "100g".to_string(),
    }
}
