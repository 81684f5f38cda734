//! OpenFoodFacts payload mapping
//!
//! Only the fields the app reads are modelled; everything else in the
//! payload is ignored. Nutrients are per 100 g.
//!
//! HTTP clients build their requests from an [`Endpoint`] and hand the
//! response bodies to [`parse_search`] / [`parse_product`].

use serde::Deserialize;

use crate::config::FoodConfig;
use crate::error::{Error, Result};

use super::FoodItem;

/// Fallback name for barcode hits without a product name
pub const UNKNOWN_PRODUCT: &str = "Unknown product";

/// Fields requested from the search endpoint
pub const SEARCH_FIELDS: &str = "product_name,nutriments,image_front_small_url,brands";

/// Nutriment block of a product
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Nutriments {
    #[serde(rename = "energy-kcal_100g")]
    pub energy_kcal_100g: Option<f64>,
    #[serde(rename = "energy-kcal")]
    pub energy_kcal: Option<f64>,
    #[serde(rename = "proteins_100g")]
    pub proteins_100g: Option<f64>,
    #[serde(rename = "carbohydrates_100g")]
    pub carbohydrates_100g: Option<f64>,
    #[serde(rename = "fat_100g")]
    pub fat_100g: Option<f64>,
}

impl Nutriments {
    /// Per-100 g energy, falling back to the unqualified value
    fn kcal(&self) -> f64 {
        self.energy_kcal_100g
            .filter(|v| *v != 0.0)
            .or(self.energy_kcal)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub product_name: Option<String>,
    pub brands: Option<String>,
    pub image_front_small_url: Option<String>,
    pub nutriments: Option<Nutriments>,
}

/// Response of `/cgi/search.pl?...&json=1`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Response of `/api/v0/product/<barcode>.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub status: i64,
    pub product: Option<Product>,
}

/// Search URL for a query (the caller URL-encodes `query`)
pub fn search_url(base_url: &str, encoded_query: &str, page_size: u32) -> String {
    format!(
        "{}/cgi/search.pl?search_terms={}&search_simple=1&action=process&json=1&page_size={}&fields={}",
        base_url.trim_end_matches('/'),
        encoded_query,
        page_size,
        SEARCH_FIELDS
    )
}

pub fn product_url(base_url: &str, barcode: &str) -> String {
    format!(
        "{}/api/v0/product/{}.json",
        base_url.trim_end_matches('/'),
        barcode
    )
}

/// Where and how to reach the food database, from `[food]` config
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    base_url: String,
    user_agent: String,
    page_size: u32,
}

impl Endpoint {
    pub fn from_config(config: &FoodConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
            page_size: config.search_page_size,
        }
    }

    /// Search URL for a raw (unencoded) query
    pub fn search_url(&self, query: &str) -> String {
        search_url(&self.base_url, &urlencoding::encode(query.trim()), self.page_size)
    }

    pub fn product_url(&self, barcode: &str) -> String {
        product_url(&self.base_url, &urlencoding::encode(barcode.trim()))
    }

    /// The database asks clients to identify themselves
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn to_item(id: String, name: String, product: &Product, nutriments: &Nutriments) -> FoodItem {
    FoodItem {
        id,
        name,
        brand: product.brands.clone().unwrap_or_default(),
        image: product.image_front_small_url.clone(),
        calories: nutriments.kcal().round(),
        protein: nutriments.proteins_100g.unwrap_or(0.0).round(),
        carbs: nutriments.carbohydrates_100g.unwrap_or(0.0).round(),
        fat: nutriments.fat_100g.unwrap_or(0.0).round(),
        per: "100g".to_string(),
    }
}

/// Map search results to food items
///
/// Products without a name or nutriments are dropped, as are items that
/// round to zero calories. Ids are the product's index in the response.
pub fn items_from_search(response: &SearchResponse) -> Vec<FoodItem> {
    response
        .products
        .iter()
        .filter_map(|product| {
            let name = product.product_name.as_deref().filter(|n| !n.is_empty())?;
            let nutriments = product.nutriments.as_ref()?;
            Some((name, product, nutriments))
        })
        .enumerate()
        .map(|(index, (name, product, nutriments))| {
            to_item(index.to_string(), name.to_string(), product, nutriments)
        })
        .filter(|item| item.calories > 0.0)
        .collect()
}

/// Map a barcode lookup; `None` when the product is unknown
pub fn item_from_product(barcode: &str, response: &ProductResponse) -> Option<FoodItem> {
    if response.status != 1 {
        tracing::debug!(barcode, "No product found for barcode");
        return None;
    }
    let product = response.product.as_ref()?;
    let name = product
        .product_name
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());
    let nutriments = product.nutriments.clone().unwrap_or_default();
    Some(to_item(barcode.to_string(), name, product, &nutriments))
}

/// Parse a raw search response body
pub fn parse_search(body: &str) -> Result<Vec<FoodItem>> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| Error::InvalidData(format!("Invalid search response: {}", e)))?;
    Ok(items_from_search(&response))
}

/// Parse a raw product response body
pub fn parse_product(barcode: &str, body: &str) -> Result<Option<FoodItem>> {
    let response: ProductResponse = serde_json::from_str(body)
        .map_err(|e| Error::InvalidData(format!("Invalid product response: {}", e)))?;
    Ok(item_from_product(barcode, &response))
}
