//! Food search over a saved OpenFoodFacts export

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use rebalance_core::food::openfoodfacts::{self, Endpoint};
use rebalance_core::food::{CachedFoodSearch, FoodItem, FoodSource};

/// A food source that answers from a saved search response
///
/// The whole catalog is parsed once; searches filter it by name.
pub struct CatalogSource {
    path: PathBuf,
    items: Vec<FoodItem>,
}

impl CatalogSource {
    pub fn open(path: &Path) -> Result<Self> {
        let body = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let items = openfoodfacts::parse_search(&body)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
        tracing::debug!(path = %path.display(), items = items.len(), "Catalog loaded");
        Ok(Self {
            path: path.to_path_buf(),
            items,
        })
    }
}

#[async_trait]
impl FoodSource for CatalogSource {
    async fn search(&self, query: &str) -> rebalance_core::Result<Vec<FoodItem>> {
        Ok(self
            .items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(query) || item.brand.to_lowercase().contains(query)
            })
            .cloned()
            .collect())
    }

    async fn lookup_barcode(&self, _barcode: &str) -> rebalance_core::Result<Option<FoodItem>> {
        Err(rebalance_core::Error::NotFound(format!(
            "Barcode lookup is not available for catalog {}",
            self.path.display()
        )))
    }

    fn name(&self) -> &str {
        "catalog"
    }
}

pub async fn cmd_food(
    config: &rebalance_core::Config,
    query: &str,
    catalog: &Path,
    grams: Option<f64>,
) -> Result<()> {
    let source = CatalogSource::open(catalog)?;
    let search = CachedFoodSearch::new(source, config.food.cache_capacity);
    let items = search.search(query).await;
    let endpoint = Endpoint::from_config(&config.food);

    println!();
    if items.is_empty() {
        println!("   No foods found for '{}'", query.trim());
        print_refresh_hint(&endpoint, query);
        println!();
        return Ok(());
    }

    println!("🔎 {} result{} for '{}'", items.len(), if items.len() == 1 { "" } else { "s" }, query.trim());
    println!("   ─────────────────────────────────────────────");
    for item in &items {
        let brand = if item.brand.is_empty() {
            String::new()
        } else {
            format!(" ({})", item.brand)
        };
        println!(
            "   {}{}: {:.0} kcal · P {:.0} · C {:.0} · F {:.0} per {}",
            item.name, brand, item.calories, item.protein, item.carbs, item.fat, item.per
        );
    }

    if let (Some(grams), Some(first)) = (grams, items.first()) {
        let entry = first.to_meal_entry(grams, chrono::Local::now().into());
        println!();
        println!("   {:.0} g of {}:", grams, first.name);
        println!("{}", serde_json::to_string_pretty(&entry)?);
    }
    print_refresh_hint(&endpoint, query);
    println!();
    Ok(())
}

/// Command that fetches a fresh catalog for this query
pub fn refresh_command(endpoint: &Endpoint, query: &str) -> String {
    format!(
        "curl -A '{}' '{}'",
        endpoint.user_agent(),
        endpoint.search_url(query)
    )
}

fn print_refresh_hint(endpoint: &Endpoint, query: &str) {
    println!();
    println!("   Refresh catalog: {}", refresh_command(endpoint, query));
}
