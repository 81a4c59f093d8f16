pub mod browse;
pub mod builder;
pub mod client;
pub mod config;
pub mod diet;
pub mod error;
pub mod model;
pub mod uniffi_bindings;

pub use browse::{filter_by_diet, tag_category, Course};
pub use builder::{BrowseResult, MealBrowser, MealBrowserBuilder};
pub use client::{MealDbClient, MealSource};
pub use config::BrowserConfig;
pub use diet::{classify_diet, DietFlags, DietLabel};
pub use error::BrowseError;
pub use model::{extract_ingredients, Category, IngredientLine, Meal, MealSummary, TaggedMeal};

// Re-export UniFFI types when feature is enabled
#[cfg(feature = "uniffi")]
pub use uniffi_bindings::*;

use log::debug;

/// Diet label of an already fetched meal
pub fn classify_meal(meal: &Meal) -> DietLabel {
    classify_diet(&meal.ingredients())
}

fn default_client() -> Result<MealDbClient, BrowseError> {
    let config = BrowserConfig::load()?;
    MealDbClient::new(&config)
}

/// Fetch one meal by id and tag it.
///
/// Fails with `MealNotFound` if TheMealDB has no meal with that id.
pub async fn fetch_meal(id: &str) -> Result<TaggedMeal, BrowseError> {
    let client = default_client()?;
    let meal = client
        .lookup_meal(id)
        .await?
        .ok_or_else(|| BrowseError::MealNotFound(id.to_string()))?;
    debug!("{:#?}", meal);
    Ok(TaggedMeal::from_meal(meal))
}

/// Fetch and tag every meal in a category, in listing order
pub async fn fetch_tagged_category(category: &str) -> Result<Vec<TaggedMeal>, BrowseError> {
    let config = BrowserConfig::load()?;
    let client = MealDbClient::new(&config)?;
    tag_category(&client, category, config.concurrency).await
}

/// All categories TheMealDB knows about
pub async fn fetch_categories() -> Result<Vec<Category>, BrowseError> {
    default_client()?.list_categories().await
}
