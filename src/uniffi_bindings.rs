//! UniFFI bindings for mealdb-diet
//!
//! This module provides FFI-compatible types and functions for the iOS and Android apps.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;

use crate::{BrowseError, Category, DietLabel, IngredientLine, MealSource, TaggedMeal};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible diet label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiDietLabel {
    Vegan,
    Vegetarian,
    Regular,
}

impl From<DietLabel> for FfiDietLabel {
    fn from(label: DietLabel) -> Self {
        match label {
            DietLabel::Vegan => FfiDietLabel::Vegan,
            DietLabel::Vegetarian => FfiDietLabel::Vegetarian,
            DietLabel::Regular => FfiDietLabel::Regular,
        }
    }
}

impl From<FfiDietLabel> for DietLabel {
    fn from(label: FfiDietLabel) -> Self {
        match label {
            FfiDietLabel::Vegan => DietLabel::Vegan,
            FfiDietLabel::Vegetarian => DietLabel::Vegetarian,
            FfiDietLabel::Regular => DietLabel::Regular,
        }
    }
}

/// Ingredient with optional measure, ready for a bullet list
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredientLine {
    pub name: String,
    pub measure: Option<String>,
}

impl From<IngredientLine> for FfiIngredientLine {
    fn from(line: IngredientLine) -> Self {
        FfiIngredientLine {
            name: line.name,
            measure: line.measure,
        }
    }
}

/// FFI-compatible tagged meal, carrying everything the list and detail screens show
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiTaggedMeal {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub thumbnail: Option<String>,
    pub ingredients: Vec<FfiIngredientLine>,
    pub diet: FfiDietLabel,
}

impl From<TaggedMeal> for FfiTaggedMeal {
    fn from(tagged: TaggedMeal) -> Self {
        let ingredients = tagged
            .meal
            .ingredient_lines()
            .into_iter()
            .map(FfiIngredientLine::from)
            .collect();
        let meal = tagged.meal;

        FfiTaggedMeal {
            id: meal.id,
            name: meal.name,
            category: meal.category,
            area: meal.area,
            instructions: meal.instructions,
            thumbnail: meal.thumbnail,
            ingredients,
            diet: tagged.diet.into(),
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiCategory {
    pub name: String,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
}

impl From<Category> for FfiCategory {
    fn from(category: Category) -> Self {
        FfiCategory {
            name: category.name,
            thumbnail: category.thumbnail,
            description: category.description,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiBrowseError {
    /// Request to TheMealDB failed
    FetchError { message: String },
    /// Response had an unexpected shape
    ParseError { message: String },
    /// No meal with the requested id
    NotFound { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiBrowseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiBrowseError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiBrowseError::ParseError { message } => write!(f, "Parse error: {}", message),
            FfiBrowseError::NotFound { message } => write!(f, "Not found: {}", message),
            FfiBrowseError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiBrowseError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiBrowseError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiBrowseError {}

impl From<BrowseError> for FfiBrowseError {
    fn from(err: BrowseError) -> Self {
        match err {
            BrowseError::FetchError(e) => FfiBrowseError::FetchError {
                message: e.to_string(),
            },
            BrowseError::ParseError(msg) => FfiBrowseError::ParseError { message: msg },
            BrowseError::MealNotFound(id) => FfiBrowseError::NotFound { message: id },
            BrowseError::InvalidDiet(msg) | BrowseError::BuilderError(msg) => {
                FfiBrowseError::InvalidInput { message: msg }
            }
            BrowseError::ConfigError(e) => FfiBrowseError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// Configuration for browsing
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiBrowseConfig {
    /// Optional API root (uses TheMealDB if not specified)
    pub base_url: Option<String>,
    /// Optional timeout in seconds (uses default if not specified)
    pub timeout_seconds: Option<u64>,
    /// Optional limit on concurrent detail lookups
    pub concurrency: Option<u32>,
}

impl FfiBrowseConfig {
    fn into_config(self) -> crate::BrowserConfig {
        let mut config = crate::BrowserConfig::default();
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout = timeout;
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency as usize;
        }
        config
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiBrowseError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiBrowseError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Classify a list of ingredient names
///
/// Names are trimmed and lower-cased first; blank entries are ignored.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn classify_ingredients(ingredients: Vec<String>) -> FfiDietLabel {
    let normalized: Vec<String> = ingredients
        .iter()
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect();
    crate::classify_diet(&normalized).into()
}

/// Filter options in display order
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn diet_options() -> Vec<FfiDietLabel> {
    DietLabel::ALL.iter().map(|&d| d.into()).collect()
}

/// Fetch a category, tag each meal and optionally keep one diet
///
/// # Arguments
/// * `category` - TheMealDB category name, e.g. "Breakfast"
/// * `diet` - Optional diet filter; all meals are returned when absent
/// * `config` - Optional browse configuration
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn browse_category(
    category: String,
    diet: Option<FfiDietLabel>,
    config: Option<FfiBrowseConfig>,
) -> Result<Vec<FfiTaggedMeal>, FfiBrowseError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let mut builder = crate::MealBrowser::builder()
            .category(category)
            .config(config.unwrap_or_default().into_config());

        if let Some(diet) = diet {
            builder = builder.diet(diet.into());
        }

        let result = builder.build().await?;
        Ok(result.meals.into_iter().map(FfiTaggedMeal::from).collect())
    })
}

/// Fetch and tag one meal for the detail screen
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_meal(
    id: String,
    config: Option<FfiBrowseConfig>,
) -> Result<FfiTaggedMeal, FfiBrowseError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let config = config.unwrap_or_default().into_config();
        let client = crate::MealDbClient::new(&config)?;
        let meal = client
            .lookup_meal(&id)
            .await?
            .ok_or(BrowseError::MealNotFound(id))?;
        Ok(TaggedMeal::from_meal(meal).into())
    })
}

/// List all categories
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_categories(
    timeout_seconds: Option<u64>,
) -> Result<Vec<FfiCategory>, FfiBrowseError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let mut config = crate::BrowserConfig::default();
        if let Some(timeout) = timeout_seconds {
            config.timeout = timeout;
        }
        let client = crate::MealDbClient::new(&config)?;
        let categories = client.list_categories().await?;
        Ok(categories.into_iter().map(FfiCategory::from).collect())
    })
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Meal;

    #[test]
    fn test_ffi_tagged_meal_conversion() {
        let meal = Meal {
            id: "52965".to_string(),
            name: "Breakfast Potatoes".to_string(),
            area: Some("Canadian".to_string()),
            ingredient_slots: std::array::from_fn(|i| match i {
                0 => Some("Potatoes".to_string()),
                1 => Some("Olive Oil".to_string()),
                2 => Some("Bacon".to_string()),
                _ => None,
            }),
            measure_slots: std::array::from_fn(|i| (i == 0).then(|| "2 large".to_string())),
            ..Default::default()
        };

        let ffi: FfiTaggedMeal = TaggedMeal::from_meal(meal).into();
        assert_eq!(ffi.name, "Breakfast Potatoes");
        assert_eq!(ffi.diet, FfiDietLabel::Regular);
        assert_eq!(ffi.ingredients.len(), 3);
        assert_eq!(ffi.ingredients[0].measure.as_deref(), Some("2 large"));
        assert!(ffi.ingredients[1].measure.is_none());
    }

    #[test]
    fn test_classify_ingredients_normalizes() {
        let label = classify_ingredients(vec![
            " Tofu ".to_string(),
            "".to_string(),
            "HONEY".to_string(),
        ]);
        assert_eq!(label, FfiDietLabel::Vegetarian);
    }

    #[test]
    fn test_diet_options_order() {
        assert_eq!(
            diet_options(),
            vec![
                FfiDietLabel::Regular,
                FfiDietLabel::Vegetarian,
                FfiDietLabel::Vegan
            ]
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: FfiBrowseError = BrowseError::MealNotFound("42".to_string()).into();
        assert_eq!(err.to_string(), "Not found: 42");
    }

    #[test]
    fn test_get_version() {
        assert!(!get_version().is_empty());
    }
}
