use std::time::Duration;

use log::info;

use crate::browse::{filter_by_diet, tag_category, Course};
use crate::client::MealDbClient;
use crate::config::BrowserConfig;
use crate::diet::DietLabel;
use crate::error::BrowseError;
use crate::model::TaggedMeal;

/// Result of browsing a category
#[derive(Debug, Clone)]
pub struct BrowseResult {
    /// TheMealDB category that was listed
    pub category: String,
    /// Diet filter that was applied, if any
    pub diet: Option<DietLabel>,
    /// Meals matching the filter, in listing order
    pub meals: Vec<TaggedMeal>,
    /// Number of meals tagged before filtering
    pub total: usize,
}

/// Builder for configuring and running a category browse
#[derive(Debug, Default)]
pub struct MealBrowserBuilder {
    category: Option<String>,
    diet: Option<DietLabel>,
    config: Option<BrowserConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    concurrency: Option<usize>,
}

impl MealBrowserBuilder {
    /// Browse an arbitrary TheMealDB category
    ///
    /// # Example
    /// ```
    /// use mealdb_diet::MealBrowser;
    ///
    /// let builder = MealBrowser::builder().category("Dessert");
    /// ```
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Browse the category behind a course preset
    ///
    /// # Example
    /// ```
    /// use mealdb_diet::{Course, MealBrowser};
    ///
    /// let builder = MealBrowser::builder().course(Course::Dinner);
    /// ```
    pub fn course(mut self, course: Course) -> Self {
        self.category = Some(course.category().to_string());
        self
    }

    /// Keep only meals with this label
    ///
    /// Without a diet, every tagged meal is returned.
    ///
    /// # Example
    /// ```
    /// use mealdb_diet::{DietLabel, MealBrowser};
    ///
    /// let builder = MealBrowser::builder()
    ///     .category("Breakfast")
    ///     .diet(DietLabel::Vegan);
    /// ```
    pub fn diet(mut self, diet: DietLabel) -> Self {
        self.diet = Some(diet);
        self
    }

    /// Start from an explicit configuration instead of loading one
    pub fn config(mut self, config: BrowserConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the API root
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use mealdb_diet::MealBrowser;
    /// use std::time::Duration;
    ///
    /// let builder = MealBrowser::builder()
    ///     .category("Breakfast")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Maximum number of detail lookups in flight
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Fetch, tag and filter the category
    ///
    /// # Errors
    /// Returns `BrowseError` if:
    /// - No category was specified
    /// - Concurrency is zero
    /// - Configuration can't be loaded
    /// - Any request fails
    ///
    /// # Example
    /// ```no_run
    /// # use mealdb_diet::{DietLabel, MealBrowser};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = MealBrowser::builder()
    ///     .category("Breakfast")
    ///     .diet(DietLabel::Vegetarian)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<BrowseResult, BrowseError> {
        let category = self
            .category
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| {
                BrowseError::BuilderError(
                    "No category specified. Use .category() or .course()".to_string(),
                )
            })?;

        let mut config = match self.config {
            Some(config) => config,
            None => BrowserConfig::load()?,
        };
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        if config.concurrency == 0 {
            return Err(BrowseError::BuilderError(
                "concurrency must be at least 1".to_string(),
            ));
        }

        let timeout = self.timeout.unwrap_or_else(|| config.timeout_duration());
        let client = MealDbClient::with_timeout(&config, timeout)?;
        let tagged = tag_category(&client, &category, config.concurrency).await?;
        let total = tagged.len();

        let meals = match self.diet {
            Some(diet) => filter_by_diet(&tagged, diet),
            None => tagged,
        };
        info!(
            "{} of {} meals in '{}' match diet {}",
            meals.len(),
            total,
            category,
            self.diet.map(|d| d.as_str()).unwrap_or("any")
        );

        Ok(BrowseResult {
            category,
            diet: self.diet,
            meals,
            total,
        })
    }
}

/// Main entry point for the builder API
pub struct MealBrowser;

impl MealBrowser {
    /// Creates a new builder for browsing a category
    ///
    /// # Example
    /// ```
    /// use mealdb_diet::MealBrowser;
    ///
    /// let builder = MealBrowser::builder();
    /// ```
    pub fn builder() -> MealBrowserBuilder {
        MealBrowserBuilder::default()
    }
}
