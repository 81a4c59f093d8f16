use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

use crate::config::BrowserConfig;
use crate::error::BrowseError;
use crate::model::{Category, Meal, MealSummary};

/// Anything that can answer TheMealDB's three read endpoints
#[async_trait]
pub trait MealSource: Send + Sync {
    /// Meals in a category, in the order the source lists them
    async fn list_by_category(&self, category: &str) -> Result<Vec<MealSummary>, BrowseError>;

    /// Full record for one meal, `None` if the source has no such meal
    async fn lookup_meal(&self, id: &str) -> Result<Option<Meal>, BrowseError>;

    async fn list_categories(&self) -> Result<Vec<Category>, BrowseError>;
}

/// `{"meals": [...]}`; TheMealDB sends `{"meals": null}` for no results
#[derive(Debug, Deserialize)]
struct MealsEnvelope<T> {
    meals: Option<Vec<T>>,
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    categories: Option<Vec<Category>>,
}

pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &BrowserConfig) -> Result<Self, BrowseError> {
        Self::with_timeout(config, config.timeout_duration())
    }

    /// Like [`MealDbClient::new`], with a request timeout finer than whole seconds
    pub fn with_timeout(config: &BrowserConfig, timeout: Duration) -> Result<Self, BrowseError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(MealDbClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, BrowseError> {
        let config = BrowserConfig {
            base_url: base_url.into(),
            ..Default::default()
        };
        Self::new(&config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BrowseError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[async_trait]
impl MealSource for MealDbClient {
    async fn list_by_category(&self, category: &str) -> Result<Vec<MealSummary>, BrowseError> {
        let envelope: MealsEnvelope<MealSummary> =
            self.get_json("filter.php", &[("c", category)]).await?;
        let meals = envelope.meals.unwrap_or_default();
        debug!("Category '{}' lists {} meals", category, meals.len());
        Ok(meals)
    }

    async fn lookup_meal(&self, id: &str) -> Result<Option<Meal>, BrowseError> {
        let envelope: MealsEnvelope<Map<String, Value>> =
            self.get_json("lookup.php", &[("i", id)]).await?;

        match envelope.meals.and_then(|meals| meals.into_iter().next()) {
            Some(record) => {
                let mut meal = Meal::from_record(&record);
                if meal.id.is_empty() {
                    meal.id = id.to_string();
                }
                Ok(Some(meal))
            }
            None => {
                debug!("No meal found for id {}", id);
                Ok(None)
            }
        }
    }

    async fn list_categories(&self) -> Result<Vec<Category>, BrowseError> {
        let envelope: CategoriesEnvelope = self.get_json("categories.php", &[]).await?;
        Ok(envelope.categories.unwrap_or_default())
    }
}
