use thiserror::Error;

/// Errors that can occur while fetching and tagging meals
#[derive(Error, Debug)]
pub enum BrowseError {
    /// HTTP request failed or returned a non-success status
    #[error("Failed to fetch from TheMealDB: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Response did not have the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Lookup returned no meal for the requested id
    #[error("Meal not found: {0}")]
    MealNotFound(String),

    /// Unknown diet label
    #[error("Invalid diet '{0}', expected one of: regular, vegetarian, vegan")]
    InvalidDiet(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
