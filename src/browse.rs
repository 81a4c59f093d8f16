use futures::stream::{self, StreamExt, TryStreamExt};
use log::{debug, info};
use std::fmt;
use std::str::FromStr;

use crate::client::MealSource;
use crate::diet::DietLabel;
use crate::error::BrowseError;
use crate::model::TaggedMeal;

/// Meal courses offered on the home screen, each backed by a TheMealDB category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Course {
    Breakfast,
    Dinner,
}

impl Course {
    pub const ALL: [Course; 2] = [Course::Breakfast, Course::Dinner];

    /// TheMealDB category listed for this course
    pub fn category(&self) -> &'static str {
        match self {
            Course::Breakfast => "Breakfast",
            Course::Dinner => "Pasta",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Course::Breakfast => "Breakfast",
            Course::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Course {
    type Err = BrowseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.title().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                BrowseError::BuilderError(format!(
                    "Unknown course '{}', expected breakfast or dinner",
                    name
                ))
            })
    }
}

/// List a category and tag every meal in it with a diet label.
///
/// Detail lookups run concurrently, at most `concurrency` at a time. The
/// result keeps the listing order. Meals the lookup endpoint doesn't know are
/// dropped; any failed request fails the whole call. A detail record missing
/// its id, name or thumbnail takes them from the listing entry.
pub async fn tag_category(
    source: &dyn MealSource,
    category: &str,
    concurrency: usize,
) -> Result<Vec<TaggedMeal>, BrowseError> {
    if concurrency == 0 {
        return Err(BrowseError::BuilderError(
            "concurrency must be at least 1".to_string(),
        ));
    }

    let summaries = source.list_by_category(category).await?;
    info!(
        "Tagging {} meals from category '{}'",
        summaries.len(),
        category
    );

    let meals: Vec<_> = stream::iter(summaries)
        .map(|summary| async move {
            let meal = source.lookup_meal(&summary.id).await?;
            Ok::<_, BrowseError>(meal.map(|meal| meal.or_summary(&summary)))
        })
        .buffered(concurrency)
        .try_collect()
        .await?;

    let tagged: Vec<TaggedMeal> = meals
        .into_iter()
        .flatten()
        .map(|meal| {
            let tagged = TaggedMeal::from_meal(meal);
            debug!("{} ({}) -> {}", tagged.meal.name, tagged.meal.id, tagged.diet);
            tagged
        })
        .collect();

    Ok(tagged)
}

/// Meals carrying exactly the given label, listing order kept
pub fn filter_by_diet(meals: &[TaggedMeal], diet: DietLabel) -> Vec<TaggedMeal> {
    meals
        .iter()
        .filter(|meal| meal.diet == diet)
        .cloned()
        .collect()
}
