use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::diet::{classify_diet, DietLabel};

/// Number of positional ingredient/measure slots on a TheMealDB record
pub const INGREDIENT_SLOTS: usize = 20;

const INGREDIENT_FIELDS: [&str; INGREDIENT_SLOTS] = [
    "strIngredient1",
    "strIngredient2",
    "strIngredient3",
    "strIngredient4",
    "strIngredient5",
    "strIngredient6",
    "strIngredient7",
    "strIngredient8",
    "strIngredient9",
    "strIngredient10",
    "strIngredient11",
    "strIngredient12",
    "strIngredient13",
    "strIngredient14",
    "strIngredient15",
    "strIngredient16",
    "strIngredient17",
    "strIngredient18",
    "strIngredient19",
    "strIngredient20",
];

const MEASURE_FIELDS: [&str; INGREDIENT_SLOTS] = [
    "strMeasure1",
    "strMeasure2",
    "strMeasure3",
    "strMeasure4",
    "strMeasure5",
    "strMeasure6",
    "strMeasure7",
    "strMeasure8",
    "strMeasure9",
    "strMeasure10",
    "strMeasure11",
    "strMeasure12",
    "strMeasure13",
    "strMeasure14",
    "strMeasure15",
    "strMeasure16",
    "strMeasure17",
    "strMeasure18",
    "strMeasure19",
    "strMeasure20",
];

/// Read a string field, treating absent, non-string and blank values as missing.
fn non_blank(record: &Map<String, Value>, field: &str) -> Option<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn normalize(ingredient: &str) -> String {
    ingredient.trim().to_lowercase()
}

/// Pull the ingredient names out of a raw lookup record.
///
/// Slots are read in order 1..=20. Absent, non-string and blank slots are
/// skipped; everything else is trimmed and lower-cased.
pub fn extract_ingredients(record: &Map<String, Value>) -> Vec<String> {
    INGREDIENT_FIELDS
        .iter()
        .filter_map(|field| non_blank(record, field))
        .map(|ingredient| normalize(&ingredient))
        .collect()
}

/// Entry of a category listing (`filter.php?c=`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

/// Entry of `categories.php`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory")]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

/// One displayable ingredient with its measure, original casing kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub name: String,
    pub measure: Option<String>,
}

/// Full meal record as returned by `lookup.php?i=`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub thumbnail: Option<String>,
    /// Raw ingredient slots; index `i - 1` holds `strIngredient{i}`
    pub ingredient_slots: [Option<String>; INGREDIENT_SLOTS],
    /// Raw measure slots, same indexing as `ingredient_slots`
    pub measure_slots: [Option<String>; INGREDIENT_SLOTS],
}

impl Meal {
    /// Build a meal from a raw lookup record.
    ///
    /// Never fails: every field is optional. A missing `idMeal` or `strMeal`
    /// leaves `id`/`name` empty; numeric ids are accepted.
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let id = match record.get("idMeal") {
            Some(Value::Number(n)) => n.to_string(),
            _ => non_blank(record, "idMeal").unwrap_or_default(),
        };
        let name = non_blank(record, "strMeal").unwrap_or_default();

        let slot = |fields: &[&str; INGREDIENT_SLOTS], i: usize| -> Option<String> {
            record
                .get(fields[i])
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Meal {
            category: non_blank(record, "strCategory"),
            area: non_blank(record, "strArea"),
            instructions: non_blank(record, "strInstructions"),
            thumbnail: non_blank(record, "strMealThumb"),
            ingredient_slots: std::array::from_fn(|i| slot(&INGREDIENT_FIELDS, i)),
            measure_slots: std::array::from_fn(|i| slot(&MEASURE_FIELDS, i)),
            id,
            name,
        }
    }

    /// Fill an empty id, name or thumbnail from the listing entry
    pub fn or_summary(mut self, summary: &MealSummary) -> Self {
        if self.id.is_empty() {
            self.id = summary.id.clone();
        }
        if self.name.is_empty() {
            self.name = summary.name.clone();
        }
        if self.thumbnail.is_none() {
            self.thumbnail = summary.thumbnail.clone();
        }
        self
    }

    /// Normalized ingredient names, as fed to the classifier
    pub fn ingredients(&self) -> Vec<String> {
        self.ingredient_slots
            .iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .map(|s| normalize(s))
            .collect()
    }

    /// Ingredient/measure pairs for display
    pub fn ingredient_lines(&self) -> Vec<IngredientLine> {
        self.ingredient_slots
            .iter()
            .zip(self.measure_slots.iter())
            .filter_map(|(ingredient, measure)| {
                let name = ingredient.as_deref()?.trim();
                if name.is_empty() {
                    return None;
                }
                Some(IngredientLine {
                    name: name.to_string(),
                    measure: measure
                        .as_deref()
                        .map(str::trim)
                        .filter(|m| !m.is_empty())
                        .map(str::to_string),
                })
            })
            .collect()
    }

    /// Plain-text detail view
    pub fn to_detail_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", self.name));
        output.push_str(&format!(
            "Category: {}\n",
            self.category.as_deref().unwrap_or("N/A")
        ));
        output.push_str(&format!(
            "Origin: {}\n",
            self.area.as_deref().unwrap_or("N/A")
        ));
        if let Some(thumbnail) = &self.thumbnail {
            output.push_str(&format!("Image: {}\n", thumbnail));
        }

        output.push_str("\n## Ingredients\n\n");
        for line in self.ingredient_lines() {
            match &line.measure {
                Some(measure) => output.push_str(&format!("• {} - {}\n", line.name, measure)),
                None => output.push_str(&format!("• {}\n", line.name)),
            }
        }

        output.push_str("\n## Instructions\n\n");
        output.push_str(
            self.instructions
                .as_deref()
                .unwrap_or("No instructions available."),
        );
        output.push('\n');

        output
    }
}

/// A meal together with its inferred diet label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedMeal {
    #[serde(flatten)]
    pub meal: Meal,
    pub diet: DietLabel,
}

impl TaggedMeal {
    pub fn from_meal(meal: Meal) -> Self {
        let diet = classify_diet(&meal.ingredients());
        TaggedMeal { meal, diet }
    }
}
