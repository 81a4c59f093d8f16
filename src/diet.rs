//! Ingredient-based diet classification.
//!
//! A recipe is tagged `regular` as soon as any ingredient mentions meat or
//! seafood, `vegan` when nothing mentions dairy, egg or honey either, and
//! `vegetarian` otherwise.
//!
//! Matching is plain substring search over lower-cased ingredient names, so a
//! keyword matches anywhere inside an ingredient: `"egg"` matches
//! `"eggplant"` and `"ham"` matches `"graham crackers"`. These over-matches
//! are kept as-is; switching to whole-word matching would change which
//! recipes show up under each diet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BrowseError;

pub const MEAT_KEYWORDS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "bacon",
    "ham",
    "lamb",
    "veal",
    "turkey",
    "sausage",
    "prosciutto",
    "salami",
    "chorizo",
    "meat",
    "ground beef",
];

pub const FISH_KEYWORDS: &[&str] = &[
    "fish", "salmon", "tuna", "shrimp", "prawn", "cod", "anchovy", "sardine", "crab", "lobster",
    "mussel", "clam", "oyster",
];

pub const DAIRY_KEYWORDS: &[&str] = &[
    "milk",
    "cheese",
    "mozzarella",
    "cheddar",
    "parmesan",
    "butter",
    "cream",
    "yogurt",
    "yoghurt",
    "ghee",
    "ricotta",
    "feta",
    "sour cream",
];

pub const EGG_KEYWORDS: &[&str] = &["egg", "eggs", "egg yolk", "egg white", "mayonnaise"];

pub const HONEY_KEYWORDS: &[&str] = &["honey", "royal jelly"];

/// Coarse diet category of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietLabel {
    Vegan,
    Vegetarian,
    #[default]
    Regular,
}

impl DietLabel {
    /// Labels in the order they are offered for filtering
    pub const ALL: [DietLabel; 3] = [DietLabel::Regular, DietLabel::Vegetarian, DietLabel::Vegan];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietLabel::Vegan => "vegan",
            DietLabel::Vegetarian => "vegetarian",
            DietLabel::Regular => "regular",
        }
    }

    /// Capitalized form used on filter buttons ("Vegetarian")
    pub fn display_name(&self) -> &'static str {
        match self {
            DietLabel::Vegan => "Vegan",
            DietLabel::Vegetarian => "Vegetarian",
            DietLabel::Regular => "Regular",
        }
    }
}

impl fmt::Display for DietLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietLabel {
    type Err = BrowseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegan" => Ok(DietLabel::Vegan),
            "vegetarian" => Ok(DietLabel::Vegetarian),
            "regular" => Ok(DietLabel::Regular),
            other => Err(BrowseError::InvalidDiet(other.to_string())),
        }
    }
}

/// Returns true if any ingredient contains any of the keywords as a substring.
///
/// Ingredients are expected to be lower-cased already (see
/// [`crate::model::extract_ingredients`]).
pub fn contains_any<S: AsRef<str>>(ingredients: &[S], keywords: &[&str]) -> bool {
    ingredients
        .iter()
        .any(|ingredient| keywords.iter().any(|kw| ingredient.as_ref().contains(kw)))
}

/// Which animal-product categories were spotted in an ingredient list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DietFlags {
    pub meat: bool,
    pub fish_or_seafood: bool,
    pub dairy: bool,
    pub egg: bool,
    pub honey: bool,
}

impl DietFlags {
    pub fn detect<S: AsRef<str>>(ingredients: &[S]) -> Self {
        DietFlags {
            meat: contains_any(ingredients, MEAT_KEYWORDS),
            fish_or_seafood: contains_any(ingredients, FISH_KEYWORDS),
            dairy: contains_any(ingredients, DAIRY_KEYWORDS),
            egg: contains_any(ingredients, EGG_KEYWORDS),
            honey: contains_any(ingredients, HONEY_KEYWORDS),
        }
    }

    /// Meat or seafood wins over everything else; only then do dairy, egg
    /// and honey decide between vegetarian and vegan.
    pub fn label(&self) -> DietLabel {
        if self.meat || self.fish_or_seafood {
            return DietLabel::Regular;
        }

        if !self.dairy && !self.egg && !self.honey {
            return DietLabel::Vegan;
        }

        DietLabel::Vegetarian
    }
}

/// Classify a list of normalized ingredient names.
///
/// Total over its input: the empty list is `Vegan`.
pub fn classify_diet<S: AsRef<str>>(ingredients: &[S]) -> DietLabel {
    DietFlags::detect(ingredients).label()
}
