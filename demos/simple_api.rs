//! Simple API usage
//!
//! Classifies a hand-written ingredient list, then browses the breakfast
//! category and prints the vegetarian meals.

use mealdb_diet::{classify_diet, Course, DietLabel, MealBrowser};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Classify ===");
    let ingredients = ["eggplant", "olive oil", "garlic"];
    println!("{:?} -> {}", ingredients, classify_diet(&ingredients));

    println!("\n=== Browse ===");
    let result = MealBrowser::builder()
        .course(Course::Breakfast)
        .diet(DietLabel::Vegetarian)
        .build()
        .await?;

    println!(
        "{} of {} {} meals are {}",
        result.meals.len(),
        result.total,
        result.category,
        DietLabel::Vegetarian
    );
    for tagged in &result.meals {
        println!("- {}", tagged.meal.name);
    }

    Ok(())
}
