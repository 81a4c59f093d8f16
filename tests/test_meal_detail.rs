use mealdb_diet::{classify_meal, extract_ingredients, DietLabel, Meal, MealDbClient, MealSource};
use mockito::{Matcher, Server};
use serde_json::{json, Map, Value};

fn as_record(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_extraction_reference_record() {
    let record = as_record(json!({
        "strIngredient1": "Milk",
        "strIngredient2": "",
        "strIngredient3": null,
        "strIngredient5": "Flour "
    }));

    assert_eq!(extract_ingredients(&record), vec!["milk", "flour"]);
}

#[test]
fn test_extraction_of_empty_record() {
    assert!(extract_ingredients(&Map::new()).is_empty());
}

#[test]
fn test_detail_text_lists_measures_and_instructions() {
    let record = as_record(json!({
        "idMeal": "52959",
        "strMeal": "Baked salmon with fennel & tomatoes",
        "strCategory": "Seafood",
        "strArea": "British",
        "strInstructions": "Heat oven to 180C.",
        "strIngredient1": "Fennel",
        "strMeasure1": "2 medium",
        "strIngredient2": "Salmon",
        "strMeasure2": "2 fillets",
        "strIngredient3": "Olive Oil",
        "strMeasure3": null
    }));

    let meal = Meal::from_record(&record);
    let text = meal.to_detail_text();

    assert!(text.contains("# Baked salmon with fennel & tomatoes"));
    assert!(text.contains("Category: Seafood"));
    assert!(text.contains("Origin: British"));
    assert!(text.contains("• Fennel - 2 medium\n"));
    assert!(text.contains("• Salmon - 2 fillets\n"));
    assert!(text.contains("• Olive Oil\n"));
    assert!(text.contains("Heat oven to 180C."));
    assert_eq!(classify_meal(&meal), DietLabel::Regular);
}

#[tokio::test]
async fn test_lookup_and_classify_from_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52893".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"meals": [{
                "idMeal": "52893",
                "strMeal": "Apple & Blackberry Crumble",
                "strCategory": "Dessert",
                "strArea": "British",
                "strInstructions": null,
                "strIngredient1": "Plain Flour",
                "strIngredient2": "Caster Sugar",
                "strIngredient3": "Butter",
                "strIngredient4": "Braeburn Apples",
                "strIngredient5": "",
                "strIngredient6": null
            }]}"#,
        )
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url()).unwrap();
    let meal = client.lookup_meal("52893").await.unwrap().unwrap();

    assert_eq!(
        meal.ingredients(),
        vec!["plain flour", "caster sugar", "butter", "braeburn apples"]
    );
    assert_eq!(classify_meal(&meal), DietLabel::Vegetarian);
    assert!(meal
        .to_detail_text()
        .contains("No instructions available."));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_lookup_record_without_name_is_kept_and_tagged() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"meals": [{"idMeal": 7, "strMeal": null, "strIngredient1": "Milk"}]}"#)
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url()).unwrap();
    let meal = client.lookup_meal("7").await.unwrap().unwrap();

    assert_eq!(meal.id, "7");
    assert!(meal.name.is_empty());
    assert_eq!(classify_meal(&meal), DietLabel::Vegetarian);
}

#[tokio::test]
async fn test_list_categories() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/categories.php")
        .with_status(200)
        .with_body(
            r#"{"categories": [
                {"idCategory": "1", "strCategory": "Beef", "strCategoryThumb": "https://example.com/beef.png", "strCategoryDescription": "Beef is the culinary name for meat from cattle."},
                {"idCategory": "2", "strCategory": "Breakfast", "strCategoryThumb": "https://example.com/breakfast.png", "strCategoryDescription": "Breakfast is the first meal of a day."}
            ]}"#,
        )
        .create_async()
        .await;

    let client = MealDbClient::with_base_url(server.url()).unwrap();
    let categories = client.list_categories().await.unwrap();

    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Beef", "Breakfast"]);
}
