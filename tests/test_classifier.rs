use mealdb_diet::diet::{DAIRY_KEYWORDS, EGG_KEYWORDS, FISH_KEYWORDS, HONEY_KEYWORDS, MEAT_KEYWORDS};
use mealdb_diet::{classify_diet, DietLabel};

#[test]
fn test_reference_scenarios() {
    let cases = vec![
        (vec!["chicken breast", "salt", "pepper"], DietLabel::Regular),
        (vec!["flour", "sugar", "water"], DietLabel::Vegan),
        (vec!["milk", "flour", "sugar"], DietLabel::Vegetarian),
        (vec!["egg", "salmon", "butter"], DietLabel::Regular),
        // "egg" is a substring of "eggplant"
        (vec!["eggplant", "olive oil"], DietLabel::Vegetarian),
    ];

    for (ingredients, expected) in cases {
        assert_eq!(
            classify_diet(&ingredients),
            expected,
            "ingredients: {:?}",
            ingredients
        );
    }
}

#[test]
fn test_every_meat_and_fish_keyword_forces_regular() {
    for keyword in MEAT_KEYWORDS.iter().chain(FISH_KEYWORDS) {
        let ingredients = ["tofu", "soy milk", *keyword, "honey"];
        assert_eq!(
            classify_diet(&ingredients),
            DietLabel::Regular,
            "keyword: {}",
            keyword
        );
    }
}

#[test]
fn test_every_animal_product_keyword_is_vegetarian() {
    for keyword in DAIRY_KEYWORDS
        .iter()
        .chain(EGG_KEYWORDS)
        .chain(HONEY_KEYWORDS)
    {
        let ingredients = ["rice", *keyword];
        assert_eq!(
            classify_diet(&ingredients),
            DietLabel::Vegetarian,
            "keyword: {}",
            keyword
        );
    }
}

#[test]
fn test_keyword_tables_are_verbatim() {
    assert_eq!(MEAT_KEYWORDS.len(), 14);
    assert_eq!(FISH_KEYWORDS.len(), 13);
    assert_eq!(DAIRY_KEYWORDS.len(), 13);
    assert_eq!(EGG_KEYWORDS.len(), 5);
    assert_eq!(HONEY_KEYWORDS.len(), 2);
    assert!(MEAT_KEYWORDS.contains(&"ground beef"));
    assert!(DAIRY_KEYWORDS.contains(&"sour cream"));
    assert!(EGG_KEYWORDS.contains(&"egg yolk"));
    assert!(HONEY_KEYWORDS.contains(&"royal jelly"));
}

#[test]
fn test_empty_and_plant_only_lists_are_vegan() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(classify_diet(&empty), DietLabel::Vegan);
    assert_eq!(
        classify_diet(&["chickpeas", "tahini", "lemon", "garlic"]),
        DietLabel::Vegan
    );
}

#[test]
fn test_substring_over_matches_are_preserved() {
    // Keywords match anywhere inside an ingredient name
    assert_eq!(classify_diet(&["graham crackers"]), DietLabel::Regular);
    assert_eq!(classify_diet(&["butternut squash"]), DietLabel::Vegetarian);
    assert_eq!(classify_diet(&["peanut butter"]), DietLabel::Vegetarian);
}

#[test]
fn test_order_independence_and_idempotence() {
    let mut ingredients = vec!["onion", "cheddar", "potato", "garlic"];
    let expected = classify_diet(&ingredients);
    assert_eq!(expected, DietLabel::Vegetarian);

    for _ in 0..ingredients.len() {
        ingredients.rotate_left(1);
        assert_eq!(classify_diet(&ingredients), expected);
    }
    ingredients.reverse();
    assert_eq!(classify_diet(&ingredients), expected);
    assert_eq!(classify_diet(&ingredients), classify_diet(&ingredients));
}

#[test]
fn test_duplicates_do_not_matter() {
    assert_eq!(
        classify_diet(&["water", "water", "water"]),
        classify_diet(&["water"])
    );
}

#[test]
fn test_concurrent_callers_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| classify_diet(&["milk", "oats"])))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), DietLabel::Vegetarian);
    }
}
