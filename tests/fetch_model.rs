use mealdeck::fetch::{FetchOutcome, SearchResponse};

/// Trimmed-down TheMealDB payload: the real response carries dozens of
/// fields per meal; only the five the card shows are modeled.
const SAMPLE: &str = r#"{
  "meals": [
    {
      "idMeal": "52768",
      "strMeal": "Apple Frangipan Tart",
      "strDrinkAlternate": null,
      "strCategory": "Dessert",
      "strArea": "British",
      "strInstructions": "Preheat the oven...",
      "strMealThumb": "https://www.themealdb.com/images/media/meals/wxywrq1468235067.jpg",
      "strTags": "Tart,Baking,Fruity",
      "strYoutube": ""
    },
    {
      "idMeal": "52893",
      "strMeal": "Apple & Blackberry Crumble",
      "strCategory": "Dessert",
      "strArea": "British",
      "strMealThumb": "https://www.themealdb.com/images/media/meals/xvsurr1511719182.jpg"
    }
  ]
}"#;

#[test]
fn parses_renamed_fields() {
    let response: SearchResponse = serde_json::from_str(SAMPLE).expect("payload should parse");
    let meals = response.meals.expect("meals should be present");
    assert_eq!(meals.len(), 2);
    assert_eq!(meals[0].id, "52768");
    assert_eq!(meals[0].name, "Apple Frangipan Tart");
    assert_eq!(meals[0].category, "Dessert");
    assert_eq!(meals[0].area, "British");
    assert!(meals[0].thumbnail.ends_with("wxywrq1468235067.jpg"));
}

#[test]
fn preserves_response_order() {
    let response: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
    let meals = response.meals.unwrap();
    assert_eq!(meals[0].id, "52768");
    assert_eq!(meals[1].id, "52893");
}

#[test]
fn null_meals_parses_to_none() {
    let response: SearchResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
    assert!(response.meals.is_none());
}

#[test]
fn missing_required_field_is_a_decode_failure() {
    let result: Result<SearchResponse, _> =
        serde_json::from_str(r#"{"meals": [{"idMeal": "1"}]}"#);
    assert!(result.is_err());
}

// -- Outcome classification ---------------------------------------------------

#[test]
fn populated_payload_classifies_as_loaded() {
    let response: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
    let outcome = FetchOutcome::from_meals(response.meals);
    let FetchOutcome::Loaded(recipes) = outcome else {
        panic!("expected Loaded");
    };
    assert_eq!(recipes.len(), 2);
}

#[test]
fn null_and_empty_both_classify_as_empty() {
    assert!(matches!(FetchOutcome::from_meals(None), FetchOutcome::Empty));
    assert!(matches!(
        FetchOutcome::from_meals(Some(Vec::new())),
        FetchOutcome::Empty
    ));
}
