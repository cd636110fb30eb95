use serde::Deserialize;

/// One externally sourced recipe record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
    #[serde(rename = "strCategory")]
    pub category: String,
    #[serde(rename = "strArea")]
    pub area: String,
}

/// Envelope returned by TheMealDB's search endpoint.
///
/// The API reports "no matches" as `"meals": null` rather than an empty
/// array.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub meals: Option<Vec<Recipe>>,
}
