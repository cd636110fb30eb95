use reqwest::Client;
use tracing::debug;

use crate::fetch::error::FetchError;
use crate::fetch::model::{Recipe, SearchResponse};
use crate::fetch::FetchOutcome;

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Read-only client for TheMealDB's search endpoint.
pub struct RecipeClient {
    http: Client,
    base_url: String,
}

impl RecipeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch every recipe whose name starts with `letter`.
    ///
    /// Never returns an error: failures are folded into
    /// [`FetchOutcome::Failed`] so the caller decides how much to care.
    pub async fn search_by_letter(&self, letter: char) -> FetchOutcome {
        match self.try_search(letter).await {
            Ok(meals) => FetchOutcome::from_meals(meals),
            Err(err) => FetchOutcome::Failed(err),
        }
    }

    async fn try_search(&self, letter: char) -> Result<Option<Vec<Recipe>>, FetchError> {
        let url = format!("{}/search.php?f={}", self.base_url, letter);
        debug!(%url, "fetching recipes");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let payload: SearchResponse = response
            .json()
            .await
            .map_err(|source| FetchError::Decode { source })?;
        Ok(payload.meals)
    }
}

impl Default for RecipeClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
