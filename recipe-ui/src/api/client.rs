//! HTTP API Client
//!
//! `RecipeApi` over `gloo-net` for the browser.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use recipe_book::api::{collection_url, item_url};
use recipe_book::{ApiError, Recipe, RecipeApi, RecipeId, RecipePayload, DEFAULT_BASE_URL};
use serde::de::DeserializeOwned;

/// Local storage key holding an overridden base URL
const API_URL_KEY: &str = "recipes_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_BASE_URL))
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Recipe service client for the browser
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    base_url: String,
}

impl HttpRecipeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(&base_url.into()),
        }
    }

    /// Client for the configured base URL
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: response.status(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl RecipeApi for HttpRecipeApi {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        let response = Request::get(&collection_url(&self.base_url))
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    async fn create_recipe(&self, payload: &RecipePayload) -> Result<Recipe, ApiError> {
        let response = Request::post(&collection_url(&self.base_url))
            .json(payload)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    async fn update_recipe(
        &self,
        id: &RecipeId,
        payload: &RecipePayload,
    ) -> Result<Recipe, ApiError> {
        let response = Request::put(&item_url(&self.base_url, id))
            .json(payload)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    async fn delete_recipe(&self, id: &RecipeId) -> Result<(), ApiError> {
        let response = Request::delete(&item_url(&self.base_url, id))
            .send()
            .await
            .map_err(network)?;
        check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(" https://host/api/ "), "https://host/api");
        assert_eq!(
            HttpRecipeApi::new("https://test.taproit.com/").base_url,
            "https://test.taproit.com"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_base_url_round_trips_through_storage() {
        set_api_base("https://recipes.example/api/");
        assert_eq!(get_api_base(), "https://recipes.example/api");
        assert_eq!(
            HttpRecipeApi::from_storage().base_url,
            "https://recipes.example/api"
        );

        set_api_base(DEFAULT_BASE_URL);
        assert_eq!(get_api_base(), DEFAULT_BASE_URL);
    }
}
