//! Remote Recipe Store Interface
//!
//! The four calls the recipe manager makes against the `recipes` collection
//! resource. The native binaries implement this with `reqwest`, the browser
//! frontend with `gloo-net`; neither transport's futures need to be `Send`.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Recipe, RecipeId, RecipePayload};

/// Name of the collection resource under the base URL
pub const COLLECTION: &str = "recipes";

/// Default base URL of the recipe service
pub const DEFAULT_BASE_URL: &str = "https://test.taproit.com";

/// `{base}/recipes`
pub fn collection_url(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), COLLECTION)
}

/// `{base}/recipes/{id}`
pub fn item_url(base_url: &str, id: &RecipeId) -> String {
    format!("{}/{}", collection_url(base_url), id.as_path_segment())
}

/// Transport to the remote recipe collection
#[async_trait(?Send)]
pub trait RecipeApi {
    /// `GET /recipes`
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError>;

    /// `POST /recipes`, returning the stored representation
    async fn create_recipe(&self, payload: &RecipePayload) -> Result<Recipe, ApiError>;

    /// `PUT /recipes/{id}`, returning the stored representation
    async fn update_recipe(&self, id: &RecipeId, payload: &RecipePayload)
        -> Result<Recipe, ApiError>;

    /// `DELETE /recipes/{id}`; the response body is ignored
    async fn delete_recipe(&self, id: &RecipeId) -> Result<(), ApiError>;
}

/// Errors from the remote recipe store
///
/// Network failures, client errors and server errors are all handled the
/// same way by the manager; the variants only serve reporting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Decode(String),
}
