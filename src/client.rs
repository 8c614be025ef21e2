//! Recipe REST API Client
//!
//! Native HTTP transport for the remote `recipes` collection.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::{collection_url, item_url, ApiError, RecipeApi, DEFAULT_BASE_URL};
use crate::model::{Recipe, RecipeId, RecipePayload};

/// Configuration for the recipe client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the recipe service (e.g., "https://test.taproit.com")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

/// Recipe REST API client
pub struct RecipeClient {
    client: Client,
    config: ClientConfig,
}

impl RecipeClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fail on any non-2xx status, keeping the body text for the report
    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn network_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Network("request timed out".to_string())
    } else {
        ApiError::Network(e.to_string())
    }
}

#[async_trait(?Send)]
impl RecipeApi for RecipeClient {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        let url = collection_url(&self.config.base_url);
        tracing::debug!(%url, "GET recipes");

        let response = self.client.get(&url).send().await.map_err(network_error)?;
        Self::decode(response).await
    }

    async fn create_recipe(&self, payload: &RecipePayload) -> Result<Recipe, ApiError> {
        let url = collection_url(&self.config.base_url);
        tracing::debug!(%url, name = %payload.name, "POST recipe");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(network_error)?;
        Self::decode(response).await
    }

    async fn update_recipe(
        &self,
        id: &RecipeId,
        payload: &RecipePayload,
    ) -> Result<Recipe, ApiError> {
        let url = item_url(&self.config.base_url, id);
        tracing::debug!(%url, name = %payload.name, "PUT recipe");

        let response = self
            .client
            .put(&url)
            .json(payload)
            .send()
            .await
            .map_err(network_error)?;
        Self::decode(response).await
    }

    async fn delete_recipe(&self, id: &RecipeId) -> Result<(), ApiError> {
        let url = item_url(&self.config.base_url, id);
        tracing::debug!(%url, "DELETE recipe");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(network_error)?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::RecipeManager;
    use crate::model::FormField;
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        routing::{get, put},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// Minimal in-memory recipes service
    #[derive(Clone, Default)]
    struct MockStore {
        recipes: Arc<Mutex<Vec<Value>>>,
        next_id: Arc<Mutex<i64>>,
    }

    async fn list(State(store): State<MockStore>) -> Json<Vec<Value>> {
        Json(store.recipes.lock().unwrap().clone())
    }

    async fn create(State(store): State<MockStore>, Json(mut body): Json<Value>) -> Json<Value> {
        let mut next = store.next_id.lock().unwrap();
        *next += 1;
        body["id"] = json!(*next);
        store.recipes.lock().unwrap().push(body.clone());
        Json(body)
    }

    async fn update(
        State(store): State<MockStore>,
        Path(id): Path<i64>,
        Json(mut body): Json<Value>,
    ) -> Result<Json<Value>, StatusCode> {
        let mut recipes = store.recipes.lock().unwrap();
        let slot = recipes
            .iter_mut()
            .find(|r| r["id"] == json!(id))
            .ok_or(StatusCode::NOT_FOUND)?;
        body["id"] = json!(id);
        *slot = body.clone();
        Ok(Json(body))
    }

    async fn remove(State(store): State<MockStore>, Path(id): Path<i64>) -> StatusCode {
        let mut recipes = store.recipes.lock().unwrap();
        let before = recipes.len();
        recipes.retain(|r| r["id"] != json!(id));
        if recipes.len() < before {
            StatusCode::OK
        } else {
            StatusCode::NOT_FOUND
        }
    }

    async fn spawn_mock(seed: Vec<Value>) -> (String, MockStore) {
        let store = MockStore::default();
        *store.next_id.lock().unwrap() = seed.len() as i64;
        *store.recipes.lock().unwrap() = seed;

        let app = Router::new()
            .route("/recipes", get(list).post(create))
            .route("/recipes/:id", put(update).delete(remove))
            .with_state(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), store)
    }

    fn client_for(base_url: &str) -> RecipeClient {
        RecipeClient::new(ClientConfig {
            base_url: base_url.to_string(),
            request_timeout_ms: 5000,
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://test.taproit.com");
        assert_eq!(config.request_timeout_ms, 30_000);

        let client = client_for("http://127.0.0.1:9");
        assert_eq!(client.config().base_url, "http://127.0.0.1:9");
        assert_eq!(client.config().request_timeout_ms, 5000);
    }

    #[tokio::test]
    async fn test_list_recipes() {
        let (base, _store) = spawn_mock(vec![json!({
            "id": 1, "name": "Soup", "ingredients": ["salt", "water"], "method": ["boil", "serve"]
        })])
        .await;

        let recipes = client_for(&base).list_recipes().await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Soup");
        assert_eq!(recipes[0].ingredients.as_deref(), Some(&["salt".to_string(), "water".to_string()][..]));
    }

    #[tokio::test]
    async fn test_create_sends_sequences() {
        let (base, store) = spawn_mock(vec![json!({"id": 1, "name": "Soup"})]).await;
        let mut manager = RecipeManager::new(client_for(&base));
        manager.list().await.unwrap();

        manager.set_field(FormField::Name, "Tea");
        manager.set_field(FormField::Ingredients, "water, leaves");
        let created = manager.create().await.unwrap();

        assert_eq!(created.id, RecipeId::Number(2));
        assert_eq!(manager.recipes().len(), 2);

        let stored = store.recipes.lock().unwrap();
        assert_eq!(stored[1]["ingredients"], json!(["water", "leaves"]));
        assert_eq!(stored[1]["rating"], json!(0));
    }

    #[tokio::test]
    async fn test_update_and_delete_round() {
        let (base, store) = spawn_mock(vec![
            json!({"id": 1, "name": "Soup"}),
            json!({"id": 2, "name": "Tea", "ingredients": ["water", "leaves"], "method": []}),
        ])
        .await;
        let mut manager = RecipeManager::new(client_for(&base));
        manager.list().await.unwrap();

        manager.select(&RecipeId::Number(2)).unwrap();
        manager.set_field(FormField::Name, "Green tea");
        manager.submit().await.unwrap();

        assert_eq!(store.recipes.lock().unwrap()[1]["name"], "Green tea");
        assert_eq!(manager.recipes()[1].name, "Green tea");
        assert!(!manager.mode().is_editing());

        manager.delete(&RecipeId::Number(1)).await.unwrap();
        assert_eq!(manager.recipes().len(), 1);
        assert_eq!(store.recipes.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_status_error_is_reported() {
        let (base, _store) = spawn_mock(Vec::new()).await;
        let client = client_for(&base);

        let err = client.delete_recipe(&RecipeId::Number(42)).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let mut manager = RecipeManager::new(client_for(&base));
        let err = manager.list().await.unwrap_err();
        assert!(matches!(err, crate::manager::ManagerError::Api(ApiError::Network(_))));
        assert!(manager.recipes().is_empty());
    }
}
