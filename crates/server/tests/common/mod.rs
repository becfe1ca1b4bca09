//! Common test utilities for in-process API testing.
//!
//! This module provides a test fixture that builds the router over real
//! SQLite stores in a temp directory, or over mock stores when a test needs
//! to control what the recipe store does on save.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use recipebook_core::{
    seed_units_of_measure, Config, DatabaseConfig, RecipeStore, SqliteRecipeStore,
    SqliteUnitOfMeasureStore, UnitOfMeasureStore,
    testing::{MockRecipeStore, MockUnitOfMeasureStore},
};
use recipebook_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use recipebook_core::testing::fixtures;

/// Test fixture for API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_add_ingredient() {
///     let fixture = TestFixture::new().await;
///     let recipe_id = fixture.create_recipe("Tacos").await;
///
///     let response = fixture.post(&format!("/api/v1/recipes/{}/ingredients", recipe_id), json!({
///         "description": "salt", "amount": 1.0, "uom": { "id": uom_id }
///     })).await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock recipe store, when the fixture was built with one
    pub mock_recipes: Option<Arc<MockRecipeStore>>,
    /// Temporary directory for the test database
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture over SQLite stores with the default units seeded.
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");

        let recipes: Arc<dyn RecipeStore> =
            Arc::new(SqliteRecipeStore::new(&db_path).expect("Failed to create recipe store"));
        let units = Arc::new(
            SqliteUnitOfMeasureStore::new(&db_path).expect("Failed to create uom store"),
        );
        seed_units_of_measure(units.as_ref()).expect("Failed to seed units");

        let config = Config {
            database: DatabaseConfig { path: db_path },
            ..Config::default()
        };

        Self::build(config, recipes, units, None, temp_dir)
    }

    /// Create a fixture over mock stores holding the fixture units.
    pub async fn with_mock_recipes() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mock = Arc::new(MockRecipeStore::new());
        let units = Arc::new(MockUnitOfMeasureStore::with_units(vec![
            fixtures::cup(),
            fixtures::teaspoon(),
        ]));

        Self::build(
            Config::default(),
            Arc::clone(&mock) as Arc<dyn RecipeStore>,
            units,
            Some(mock),
            temp_dir,
        )
    }

    fn build(
        config: Config,
        recipes: Arc<dyn RecipeStore>,
        units: Arc<dyn UnitOfMeasureStore>,
        mock_recipes: Option<Arc<MockRecipeStore>>,
        temp_dir: TempDir,
    ) -> Self {
        let state = Arc::new(AppState::new(config, recipes, units));
        let router = create_router(state);

        Self {
            router,
            mock_recipes,
            temp_dir,
        }
    }

    /// Create a recipe through the API and return its id.
    pub async fn create_recipe(&self, description: &str) -> String {
        let response = self
            .post("/api/v1/recipes", json!({ "description": description }))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["id"]
            .as_str()
            .expect("recipe id in response")
            .to_string()
    }

    /// Look up a unit of measure id by its description.
    pub async fn uom_id(&self, description: &str) -> String {
        let response = self.get("/api/v1/uoms").await;
        response.body["uoms"]
            .as_array()
            .expect("uoms array")
            .iter()
            .find(|u| u["description"] == description)
            .and_then(|u| u["id"].as_str())
            .expect("unit present")
            .to_string()
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
