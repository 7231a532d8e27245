use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use http_body_util::BodyExt;
use photo_api::{
    gallery::PhotoGallery,
    photo_storage::InMemoryObjectStore,
    server,
    types::{Environment, GalleryConfig},
};
use tower::ServiceExt;

pub const TEST_BUCKET: &str = "simple-app-photos";

/// Setup test environment with tracing
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Router wired to an in-memory object store
pub struct TestContext {
    pub router: Router,
    pub store: Arc<InMemoryObjectStore>,
}

impl TestContext {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::with_environment(Environment::Development, keys)
    }

    pub fn with_environment<I, K>(environment: Environment, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        setup_test_env();

        let store = Arc::new(InMemoryObjectStore::with_keys(keys));
        let config = GalleryConfig::new(TEST_BUCKET).expect("test bucket name is valid");
        let gallery = Arc::new(PhotoGallery::new(store.clone(), config));

        Self {
            router: server::router(environment, gallery),
            store,
        }
    }

    pub async fn send_get_request(&self, route: &str) -> Response {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())
            .expect("Failed to build request");

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Read response body as UTF-8 text
pub async fn response_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
