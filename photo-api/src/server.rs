use std::sync::Arc;

use aide::openapi::OpenApi;
use axum::{http::Method, Extension, Router};
use datadog_tracing::axum::{shutdown_signal, OtelAxumLayer, OtelInResponseLayer};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::routes;
use crate::{gallery::PhotoGallery, types::Environment};

const DEFAULT_PORT: u16 = 8002;

/// Builds the application router with its dependencies and layers
///
/// Any origin may call the API, with `GET` as the only allowed method.
/// Requests are not time-limited here; store calls are bounded by the
/// AWS SDK's operation timeout.
pub fn router(environment: Environment, gallery: Arc<PhotoGallery>) -> Router {
    let mut openapi = OpenApi::default();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    routes::handler()
        .finish_api(&mut openapi)
        .layer(Extension(openapi))
        .layer(Extension(environment))
        .layer(Extension(gallery))
        .layer(cors)
        // Include trace context as header into the response
        .layer(OtelInResponseLayer)
        // Start OpenTelemetry trace on incoming request
        .layer(OtelAxumLayer::default())
}

/// Starts the server with the given environment and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(environment: Environment, gallery: Arc<PhotoGallery>) -> anyhow::Result<()> {
    let router = router(environment, gallery);

    let addr = std::net::SocketAddr::from((
        [0, 0, 0, 0],
        std::env::var("PORT").map_or(Ok(DEFAULT_PORT), |p| p.parse())?,
    ));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("📷 Photo Gallery API started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}
