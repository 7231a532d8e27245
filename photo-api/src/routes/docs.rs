use aide::{axum::ApiRouter, openapi::OpenApi, scalar::Scalar};
use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json,
};

use crate::types::Environment;

/// Scalar UI at `/docs` and the raw document at `/openapi.json`, both
/// answering 404 where the environment hides API docs
pub fn handler() -> ApiRouter {
    let scalar = Scalar::new("/openapi.json").with_title("Photo Gallery API Docs");

    ApiRouter::new()
        .route("/docs", scalar.axum_route())
        .route("/openapi.json", get(openapi_document))
        .layer(middleware::from_fn(hide_unless_enabled))
}

async fn hide_unless_enabled(
    Extension(environment): Extension<Environment>,
    request: Request,
    next: Next,
) -> Response {
    if environment.show_api_docs() {
        next.run(request).await
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

#[allow(clippy::unused_async)]
async fn openapi_document(Extension(openapi): Extension<OpenApi>) -> Json<OpenApi> {
    Json(openapi)
}
