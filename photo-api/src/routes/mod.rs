mod docs;
mod health;
pub mod photos;

use aide::axum::{routing::get, ApiRouter};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route("/getAllPhotos", get(photos::list_photos))
        .api_route("/getPhoto/{photoName}", get(photos::get_photo))
}
