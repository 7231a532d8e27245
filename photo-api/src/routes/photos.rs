use std::sync::Arc;

use axum::{extract::Path, Extension, Json};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    gallery::{PhotoGallery, SignedPhotoUrl},
    types::AppError,
};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PhotoPath {
    /// Object key of the photo
    #[serde(rename = "photoName")]
    pub photo_name: String,
}

/// Lists every photo in the bucket with a signed URL
///
/// Each URL stays valid for 24 hours. If listing or any signature fails
/// the request fails as a whole and the store's error message is
/// returned as the body.
#[instrument(skip(gallery))]
pub async fn list_photos(
    Extension(gallery): Extension<Arc<PhotoGallery>>,
) -> Result<Json<Vec<SignedPhotoUrl>>, AppError> {
    let photos = gallery.list_photos().await?;

    tracing::info!("Signed {} photo URLs", photos.len());

    Ok(Json(photos))
}

/// Returns a signed URL for a single photo
///
/// The photo is not checked for existence, so an unknown name still gets
/// a URL, which fails when fetched.
#[instrument(skip(gallery))]
pub async fn get_photo(
    Extension(gallery): Extension<Arc<PhotoGallery>>,
    Path(path): Path<PhotoPath>,
) -> Result<Json<SignedPhotoUrl>, AppError> {
    let photo = gallery.get_photo(&path.photo_name).await?;

    Ok(Json(photo))
}
