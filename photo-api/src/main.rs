use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use photo_api::{
    gallery::PhotoGallery,
    photo_storage::{ObjectStore, S3ObjectStore},
    server,
    types::Environment,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // JSON logs for staging/production (Datadog), regular format for development
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    info!("Starting Photo Gallery API in {:?} environment", environment);

    let gallery_config = environment.gallery_config()?;

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let store: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore::new(s3_client));
    let gallery = Arc::new(PhotoGallery::new(store, gallery_config));

    info!(
        "✅ Serving photos from bucket {} with {}s signed URLs",
        gallery.config().bucket_name(),
        gallery.config().url_expiry().as_secs()
    );

    server::start(environment, gallery).await
}
