mod config;
mod environment;
mod error;

pub use config::{ConfigError, GalleryConfig, SIGNED_URL_EXPIRY};
pub use environment::Environment;
pub use error::AppError;
