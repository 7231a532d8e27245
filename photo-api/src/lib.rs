//! Photo Gallery API: signed URLs for the photos in an S3 bucket

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

/// Signed-URL photo listing
pub mod gallery;

/// Object storage abstraction and its S3 implementation
pub mod photo_storage;

/// HTTP routes
pub mod routes;

/// HTTP server setup
pub mod server;

/// Configuration and error types
pub mod types;
