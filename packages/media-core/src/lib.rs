pub mod cache;
pub mod config;
pub mod constants;
pub mod errors;
pub mod request;
pub mod service;
pub mod storage;
pub mod transform;
pub mod transformer;
pub mod validation;

// 公開API
pub use cache::{derive_key, CacheStore};
pub use config::MediaConfig;
pub use constants::{DEFAULT_QUALITY, MAX_PIXELS};
pub use errors::{MediaError, StorageError, TransformError};
pub use request::ProcessingRequest;
pub use service::{Artifact, ImageService};
pub use storage::SourceStore;
pub use transform::OutputFormat;
pub use transformer::ImageTransformer;
pub use validation::{validate_filename, validate_quality};
