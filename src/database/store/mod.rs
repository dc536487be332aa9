pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{NewPhoto, PhotoChanges, PhotoRecord, PhotoView};
use crate::filter::PhotoFilter;

pub use memory::MemoryPhotoStore;
pub use postgres::PgPhotoStore;

/// Errors from a photo store backend. Every variant surfaces to clients as
/// an internal error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid {field} id: {value}")]
    InvalidId { field: &'static str, value: String },

    #[error("Missing required reference: {0}")]
    MissingReference(&'static str),

    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Store backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Persistence contract for photo documents.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Matching photos in registration order, references expanded.
    async fn find(&self, filter: &PhotoFilter) -> Result<Vec<PhotoView>, StoreError>;

    async fn insert(&self, photo: NewPhoto) -> Result<PhotoRecord, StoreError>;

    /// Post-update record, or `None` when no photo has this id.
    async fn update_by_id(
        &self,
        id: Uuid,
        changes: PhotoChanges,
    ) -> Result<Option<PhotoRecord>, StoreError>;

    /// Deleted record, or `None` when no photo has this id.
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<PhotoRecord>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;

    fn backend(&self) -> &'static str;
}

/// Parse a client-supplied identifier. A malformed id is a store failure,
/// not a validation error.
pub fn parse_id(field: &'static str, value: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(value).map_err(|_| StoreError::InvalidId {
        field,
        value: value.to_string(),
    })
}
