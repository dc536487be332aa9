pub mod body;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;
pub mod validate;

use serde::Serialize;

use crate::database::models::PhotoSummary;

pub use body::PhotoBody;

// Re-export handler functions for use in routing
pub use create::create;
pub use delete::delete;
pub use list::{list_all, list_owned, list_public};
pub use update::update;

/// Update and delete do not tell a missing photo apart from a forbidden one.
pub const NOT_FOUND_OR_UNAUTHORISED: &str = "Photo not found or user not authorised";

/// Body of a successful create or update.
#[derive(Debug, Serialize)]
pub struct PhotoSaved {
    pub message: &'static str,
    pub photo: PhotoSummary,
}
