use crate::error::ApiError;

pub const PHOTO_REQUIRED: &str = "Photo is required";
pub const CATEGORY_REQUIRED: &str = "Category is required";
pub const TITLE_REQUIRED: &str = "Title is required";

/// Fields every create and update must carry.
#[derive(Debug, PartialEq, Eq)]
pub struct RequiredFields {
    pub path: String,
    pub category: String,
    pub title: String,
}

/// Check required fields in fixed order: path, category, title. The first
/// missing one wins. Empty strings count as missing.
pub fn required_fields(
    path: Option<String>,
    category: Option<String>,
    title: Option<String>,
) -> Result<RequiredFields, ApiError> {
    let path = require(path, PHOTO_REQUIRED)?;
    let category = require(category, CATEGORY_REQUIRED)?;
    let title = require(title, TITLE_REQUIRED)?;
    Ok(RequiredFields {
        path,
        category,
        title,
    })
}

fn require(value: Option<String>, message: &'static str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request(message))
}
