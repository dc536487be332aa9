use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::{Category, User};

/// Photo as stored. Serialising this type yields the raw record with
/// unexpanded references; `registered_date` never leaves the process.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PhotoRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[sqlx(rename = "category_id")]
    pub category: Uuid,
    pub path: String,
    pub title: String,
    #[sqlx(rename = "description")]
    pub desc: Option<String>,
    #[sqlx(rename = "user_id")]
    pub user: Uuid,
    pub is_public: bool,
    #[serde(skip_serializing)]
    pub registered_date: DateTime<Utc>,
}

/// Document handed to the store on create. The store assigns the id and
/// the registration timestamp.
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub category: Uuid,
    pub path: String,
    pub title: String,
    pub desc: Option<String>,
    pub user: Uuid,
    pub is_public: bool,
}

impl NewPhoto {
    pub fn into_record(self) -> PhotoRecord {
        PhotoRecord {
            id: Uuid::new_v4(),
            category: self.category,
            path: self.path,
            title: self.title,
            desc: self.desc,
            user: self.user,
            is_public: self.is_public,
            registered_date: Utc::now(),
        }
    }
}

/// Full replacement applied by update. Every editable field is written,
/// so an absent `desc` clears it.
#[derive(Debug, Clone)]
pub struct PhotoChanges {
    pub category: Uuid,
    pub path: String,
    pub title: String,
    pub desc: Option<String>,
    pub is_public: bool,
}

impl PhotoChanges {
    pub fn apply(self, record: &mut PhotoRecord) {
        record.category = self.category;
        record.path = self.path;
        record.title = self.title;
        record.desc = self.desc;
        record.is_public = self.is_public;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRef {
    pub email: String,
}

/// Read projection used by every listing: references expanded, internal
/// fields dropped. A dangling reference expands to `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoView {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub category: Option<CategoryRef>,
    pub path: String,
    pub title: String,
    pub desc: Option<String>,
    pub user: Option<UserRef>,
    pub is_public: bool,
}

/// Reduced projection returned by create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub path: String,
    pub title: String,
    pub desc: Option<String>,
    pub is_public: bool,
}

impl PhotoRecord {
    pub fn summary(&self) -> PhotoSummary {
        PhotoSummary {
            id: self.id,
            path: self.path.clone(),
            title: self.title.clone(),
            desc: self.desc.clone(),
            is_public: self.is_public,
        }
    }

    pub fn expand(&self, category: Option<&Category>, user: Option<&User>) -> PhotoView {
        PhotoView {
            id: self.id,
            category: category.map(|c| CategoryRef {
                id: c.id,
                name: c.name.clone(),
            }),
            path: self.path.clone(),
            title: self.title.clone(),
            desc: self.desc.clone(),
            user: user.map(|u| UserRef {
                email: u.email.clone(),
            }),
            is_public: self.is_public,
        }
    }
}
