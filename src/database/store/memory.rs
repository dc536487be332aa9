use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{PhotoStore, StoreError};
use crate::database::models::{Category, NewPhoto, PhotoChanges, PhotoRecord, PhotoView, User};
use crate::filter::PhotoFilter;

#[derive(Default)]
struct Collections {
    photos: Vec<PhotoRecord>,
    users: HashMap<Uuid, User>,
    categories: HashMap<Uuid, Category>,
}

/// In-process store. Photos keep insertion order; references are not
/// checked on write, matching a document database.
#[derive(Default)]
pub struct MemoryPhotoStore {
    inner: RwLock<Collections>,
}

impl MemoryPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, email: impl Into<String>) -> User {
        let user = User::new(email);
        self.inner.write().await.users.insert(user.id, user.clone());
        user
    }

    pub async fn add_category(&self, name: impl Into<String>) -> Category {
        let category = Category::new(name);
        self.inner
            .write()
            .await
            .categories
            .insert(category.id, category.clone());
        category
    }

    pub async fn get(&self, id: Uuid) -> Option<PhotoRecord> {
        self.inner.read().await.photos.iter().find(|p| p.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.photos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl PhotoStore for MemoryPhotoStore {
    async fn find(&self, filter: &PhotoFilter) -> Result<Vec<PhotoView>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .photos
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.expand(inner.categories.get(&p.category), inner.users.get(&p.user)))
            .collect())
    }

    async fn insert(&self, photo: NewPhoto) -> Result<PhotoRecord, StoreError> {
        let record = photo.into_record();
        self.inner.write().await.photos.push(record.clone());
        Ok(record)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        changes: PhotoChanges,
    ) -> Result<Option<PhotoRecord>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.photos.iter_mut().find(|p| p.id == id).map(|record| {
            changes.apply(record);
            record.clone()
        }))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<PhotoRecord>, StoreError> {
        let mut inner = self.inner.write().await;
        let position = inner.photos.iter().position(|p| p.id == id);
        Ok(position.map(|idx| inner.photos.remove(idx)))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
