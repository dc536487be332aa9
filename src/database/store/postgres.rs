use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::debug;
use uuid::Uuid;

use super::{PhotoStore, StoreError};
use crate::database::models::{CategoryRef, NewPhoto, PhotoChanges, PhotoRecord, PhotoView, UserRef};
use crate::filter::PhotoFilter;

const RECORD_COLUMNS: &str =
    "id, category_id, path, title, description, user_id, is_public, registered_date";

const SELECT_EXPANDED: &str = "SELECT p.id, p.path, p.title, p.description, p.is_public, \
     c.id AS category_ref_id, c.name AS category_name, \
     u.id AS user_ref_id, u.email AS user_email \
     FROM photos p \
     LEFT JOIN categories c ON c.id = p.category_id \
     LEFT JOIN users u ON u.id = p.user_id";

/// Listing row with both references joined in.
#[derive(Debug, FromRow)]
struct ExpandedRow {
    id: Uuid,
    path: String,
    title: String,
    description: Option<String>,
    is_public: bool,
    category_ref_id: Option<Uuid>,
    category_name: Option<String>,
    user_ref_id: Option<Uuid>,
    user_email: Option<String>,
}

impl From<ExpandedRow> for PhotoView {
    fn from(row: ExpandedRow) -> Self {
        let category = match (row.category_ref_id, row.category_name) {
            (Some(id), Some(name)) => Some(CategoryRef { id, name }),
            _ => None,
        };
        let user = match (row.user_ref_id, row.user_email) {
            (Some(_), Some(email)) => Some(UserRef { email }),
            _ => None,
        };
        PhotoView {
            id: row.id,
            category,
            path: row.path,
            title: row.title,
            desc: row.description,
            user,
            is_public: row.is_public,
        }
    }
}

/// PostgreSQL-backed photo store.
#[derive(Clone)]
pub struct PgPhotoStore {
    pool: PgPool,
}

impl PgPhotoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn select_sql(filter: &PhotoFilter) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(SELECT_EXPANDED);
        filter.push_where(&mut qb);
        qb.push(" ORDER BY p.registered_date, p.id");
        qb
    }
}

#[async_trait]
impl PhotoStore for PgPhotoStore {
    async fn find(&self, filter: &PhotoFilter) -> Result<Vec<PhotoView>, StoreError> {
        let mut qb = Self::select_sql(filter);
        debug!("photo find: {}", qb.sql());
        let rows = qb.build_query_as::<ExpandedRow>().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(PhotoView::from).collect())
    }

    async fn insert(&self, photo: NewPhoto) -> Result<PhotoRecord, StoreError> {
        let record = photo.into_record();
        let sql = format!(
            "INSERT INTO photos ({cols}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {cols}",
            cols = RECORD_COLUMNS
        );
        let stored = sqlx::query_as::<_, PhotoRecord>(&sql)
            .bind(record.id)
            .bind(record.category)
            .bind(&record.path)
            .bind(&record.title)
            .bind(&record.desc)
            .bind(record.user)
            .bind(record.is_public)
            .bind(record.registered_date)
            .fetch_one(&self.pool)
            .await?;
        Ok(stored)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        changes: PhotoChanges,
    ) -> Result<Option<PhotoRecord>, StoreError> {
        let sql = format!(
            "UPDATE photos SET category_id = $2, path = $3, title = $4, \
             description = $5, is_public = $6 WHERE id = $1 RETURNING {}",
            RECORD_COLUMNS
        );
        let updated = sqlx::query_as::<_, PhotoRecord>(&sql)
            .bind(id)
            .bind(changes.category)
            .bind(changes.path)
            .bind(changes.title)
            .bind(changes.desc)
            .bind(changes.is_public)
            .fetch_optional(&self.pool)
            .await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<PhotoRecord>, StoreError> {
        let sql = format!("DELETE FROM photos WHERE id = $1 RETURNING {}", RECORD_COLUMNS);
        let deleted = sqlx::query_as::<_, PhotoRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
