//! Runs the PostgreSQL store against a live database. Every test is a no-op
//! unless `DATABASE_URL` is set.

use anyhow::Result;
use uuid::Uuid;

use photo_api::config::DatabaseConfig;
use photo_api::database::models::{NewPhoto, PhotoChanges};
use photo_api::database::store::{PgPhotoStore, PhotoStore};
use photo_api::database::DatabaseManager;
use photo_api::filter::PhotoFilter;

async fn connect() -> Result<Option<PgPhotoStore>> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping postgres store test");
        return Ok(None);
    };
    let manager = DatabaseManager::connect(&DatabaseConfig {
        url: Some(url),
        max_connections: 2,
        connection_timeout: 10,
        run_migrations: true,
    })
    .await?;
    manager.migrate().await?;
    Ok(Some(PgPhotoStore::new(manager.pool())))
}

async fn seed_user(store: &PgPhotoStore) -> Result<(Uuid, String)> {
    let id = Uuid::new_v4();
    let email = format!("{}@example.com", id);
    sqlx::query("INSERT INTO users (id, email) VALUES ($1, $2)")
        .bind(id)
        .bind(&email)
        .execute(store.pool())
        .await?;
    Ok((id, email))
}

async fn seed_category(store: &PgPhotoStore, name: &str) -> Result<Uuid> {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO categories (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(store.pool())
        .await?;
    Ok(id)
}

fn photo(category: Uuid, user: Uuid, title: &str, is_public: bool) -> NewPhoto {
    NewPhoto {
        category,
        path: format!("uploads/{}.jpg", title),
        title: title.to_string(),
        desc: Some(format!("{} desc", title)),
        user,
        is_public,
    }
}

#[tokio::test]
async fn listing_joins_references_in_registration_order() -> Result<()> {
    let Some(store) = connect().await? else {
        return Ok(());
    };
    let (user, email) = seed_user(&store).await?;
    let category = seed_category(&store, "Mountains").await?;

    let first = store.insert(photo(category, user, "first", true)).await?;
    let second = store.insert(photo(Uuid::new_v4(), user, "second", false)).await?;

    let owned = store.find(&PhotoFilter::owned_by(user)).await?;
    assert_eq!(owned.len(), 2);
    assert_eq!(owned[0].id, first.id);
    assert_eq!(owned[1].id, second.id);

    let joined = owned[0].category.as_ref().expect("category expanded");
    assert_eq!(joined.id, category);
    assert_eq!(joined.name, "Mountains");
    assert_eq!(owned[0].user.as_ref().map(|u| u.email.as_str()), Some(email.as_str()));
    assert_eq!(owned[0].desc.as_deref(), Some("first desc"));

    assert!(owned[1].category.is_none());

    let public = store.find(&PhotoFilter::public()).await?;
    assert!(public.iter().any(|p| p.id == first.id));
    assert!(public.iter().all(|p| p.id != second.id));
    Ok(())
}

#[tokio::test]
async fn insert_update_and_delete_return_stored_rows() -> Result<()> {
    let Some(store) = connect().await? else {
        return Ok(());
    };
    let user = Uuid::new_v4();
    let inserted = store.insert(photo(Uuid::new_v4(), user, "lake", true)).await?;
    assert_eq!(inserted.user, user);
    assert!(inserted.is_public);

    let category = Uuid::new_v4();
    let updated = store
        .update_by_id(
            inserted.id,
            PhotoChanges {
                category,
                path: "uploads/river.jpg".to_string(),
                title: "river".to_string(),
                desc: None,
                is_public: false,
            },
        )
        .await?
        .expect("photo exists");
    assert_eq!(updated.id, inserted.id);
    assert_eq!(updated.category, category);
    assert_eq!(updated.desc, None);
    assert!(!updated.is_public);
    assert_eq!(updated.user, user);
    assert_eq!(updated.registered_date, inserted.registered_date);

    let deleted = store.delete_by_id(inserted.id).await?.expect("photo exists");
    assert_eq!(deleted, updated);
    assert!(store.delete_by_id(inserted.id).await?.is_none());
    assert!(store.find(&PhotoFilter::owned_by(user)).await?.is_empty());
    Ok(())
}
