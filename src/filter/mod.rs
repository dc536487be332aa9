use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::database::models::PhotoRecord;

/// Equality filter over the photo collection. Unset fields match anything,
/// so `PhotoFilter::default()` selects every photo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhotoFilter {
    pub is_public: Option<bool>,
    pub user: Option<Uuid>,
}

impl PhotoFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn public() -> Self {
        Self {
            is_public: Some(true),
            ..Self::default()
        }
    }

    pub fn owned_by(user: Uuid) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }

    pub fn matches(&self, record: &PhotoRecord) -> bool {
        self.is_public.map_or(true, |v| record.is_public == v)
            && self.user.map_or(true, |u| record.user == u)
    }

    /// Append a WHERE clause against the `p` (photos) alias. Values are bound,
    /// never interpolated.
    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        let mut sep = " WHERE ";
        if let Some(is_public) = self.is_public {
            qb.push(sep).push("p.is_public = ").push_bind(is_public);
            sep = " AND ";
        }
        if let Some(user) = self.user {
            qb.push(sep).push("p.user_id = ").push_bind(user);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::NewPhoto;

    fn photo(user: Uuid, is_public: bool) -> PhotoRecord {
        NewPhoto {
            category: Uuid::new_v4(),
            path: "p.jpg".to_string(),
            title: "t".to_string(),
            desc: None,
            user,
            is_public,
        }
        .into_record()
    }

    #[test]
    fn public_filter_only_matches_public_photos() {
        let owner = Uuid::new_v4();
        assert!(PhotoFilter::public().matches(&photo(owner, true)));
        assert!(!PhotoFilter::public().matches(&photo(owner, false)));
    }

    #[test]
    fn owner_filter_compares_user_id() {
        let owner = Uuid::new_v4();
        let filter = PhotoFilter::owned_by(owner);
        assert!(filter.matches(&photo(owner, false)));
        assert!(!filter.matches(&photo(Uuid::new_v4(), true)));
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(PhotoFilter::all().matches(&photo(Uuid::new_v4(), false)));
    }

    #[test]
    fn renders_bound_where_clause() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM photos p");
        PhotoFilter::all().push_where(&mut qb);
        assert_eq!(qb.sql(), "SELECT * FROM photos p");

        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM photos p");
        PhotoFilter { is_public: Some(true), user: Some(Uuid::new_v4()) }.push_where(&mut qb);
        assert_eq!(
            qb.sql(),
            "SELECT * FROM photos p WHERE p.is_public = $1 AND p.user_id = $2"
        );
    }
}
