// ABOUTME: Tag storage layer using SQLite
// ABOUTME: Slug assignment, owner type registry, and cascade deletion for tags

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use cookbook_core::{next_suffix, validate_tag_name, SLUG_SUFFIX_LEN};
use cookbook_storage::StorageError;
use sqlx::{Row, SqlitePool};
use tracing::{debug, warn};

use crate::error::{TagError, TagResult};
use crate::owners::OwnerRef;
use crate::types::{Tag, TagCreateInput};

/// Source of random slug suffixes. Injectable so tests can substitute a
/// deterministic stub and assert exact slug values.
pub type SuffixSource = Arc<dyn Fn(usize) -> String + Send + Sync>;

/// Attempts at inserting a generated slug before the collision surfaces
/// to the caller.
const GENERATED_SLUG_ATTEMPTS: usize = 3;

pub struct TagStorage {
    pool: SqlitePool,
    owner_types: RwLock<HashSet<String>>,
    suffix_source: SuffixSource,
}

impl TagStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_suffix_source(pool, Arc::new(next_suffix))
    }

    /// Create a storage whose slug suffixes come from `suffix_source`
    /// instead of the default random generator.
    pub fn with_suffix_source(pool: SqlitePool, suffix_source: SuffixSource) -> Self {
        Self {
            pool,
            owner_types: RwLock::new(HashSet::new()),
            suffix_source,
        }
    }

    /// Register a discriminator for an entity kind that supports tags.
    /// Idempotent.
    pub fn register_owner_type(&self, owner_type: &str) {
        self.owner_types
            .write()
            .expect("owner type registry poisoned")
            .insert(owner_type.to_string());
    }

    pub fn owner_type_registered(&self, owner_type: &str) -> bool {
        self.owner_types
            .read()
            .expect("owner type registry poisoned")
            .contains(owner_type)
    }

    /// Create a new tag.
    ///
    /// When no slug is supplied, the candidate is `"{name}-{suffix}"` with a
    /// fresh random suffix. The candidate is not checked against existing
    /// slugs before insert; the unique index on `slug` is the sole arbiter,
    /// and a violation is retried with a new suffix a bounded number of
    /// times. A caller-supplied slug is used verbatim and never retried.
    pub async fn create_tag(&self, input: TagCreateInput) -> TagResult<Tag> {
        if let Err(reason) = validate_tag_name(&input.name) {
            return Err(TagError::InvalidName(reason.to_string()));
        }
        if !self.owner_type_registered(&input.owner_type) {
            return Err(TagError::UnknownOwnerType(input.owner_type));
        }

        if let Some(slug) = input.slug.clone() {
            return self.insert_tag(&input, &slug).await;
        }

        let mut attempt = 0;
        loop {
            attempt += 1;
            let slug = format!("{}-{}", input.name, (self.suffix_source)(SLUG_SUFFIX_LEN));
            match self.insert_tag(&input, &slug).await {
                Err(TagError::SlugCollision { .. }) if attempt < GENERATED_SLUG_ATTEMPTS => {
                    warn!(
                        "Slug '{}' already taken (attempt {}/{})",
                        slug, attempt, GENERATED_SLUG_ATTEMPTS
                    );
                }
                other => return other,
            }
        }
    }

    /// Get a single tag by ID
    pub async fn get_tag(&self, tag_id: &str) -> TagResult<Tag> {
        debug!("Fetching tag: {}", tag_id);

        let row = sqlx::query("SELECT * FROM tags WHERE id = ?")
            .bind(tag_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => self.row_to_tag(&r),
            None => Err(TagError::NotFound),
        }
    }

    /// Get a tag by slug
    pub async fn get_tag_by_slug(&self, slug: &str) -> TagResult<Option<Tag>> {
        debug!("Fetching tag by slug: {}", slug);

        let row = sqlx::query("SELECT * FROM tags WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(self.row_to_tag(&r)?)),
            None => Ok(None),
        }
    }

    /// List all tags attached to one owning entity, ordered by name
    pub async fn list_tags_for_owner(
        &self,
        owner_type: &str,
        owner_id: &str,
    ) -> TagResult<Vec<Tag>> {
        debug!("Fetching tags for owner: {}/{}", owner_type, owner_id);

        let rows = sqlx::query(
            "SELECT * FROM tags WHERE owner_type = ? AND owner_id = ? ORDER BY name",
        )
        .bind(owner_type)
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(|row| self.row_to_tag(row)).collect()
    }

    /// Hand back the polymorphic owner reference of a tag.
    ///
    /// The store does not fetch the owning entity; callers look it up
    /// through their own collaborator for that discriminator (see
    /// [`crate::owners::OwnerDirectory`]).
    pub fn resolve_owner(&self, tag: &Tag) -> TagResult<OwnerRef> {
        if !self.owner_type_registered(&tag.owner_type) {
            return Err(TagError::UnknownOwnerType(tag.owner_type.clone()));
        }
        Ok(OwnerRef::new(tag.owner_type.clone(), tag.owner_id.clone()))
    }

    /// Delete a tag permanently
    pub async fn delete_tag(&self, tag_id: &str) -> TagResult<()> {
        debug!("Deleting tag: {}", tag_id);

        let result = sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(tag_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TagError::NotFound);
        }

        Ok(())
    }

    /// Delete every tag attached to one owning entity. Invoked by the
    /// owning entity's own deletion path. Returns the number of tags
    /// removed; deleting for an owner with no tags is a no-op.
    pub async fn delete_tags_for_owner(
        &self,
        owner_type: &str,
        owner_id: &str,
    ) -> TagResult<u64> {
        debug!("Deleting tags for owner: {}/{}", owner_type, owner_id);

        let result = sqlx::query("DELETE FROM tags WHERE owner_type = ? AND owner_id = ?")
            .bind(owner_type)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn insert_tag(&self, input: &TagCreateInput, slug: &str) -> TagResult<Tag> {
        let tag_id = format!("tag-{}", nanoid::nanoid!());
        let now = Utc::now();

        debug!(
            "Creating tag: {} (name: {}, slug: {})",
            tag_id, input.name, slug
        );

        let result = sqlx::query(
            r#"
            INSERT INTO tags (id, name, slug, owner_type, owner_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&tag_id)
        .bind(&input.name)
        .bind(slug)
        .bind(&input.owner_type)
        .bind(&input.owner_id)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => self.get_tag(&tag_id).await,
            Err(sqlx::Error::Database(db_err)) => {
                // SQLite UNIQUE constraint violation
                if let Some(code) = db_err.code() {
                    if (code == "2067" || code == "1555") && db_err.message().contains("slug") {
                        return Err(TagError::SlugCollision {
                            slug: slug.to_string(),
                        });
                    }
                }
                Err(TagError::Storage(StorageError::Sqlx(sqlx::Error::Database(
                    db_err,
                ))))
            }
            Err(e) => Err(TagError::Storage(StorageError::Sqlx(e))),
        }
    }

    /// Convert a database row to a Tag
    fn row_to_tag(&self, row: &sqlx::sqlite::SqliteRow) -> TagResult<Tag> {
        Ok(Tag {
            id: row.try_get("id").map_err(TagError::from)?,
            name: row.try_get("name").map_err(TagError::from)?,
            slug: row.try_get("slug").map_err(TagError::from)?,
            owner_type: row.try_get("owner_type").map_err(TagError::from)?,
            owner_id: row.try_get("owner_id").map_err(TagError::from)?,
            created_at: row.try_get("created_at").map_err(TagError::from)?,
        })
    }
}
