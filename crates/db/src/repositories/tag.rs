//! Tag repository.

use std::sync::Arc;

use crate::entities::{Tag, tag};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;
use work_projects_common::{AppError, AppResult, slugify};

/// Tag repository for database operations.
#[derive(Clone)]
pub struct TagRepository {
    db: Arc<DatabaseConnection>,
}

impl TagRepository {
    /// Create a new tag repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a tag by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<tag::Model>> {
        Tag::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a tag by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<tag::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tag: {id}")))
    }

    /// Find a tag by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<tag::Model>> {
        Tag::find()
            .filter(tag::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// All tags by ID.
    pub async fn find_all(&self) -> AppResult<Vec<tag::Model>> {
        Tag::find()
            .order_by_asc(tag::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get the tag whose slug matches `name`, creating it if missing.
    pub async fn get_or_create(&self, name: &str) -> AppResult<tag::Model> {
        let name = name.trim();
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(AppError::Validation(format!(
                "Tag name '{name}' does not produce a slug"
            )));
        }

        if let Some(existing) = self.find_by_slug(&slug).await? {
            return Ok(existing);
        }

        debug!(name = %name, slug = %slug, "Creating tag");
        self.create(tag::ActiveModel {
            name: Set(name.to_string()),
            slug: Set(slug),
            ..Default::default()
        })
        .await
    }

    /// Create a new tag.
    pub async fn create(&self, model: tag::ActiveModel) -> AppResult<tag::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a tag.
    pub async fn update(&self, model: tag::ActiveModel) -> AppResult<tag::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a tag. Its junction rows are removed by the foreign keys.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        Tag::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_tag(id: i32, name: &str) -> tag::Model {
        tag::Model {
            id,
            name: name.to_string(),
            slug: slugify(name),
        }
    }

    #[tokio::test]
    async fn test_get_or_create_existing() {
        let existing = create_test_tag(4, "Watercolor");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[existing.clone()]])
                .into_connection(),
        );

        let repo = TagRepository::new(db);
        let result = repo.get_or_create("  Watercolor ").await.unwrap();

        assert_eq!(result, existing);
    }

    #[tokio::test]
    async fn test_get_or_create_new() {
        let created = create_test_tag(9, "Hand Lettering");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<tag::Model>::new()])
                .append_query_results([[created.clone()]])
                .into_connection(),
        );

        let repo = TagRepository::new(db);
        let result = repo.get_or_create("Hand Lettering").await.unwrap();

        assert_eq!(result.slug, "hand-lettering");
        assert_eq!(result.id, 9);
    }

    #[tokio::test]
    async fn test_get_or_create_rejects_empty_slug() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let repo = TagRepository::new(db);
        let result = repo.get_or_create("!!!").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
