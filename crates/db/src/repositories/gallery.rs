//! Gallery repository.

use std::sync::Arc;

use super::autocomplete_condition;
use super::parent::delete_attached;
use crate::entities::{
    Asset, Gallery, GalleryTag, ParentKind, ParentRef, Tag, asset, gallery, gallery_tag, tag,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set, TransactionTrait,
};
use tracing::info;
use work_projects_common::{AppError, AppResult};

/// Gallery repository for database operations.
#[derive(Clone)]
pub struct GalleryRepository {
    db: Arc<DatabaseConnection>,
}

fn attached_to(parent: ParentRef) -> Select<Gallery> {
    Gallery::find()
        .filter(gallery::Column::ParentType.eq(parent.kind))
        .filter(gallery::Column::ParentId.eq(parent.id))
}

/// Every asset in a gallery, disabled ones included.
fn assets_in(gallery_id: i32) -> Select<Asset> {
    Asset::find()
        .filter(asset::Column::ParentType.eq(ParentKind::Gallery))
        .filter(asset::Column::ParentId.eq(gallery_id))
}

impl GalleryRepository {
    /// Create a new gallery repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a gallery by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<gallery::Model>> {
        Gallery::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a gallery by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<gallery::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Gallery: {id}")))
    }

    /// All galleries by ID.
    pub async fn find_all(&self) -> AppResult<Vec<gallery::Model>> {
        Gallery::find()
            .order_by_asc(gallery::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Galleries attached to a parent.
    pub async fn find_by_parent(&self, parent: ParentRef) -> AppResult<Vec<gallery::Model>> {
        attached_to(parent)
            .order_by_asc(gallery::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count galleries attached to a parent.
    pub async fn count_by_parent(&self, parent: ParentRef) -> AppResult<u64> {
        attached_to(parent)
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count the assets in a gallery, including disabled ones.
    pub async fn count_assets(&self, gallery_id: i32) -> AppResult<u64> {
        assets_in(gallery_id)
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Tags of a gallery in the order they were attached.
    pub async fn find_tags(&self, gallery_id: i32) -> AppResult<Vec<tag::Model>> {
        Tag::find()
            .join(JoinType::InnerJoin, tag::Relation::GalleryTags.def())
            .filter(gallery_tag::Column::GalleryId.eq(gallery_id))
            .order_by_asc(gallery_tag::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Attach a tag to a gallery. Attaching an already attached tag is a no-op.
    pub async fn add_tag(&self, gallery_id: i32, tag_id: i32) -> AppResult<()> {
        let existing = GalleryTag::find()
            .filter(gallery_tag::Column::GalleryId.eq(gallery_id))
            .filter(gallery_tag::Column::TagId.eq(tag_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if existing > 0 {
            return Ok(());
        }

        gallery_tag::ActiveModel {
            gallery_id: Set(gallery_id),
            tag_id: Set(tag_id),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    /// Detach a tag from a gallery.
    pub async fn remove_tag(&self, gallery_id: i32, tag_id: i32) -> AppResult<()> {
        GalleryTag::delete_many()
            .filter(gallery_tag::Column::GalleryId.eq(gallery_id))
            .filter(gallery_tag::Column::TagId.eq(tag_id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Autocomplete lookup: exact ID or case-insensitive name substring.
    pub async fn autocomplete(&self, term: &str, limit: u64) -> AppResult<Vec<gallery::Model>> {
        Gallery::find()
            .filter(autocomplete_condition(
                gallery::Column::Id,
                gallery::Column::Name,
                term,
            ))
            .order_by_asc(gallery::Column::Name)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new gallery.
    pub async fn create(&self, model: gallery::ActiveModel) -> AppResult<gallery::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a gallery.
    pub async fn update(&self, model: gallery::ActiveModel) -> AppResult<gallery::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a gallery together with the assets attached to it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let removed = delete_attached(&txn, ParentRef::new(ParentKind::Gallery, id))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Gallery::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        info!(gallery_id = id, attached = removed, "Deleted gallery");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait};

    fn create_test_gallery(id: i32, name: &str) -> gallery::Model {
        gallery::Model {
            id,
            parent_type: Some(ParentKind::ProjectSample),
            parent_id: Some(1),
            name: name.to_string(),
            slug: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_attached_to_filters_on_both_columns() {
        let sql = attached_to(ParentRef::new(ParentKind::ProjectSample, 7))
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""gallery"."parent_type" = 'project_sample'"#));
        assert!(sql.contains(r#""gallery"."parent_id" = 7"#));
    }

    #[tokio::test]
    async fn test_find_by_parent() {
        let g1 = create_test_gallery(1, "Sketches");
        let g2 = create_test_gallery(2, "Finals");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[g1, g2]])
                .into_connection(),
        );

        let repo = GalleryRepository::new(db);
        let result = repo
            .find_by_parent(ParentRef::new(ParentKind::ProjectSample, 1))
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[1].name, "Finals");
    }

    #[test]
    fn test_asset_count_query_includes_disabled() {
        let sql = assets_in(3).build(DatabaseBackend::Postgres).to_string();

        assert!(sql.contains(r#""asset"."parent_type" = 'gallery'"#));
        assert!(sql.contains(r#""asset"."parent_id" = 3"#));
        assert!(!sql.contains(r#""asset"."enabled" ="#));
    }

    #[tokio::test]
    async fn test_count_assets() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[maplit::btreemap! {
                    "num_items" => sea_orm::Value::BigInt(Some(4))
                }]])
                .into_connection(),
        );

        let repo = GalleryRepository::new(db);
        assert_eq!(repo.count_assets(1).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_find_tags() {
        let tags = vec![
            tag::Model {
                id: 5,
                name: "Watercolor".to_string(),
                slug: "watercolor".to_string(),
            },
            tag::Model {
                id: 2,
                name: "Ink".to_string(),
                slug: "ink".to_string(),
            },
        ];

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([tags])
                .into_connection(),
        );

        let repo = GalleryRepository::new(db);
        let result = repo.find_tags(1).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Watercolor");
    }

    #[tokio::test]
    async fn test_add_tag_already_attached_is_noop() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[maplit::btreemap! {
                    "num_items" => sea_orm::Value::BigInt(Some(1))
                }]])
                .into_connection(),
        );

        let repo = GalleryRepository::new(db);
        assert!(repo.add_tag(1, 2).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_removes_assets() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([
                    // gallery assets
                    MockExecResult {
                        last_insert_id: 0,
                        rows_affected: 4,
                    },
                    // the gallery
                    MockExecResult {
                        last_insert_id: 0,
                        rows_affected: 1,
                    },
                ])
                .into_connection(),
        );

        let repo = GalleryRepository::new(db);
        assert!(repo.delete(1).await.is_ok());
    }
}
