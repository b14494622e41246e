//! Gallery service.

use super::{AutocompleteItem, parent_kind_label};
use crate::admin::forms::GalleryInput;
use crate::display;
use tracing::info;
use work_projects_common::{AppError, AppResult};
use work_projects_db::entities::{gallery, tag};
use work_projects_db::repositories::{
    AUTOCOMPLETE_LIMIT, GalleryRepository, ParentRepository, TagRepository,
};

/// Service for galleries and their derived display values.
#[derive(Clone)]
pub struct GalleryService {
    gallery_repo: GalleryRepository,
    parent_repo: ParentRepository,
    tag_repo: TagRepository,
}

impl GalleryService {
    /// Create a new gallery service.
    #[must_use]
    pub const fn new(
        gallery_repo: GalleryRepository,
        parent_repo: ParentRepository,
        tag_repo: TagRepository,
    ) -> Self {
        Self {
            gallery_repo,
            parent_repo,
            tag_repo,
        }
    }

    /// Get a gallery by ID.
    pub async fn get(&self, id: i32) -> AppResult<gallery::Model> {
        self.gallery_repo.get_by_id(id).await
    }

    /// Name of the owning record, or `""` when unset or missing.
    pub async fn parent_name(&self, gallery: &gallery::Model) -> AppResult<String> {
        let parent = self.parent_repo.resolve_opt(gallery.parent_ref()).await?;
        Ok(parent.map(|p| p.name().to_string()).unwrap_or_default())
    }

    /// Label of the stored parent kind, or `""` when unset.
    #[must_use]
    pub fn parent_type(&self, gallery: &gallery::Model) -> String {
        parent_kind_label(gallery.parent_type)
    }

    /// Number of assets in the gallery, enabled or not.
    pub async fn asset_count(&self, gallery_id: i32) -> AppResult<u64> {
        self.gallery_repo.count_assets(gallery_id).await
    }

    /// Tag names joined with `", "` in attachment order.
    pub async fn tag_names(&self, gallery_id: i32) -> AppResult<String> {
        let tags = self.gallery_repo.find_tags(gallery_id).await?;
        Ok(display::join_tag_names(tags.iter().map(|t| &t.name)))
    }

    /// Label shown for the gallery in related-object pickers.
    #[must_use]
    pub fn related_name(&self, gallery: &gallery::Model) -> String {
        gallery.name.clone()
    }

    /// All galleries for the admin list.
    pub async fn list_all(&self) -> AppResult<Vec<gallery::Model>> {
        self.gallery_repo.find_all().await
    }

    /// Autocomplete suggestions labelled with [`Self::related_name`].
    pub async fn autocomplete(&self, term: &str) -> AppResult<Vec<AutocompleteItem>> {
        let galleries = self.gallery_repo.autocomplete(term, AUTOCOMPLETE_LIMIT).await?;
        Ok(galleries
            .iter()
            .map(|g| AutocompleteItem {
                id: g.id,
                label: self.related_name(g),
            })
            .collect())
    }

    /// Create a gallery from admin input.
    pub async fn create(&self, input: GalleryInput) -> AppResult<gallery::Model> {
        let parent = input.parent;
        let model = input.into_active_model()?;

        if let Some(parent) = parent {
            if self.parent_repo.resolve(parent).await?.is_none() {
                return Err(AppError::NotFound(format!("{}: {}", parent.kind, parent.id)));
            }
        }

        let gallery = self.gallery_repo.create(model).await?;
        info!(gallery_id = gallery.id, "Created gallery");
        Ok(gallery)
    }

    /// Tag a gallery by tag name, creating the tag if needed.
    pub async fn add_tag(&self, gallery_id: i32, tag_name: &str) -> AppResult<tag::Model> {
        let tag = self.tag_repo.get_or_create(tag_name).await?;
        self.gallery_repo.add_tag(gallery_id, tag.id).await?;
        Ok(tag)
    }

    /// Remove a tag from a gallery.
    pub async fn remove_tag(&self, gallery_id: i32, tag_id: i32) -> AppResult<()> {
        self.gallery_repo.remove_tag(gallery_id, tag_id).await
    }

    /// Delete a gallery and its assets.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.gallery_repo.delete(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use std::sync::Arc;
    use work_projects_db::entities::{ParentKind, project_sample};

    fn create_test_gallery(parent_id: Option<i32>) -> gallery::Model {
        gallery::Model {
            id: 1,
            parent_type: parent_id.map(|_| ParentKind::ProjectSample),
            parent_id,
            name: "Sketches".to_string(),
            slug: "sketches".to_string(),
            description: String::new(),
        }
    }

    fn service(db: DatabaseConnection) -> GalleryService {
        let db = Arc::new(db);
        GalleryService::new(
            GalleryRepository::new(db.clone()),
            ParentRepository::new(db.clone()),
            TagRepository::new(db),
        )
    }

    #[tokio::test]
    async fn test_parent_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[project_sample::Model {
                id: 5,
                name: "Homepage".to_string(),
                description: String::new(),
                project_id: 1,
                slot: None,
                enabled: true,
            }]])
            .into_connection();

        let service = service(db);
        let gallery = create_test_gallery(Some(5));

        assert_eq!(service.parent_name(&gallery).await.unwrap(), "Homepage");
        assert_eq!(service.parent_type(&gallery), "project sample");
    }

    #[tokio::test]
    async fn test_parent_name_missing_parent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<project_sample::Model>::new()])
            .into_connection();

        let result = service(db)
            .parent_name(&create_test_gallery(Some(404)))
            .await
            .unwrap();

        assert_eq!(result, "");
    }

    #[tokio::test]
    async fn test_parent_unset() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let service = service(db);
        let gallery = create_test_gallery(None);

        assert_eq!(service.parent_name(&gallery).await.unwrap(), "");
        assert_eq!(service.parent_type(&gallery), "");
    }

    #[tokio::test]
    async fn test_asset_count() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[maplit::btreemap! {
                "num_items" => sea_orm::Value::BigInt(Some(4))
            }]])
            .into_connection();

        assert_eq!(service(db).asset_count(1).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_tag_names() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                tag::Model {
                    id: 2,
                    name: "Ink".to_string(),
                    slug: "ink".to_string(),
                },
                tag::Model {
                    id: 1,
                    name: "Watercolor".to_string(),
                    slug: "watercolor".to_string(),
                },
            ]])
            .into_connection();

        assert_eq!(service(db).tag_names(1).await.unwrap(), "Ink, Watercolor");
    }

    #[tokio::test]
    async fn test_autocomplete_uses_related_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[create_test_gallery(Some(1))]])
            .into_connection();

        let result = service(db).autocomplete("sket").await.unwrap();

        assert_eq!(
            result,
            vec![AutocompleteItem {
                id: 1,
                label: "Sketches".to_string(),
            }]
        );
    }
}
