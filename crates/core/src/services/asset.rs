//! Asset service.

use super::parent_kind_label;
use crate::admin::forms::AssetInput;
use crate::display;
use tracing::info;
use work_projects_common::{AppError, AppResult};
use work_projects_db::entities::{ParentRef, asset, tag};
use work_projects_db::repositories::{AssetRepository, ParentRepository, TagRepository};

/// Service for assets and their derived display values.
#[derive(Clone)]
pub struct AssetService {
    asset_repo: AssetRepository,
    parent_repo: ParentRepository,
    tag_repo: TagRepository,
}

impl AssetService {
    /// Create a new asset service.
    #[must_use]
    pub const fn new(
        asset_repo: AssetRepository,
        parent_repo: ParentRepository,
        tag_repo: TagRepository,
    ) -> Self {
        Self {
            asset_repo,
            parent_repo,
            tag_repo,
        }
    }

    /// Get an asset by ID.
    pub async fn get(&self, id: i32) -> AppResult<asset::Model> {
        self.asset_repo.get_by_id(id).await
    }

    /// Name of the owning record, or `""` when unset or missing.
    ///
    /// An asset without a parent reference never touches the database.
    pub async fn parent_name(&self, asset: &asset::Model) -> AppResult<String> {
        let parent = self.parent_repo.resolve_opt(asset.parent_ref()).await?;
        Ok(parent.map(|p| p.name().to_string()).unwrap_or_default())
    }

    /// Label of the stored parent kind, or `""` when unset.
    #[must_use]
    pub fn parent_type(&self, asset: &asset::Model) -> String {
        parent_kind_label(asset.parent_type)
    }

    /// Tag names joined with `", "` in attachment order.
    pub async fn tag_names(&self, asset_id: i32) -> AppResult<String> {
        let tags = self.asset_repo.find_tags(asset_id).await?;
        Ok(display::join_tag_names(tags.iter().map(|t| &t.name)))
    }

    /// Enabled assets in slot order, optionally limited to one parent.
    pub async fn list_portfolio(&self, parent: Option<ParentRef>) -> AppResult<Vec<asset::Model>> {
        match parent {
            Some(parent) => self.asset_repo.find_portfolio_by_parent(parent).await,
            None => self.asset_repo.find_portfolio().await,
        }
    }

    /// All assets for the admin list, in slot order.
    pub async fn list_all(&self) -> AppResult<Vec<asset::Model>> {
        self.asset_repo.find_all().await
    }

    /// Create an asset from admin input.
    pub async fn create(&self, input: AssetInput) -> AppResult<asset::Model> {
        let parent = input.parent;
        let model = input.into_active_model()?;

        if let Some(parent) = parent {
            if self.parent_repo.resolve(parent).await?.is_none() {
                return Err(AppError::NotFound(format!("{}: {}", parent.kind, parent.id)));
            }
        }

        let asset = self.asset_repo.create(model).await?;
        info!(asset_id = asset.id, image = %asset.image, "Created asset");
        Ok(asset)
    }

    /// Tag an asset by tag name, creating the tag if needed.
    pub async fn add_tag(&self, asset_id: i32, tag_name: &str) -> AppResult<tag::Model> {
        let tag = self.tag_repo.get_or_create(tag_name).await?;
        self.asset_repo.add_tag(asset_id, tag.id).await?;
        Ok(tag)
    }

    /// Remove a tag from an asset.
    pub async fn remove_tag(&self, asset_id: i32, tag_id: i32) -> AppResult<()> {
        self.asset_repo.remove_tag(asset_id, tag_id).await
    }

    /// Delete an asset.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.asset_repo.delete(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use std::sync::Arc;
    use work_projects_db::entities::{ParentKind, gallery};

    fn new_asset() -> asset::Model {
        asset::Model {
            id: 1,
            parent_type: None,
            parent_id: None,
            name: "Hero Shot".to_string(),
            slug: "hero-shot".to_string(),
            image: "projects/hero-shot.png".to_string(),
            teaser: String::new(),
            caption: String::new(),
            slot: None,
            enabled: true,
        }
    }

    fn service(db: DatabaseConnection) -> AssetService {
        let db = Arc::new(db);
        AssetService::new(
            AssetRepository::new(db.clone()),
            ParentRepository::new(db.clone()),
            TagRepository::new(db),
        )
    }

    #[tokio::test]
    async fn test_fresh_asset_has_empty_parent_name() {
        // no query results scripted: any database access would fail
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let service = service(db);
        let asset = new_asset();

        assert_eq!(service.parent_name(&asset).await.unwrap(), "");
        assert_eq!(service.parent_type(&asset), "");
    }

    #[tokio::test]
    async fn test_parent_name_from_gallery() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[gallery::Model {
                id: 2,
                parent_type: Some(ParentKind::ProjectSample),
                parent_id: Some(1),
                name: "Sketches".to_string(),
                slug: "sketches".to_string(),
                description: String::new(),
            }]])
            .into_connection();

        let service = service(db);
        let asset = asset::Model {
            parent_type: Some(ParentKind::Gallery),
            parent_id: Some(2),
            ..new_asset()
        };

        assert_eq!(service.parent_name(&asset).await.unwrap(), "Sketches");
        assert_eq!(service.parent_type(&asset), "gallery");
    }

    #[tokio::test]
    async fn test_tag_names_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<tag::Model>::new()])
            .into_connection();

        assert_eq!(service(db).tag_names(1).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_list_portfolio() {
        let first = asset::Model {
            slot: Some(1),
            ..new_asset()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[first.clone()]])
            .into_connection();

        let result = service(db).list_portfolio(None).await.unwrap();
        assert_eq!(result, vec![first]);
    }

    #[tokio::test]
    async fn test_create_with_missing_parent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<gallery::Model>::new()])
            .into_connection();

        let input = AssetInput {
            parent: Some(ParentRef::new(ParentKind::Gallery, 9)),
            name: "Hero Shot".to_string(),
            slug: String::new(),
            image: "projects/hero-shot.png".to_string(),
            teaser: String::new(),
            caption: String::new(),
            slot: None,
            enabled: true,
        };

        let result = service(db).create(input).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
