//! Asset repository.

use std::sync::Arc;

use crate::entities::{Asset, AssetTag, ParentRef, Tag, asset, asset_tag, tag};
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use work_projects_common::{AppError, AppResult};

/// Asset repository for database operations.
#[derive(Clone)]
pub struct AssetRepository {
    db: Arc<DatabaseConnection>,
}

/// Assets attached to `parent`.
fn attached_to(parent: ParentRef) -> Select<Asset> {
    Asset::find()
        .filter(asset::Column::ParentType.eq(parent.kind))
        .filter(asset::Column::ParentId.eq(parent.id))
}

/// Slot order with unordered (`NULL`) rows last, ID as tiebreak.
fn in_slot_order(query: Select<Asset>) -> Select<Asset> {
    query
        .order_by_with_nulls(asset::Column::Slot, Order::Asc, NullOrdering::Last)
        .order_by_asc(asset::Column::Id)
}

/// The portfolio view: enabled assets only, in slot order.
fn portfolio(query: Select<Asset>) -> Select<Asset> {
    in_slot_order(query.filter(asset::Column::Enabled.eq(true)))
}

impl AssetRepository {
    /// Create a new asset repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an asset by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<asset::Model>> {
        Asset::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get an asset by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<asset::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset: {id}")))
    }

    /// All assets, enabled or not, in slot order.
    pub async fn find_all(&self) -> AppResult<Vec<asset::Model>> {
        in_slot_order(Asset::find())
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// All assets attached to a parent, enabled or not, in slot order.
    pub async fn find_by_parent(&self, parent: ParentRef) -> AppResult<Vec<asset::Model>> {
        in_slot_order(attached_to(parent))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count assets attached to a parent, including disabled ones.
    pub async fn count_by_parent(&self, parent: ParentRef) -> AppResult<u64> {
        attached_to(parent)
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Enabled assets for the public portfolio, in slot order.
    pub async fn find_portfolio(&self) -> AppResult<Vec<asset::Model>> {
        portfolio(Asset::find())
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Enabled assets of one parent for the public portfolio, in slot order.
    pub async fn find_portfolio_by_parent(
        &self,
        parent: ParentRef,
    ) -> AppResult<Vec<asset::Model>> {
        portfolio(attached_to(parent))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Tags of an asset in the order they were attached.
    pub async fn find_tags(&self, asset_id: i32) -> AppResult<Vec<tag::Model>> {
        Tag::find()
            .join(JoinType::InnerJoin, tag::Relation::AssetTags.def())
            .filter(asset_tag::Column::AssetId.eq(asset_id))
            .order_by_asc(asset_tag::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Attach a tag to an asset. Attaching an already attached tag is a no-op.
    pub async fn add_tag(&self, asset_id: i32, tag_id: i32) -> AppResult<()> {
        let existing = AssetTag::find()
            .filter(asset_tag::Column::AssetId.eq(asset_id))
            .filter(asset_tag::Column::TagId.eq(tag_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        if existing > 0 {
            return Ok(());
        }

        asset_tag::ActiveModel {
            asset_id: Set(asset_id),
            tag_id: Set(tag_id),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }

    /// Detach a tag from an asset.
    pub async fn remove_tag(&self, asset_id: i32, tag_id: i32) -> AppResult<()> {
        AssetTag::delete_many()
            .filter(asset_tag::Column::AssetId.eq(asset_id))
            .filter(asset_tag::Column::TagId.eq(tag_id))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Create a new asset.
    pub async fn create(&self, model: asset::ActiveModel) -> AppResult<asset::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update an asset.
    pub async fn update(&self, model: asset::ActiveModel) -> AppResult<asset::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete an asset.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        Asset::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
