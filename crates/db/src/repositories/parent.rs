//! Polymorphic parent resolution.

use std::sync::Arc;

use crate::entities::{
    Asset, Gallery, Parent, ParentKind, ParentRef, ProjectSample, asset, gallery,
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use tracing::{debug, warn};
use work_projects_common::{AppError, AppResult};

/// Resolves stored `(kind, id)` pairs to their owning records.
#[derive(Clone)]
pub struct ParentRepository {
    db: Arc<DatabaseConnection>,
}

impl ParentRepository {
    /// Create a new parent repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Resolve a parent reference.
    ///
    /// Returns `Ok(None)` when the referenced record no longer exists.
    pub async fn resolve(&self, parent: ParentRef) -> AppResult<Option<Parent>> {
        debug!(kind = %parent.kind, id = parent.id, "Resolving parent reference");

        let resolved = match parent.kind {
            ParentKind::ProjectSample => ProjectSample::find_by_id(parent.id)
                .one(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?
                .map(Parent::ProjectSample),
            ParentKind::Gallery => Gallery::find_by_id(parent.id)
                .one(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?
                .map(Parent::Gallery),
        };

        if resolved.is_none() {
            warn!(kind = %parent.kind, id = parent.id, "Dangling parent reference");
        }

        Ok(resolved)
    }

    /// Resolve an optional reference; an unset reference resolves to `None`
    /// without touching the database.
    pub async fn resolve_opt(&self, parent: Option<ParentRef>) -> AppResult<Option<Parent>> {
        match parent {
            Some(parent) => self.resolve(parent).await,
            None => Ok(None),
        }
    }
}

/// Delete the assets and galleries attached to a parent record.
///
/// Galleries attached to a project sample take their own assets with them.
/// Returns the number of deleted rows.
pub(crate) async fn delete_attached<C: ConnectionTrait>(
    conn: &C,
    parent: ParentRef,
) -> Result<u64, DbErr> {
    let mut removed = 0;

    if parent.kind == ParentKind::ProjectSample {
        let gallery_ids: Vec<i32> = Gallery::find()
            .filter(gallery::Column::ParentType.eq(parent.kind))
            .filter(gallery::Column::ParentId.eq(parent.id))
            .all(conn)
            .await?
            .into_iter()
            .map(|g| g.id)
            .collect();

        if !gallery_ids.is_empty() {
            removed += Asset::delete_many()
                .filter(asset::Column::ParentType.eq(ParentKind::Gallery))
                .filter(asset::Column::ParentId.is_in(gallery_ids.clone()))
                .exec(conn)
                .await?
                .rows_affected;

            removed += Gallery::delete_many()
                .filter(gallery::Column::Id.is_in(gallery_ids))
                .exec(conn)
                .await?
                .rows_affected;
        }
    }

    removed += Asset::delete_many()
        .filter(asset::Column::ParentType.eq(parent.kind))
        .filter(asset::Column::ParentId.eq(parent.id))
        .exec(conn)
        .await?
        .rows_affected;

    Ok(removed)
}
