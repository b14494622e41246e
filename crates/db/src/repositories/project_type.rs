//! Project type repository.

use std::sync::Arc;

use super::parent::delete_attached;
use crate::entities::{
    ParentKind, ParentRef, Project, ProjectSample, ProjectType, project, project_sample,
    project_type,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use tracing::info;
use work_projects_common::{AppError, AppResult};

/// Project type repository for database operations.
#[derive(Clone)]
pub struct ProjectTypeRepository {
    db: Arc<DatabaseConnection>,
}

impl ProjectTypeRepository {
    /// Create a new project type repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a project type by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<project_type::Model>> {
        ProjectType::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a project type by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<project_type::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project type: {id}")))
    }

    /// Find a project type by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<project_type::Model>> {
        ProjectType::find()
            .filter(project_type::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// All project types by ID.
    pub async fn find_all(&self) -> AppResult<Vec<project_type::Model>> {
        ProjectType::find()
            .order_by_asc(project_type::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Enabled project types by ID.
    pub async fn find_enabled(&self) -> AppResult<Vec<project_type::Model>> {
        ProjectType::find()
            .filter(project_type::Column::Enabled.eq(true))
            .order_by_asc(project_type::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// The default project type. If several are flagged the lowest ID wins.
    pub async fn find_default(&self) -> AppResult<Option<project_type::Model>> {
        ProjectType::find()
            .filter(project_type::Column::IsDefault.eq(true))
            .order_by_asc(project_type::Column::Id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count the projects of a type.
    pub async fn count_projects(&self, type_id: i32) -> AppResult<u64> {
        Project::find()
            .filter(project::Column::TypeId.eq(type_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new project type.
    pub async fn create(
        &self,
        model: project_type::ActiveModel,
    ) -> AppResult<project_type::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a project type.
    pub async fn update(
        &self,
        model: project_type::ActiveModel,
    ) -> AppResult<project_type::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a project type with its projects, their samples, and everything
    /// attached to those samples.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let project_ids: Vec<i32> = Project::find()
            .filter(project::Column::TypeId.eq(id))
            .all(&txn)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
            .into_iter()
            .map(|p| p.id)
            .collect();

        let mut removed = 0;
        if !project_ids.is_empty() {
            let samples = ProjectSample::find()
                .filter(project_sample::Column::ProjectId.is_in(project_ids.clone()))
                .all(&txn)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;

            for sample in &samples {
                removed +=
                    delete_attached(&txn, ParentRef::new(ParentKind::ProjectSample, sample.id))
                        .await
                        .map_err(|e| AppError::Database(e.to_string()))?;
            }
        }

        // projects and samples go with the type via the foreign keys
        ProjectType::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        info!(
            type_id = id,
            projects = project_ids.len(),
            attached = removed,
            "Deleted project type"
        );
        Ok(())
    }
}
