//! Project repository.

use std::sync::Arc;

use super::parent::delete_attached;
use crate::entities::{ParentKind, ParentRef, Project, ProjectSample, project, project_sample};
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Select, TransactionTrait,
};
use tracing::info;
use work_projects_common::{AppError, AppResult};

/// Project repository for database operations.
#[derive(Clone)]
pub struct ProjectRepository {
    db: Arc<DatabaseConnection>,
}

fn in_slot_order(query: Select<Project>) -> Select<Project> {
    query
        .order_by_with_nulls(project::Column::Slot, Order::Asc, NullOrdering::Last)
        .order_by_asc(project::Column::Id)
}

/// Every sample of a project.
fn samples_of(project_id: i32) -> Select<ProjectSample> {
    ProjectSample::find().filter(project_sample::Column::ProjectId.eq(project_id))
}

/// Samples that count as valid: enabled ones.
fn enabled_samples_of(project_id: i32) -> Select<ProjectSample> {
    samples_of(project_id).filter(project_sample::Column::Enabled.eq(true))
}

impl ProjectRepository {
    /// Create a new project repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a project by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<project::Model>> {
        Project::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a project by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<project::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project: {id}")))
    }

    /// Find a project by slug.
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<project::Model>> {
        Project::find()
            .filter(project::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// All projects, enabled or not, in slot order.
    pub async fn find_all(&self) -> AppResult<Vec<project::Model>> {
        in_slot_order(Project::find())
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Enabled projects in slot order.
    pub async fn find_enabled(&self) -> AppResult<Vec<project::Model>> {
        in_slot_order(Project::find().filter(project::Column::Enabled.eq(true)))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Projects of one type in slot order.
    pub async fn find_by_type(&self, type_id: i32) -> AppResult<Vec<project::Model>> {
        in_slot_order(Project::find().filter(project::Column::TypeId.eq(type_id)))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count all samples of a project.
    pub async fn count_samples(&self, project_id: i32) -> AppResult<u64> {
        samples_of(project_id)
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count the enabled samples of a project.
    pub async fn count_enabled_samples(&self, project_id: i32) -> AppResult<u64> {
        enabled_samples_of(project_id)
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new project.
    pub async fn create(&self, model: project::ActiveModel) -> AppResult<project::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a project.
    pub async fn update(&self, model: project::ActiveModel) -> AppResult<project::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a project, its samples, and everything attached to them.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let samples = samples_of(id)
            .all(&txn)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let mut removed = 0;
        for sample in &samples {
            removed += delete_attached(&txn, ParentRef::new(ParentKind::ProjectSample, sample.id))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }

        // samples go with the project via the foreign key
        Project::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        info!(
            project_id = id,
            samples = samples.len(),
            attached = removed,
            "Deleted project"
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait};

    fn create_test_project(id: i32, name: &str, slot: Option<i16>) -> project::Model {
        project::Model {
            id,
            name: name.to_string(),
            client_id: 1,
            slug: name.to_lowercase(),
            description: String::new(),
            teaser: String::new(),
            site_url: String::new(),
            demo_url: String::new(),
            display_date: "Spring 2014".to_string(),
            slot,
            enabled: true,
            type_id: 1,
        }
    }

    #[test]
    fn test_slot_order_puts_unordered_last() {
        let sql = in_slot_order(Project::find())
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"ORDER BY "project"."slot" ASC NULLS LAST, "project"."id" ASC"#));
    }

    #[tokio::test]
    async fn test_find_by_slug() {
        let project = create_test_project(1, "Bakery", Some(1));

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[project.clone()]])
                .into_connection(),
        );

        let repo = ProjectRepository::new(db);
        let result = repo.find_by_slug("bakery").await.unwrap();

        assert_eq!(result, Some(project));
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<project::Model>::new()])
                .into_connection(),
        );

        let repo = ProjectRepository::new(db);
        let result = repo.get_by_id(99).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_count_samples() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([
                    [maplit::btreemap! { "num_items" => sea_orm::Value::BigInt(Some(3)) }],
                    [maplit::btreemap! { "num_items" => sea_orm::Value::BigInt(Some(2)) }],
                ])
                .into_connection(),
        );

        let repo = ProjectRepository::new(db);
        assert_eq!(repo.count_samples(1).await.unwrap(), 3);
        assert_eq!(repo.count_enabled_samples(1).await.unwrap(), 2);
    }

    #[test]
    fn test_sample_count_queries() {
        let all = samples_of(5).build(DatabaseBackend::Postgres).to_string();
        assert!(all.contains(r#"WHERE "project_sample"."project_id" = 5"#));
        assert!(!all.contains(r#""project_sample"."enabled" ="#));

        let enabled = enabled_samples_of(5)
            .build(DatabaseBackend::Postgres)
            .to_string();
        assert!(enabled.contains(r#""project_sample"."project_id" = 5"#));
        assert!(enabled.contains(r#""project_sample"."enabled" = TRUE"#));
    }

    #[tokio::test]
    async fn test_delete_without_samples() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<project_sample::Model>::new()])
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );

        let repo = ProjectRepository::new(db);
        assert!(repo.delete(1).await.is_ok());
    }
}
