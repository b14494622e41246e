//! Project sample repository.

use std::sync::Arc;

use super::autocomplete_condition;
use super::parent::delete_attached;
use crate::entities::{ParentKind, ParentRef, ProjectSample, project_sample};
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, TransactionTrait,
};
use tracing::info;
use work_projects_common::{AppError, AppResult};

/// Project sample repository for database operations.
#[derive(Clone)]
pub struct ProjectSampleRepository {
    db: Arc<DatabaseConnection>,
}

fn in_slot_order(query: Select<ProjectSample>) -> Select<ProjectSample> {
    query
        .order_by_with_nulls(project_sample::Column::Slot, Order::Asc, NullOrdering::Last)
        .order_by_asc(project_sample::Column::Id)
}

/// The front-end view: enabled samples only, in slot order.
fn frontend(query: Select<ProjectSample>) -> Select<ProjectSample> {
    in_slot_order(query.filter(project_sample::Column::Enabled.eq(true)))
}

impl ProjectSampleRepository {
    /// Create a new project sample repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a sample by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<project_sample::Model>> {
        ProjectSample::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a sample by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i32) -> AppResult<project_sample::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project sample: {id}")))
    }

    /// All samples, enabled or not, in slot order.
    pub async fn find_all(&self) -> AppResult<Vec<project_sample::Model>> {
        in_slot_order(ProjectSample::find())
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// All samples of a project, enabled or not, in slot order.
    pub async fn find_by_project(&self, project_id: i32) -> AppResult<Vec<project_sample::Model>> {
        in_slot_order(
            ProjectSample::find().filter(project_sample::Column::ProjectId.eq(project_id)),
        )
        .all(self.db.as_ref())
        .await
        .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Enabled samples for the front end, in slot order.
    pub async fn find_frontend(&self) -> AppResult<Vec<project_sample::Model>> {
        frontend(ProjectSample::find())
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Enabled samples of one project for the front end, in slot order.
    pub async fn find_frontend_by_project(
        &self,
        project_id: i32,
    ) -> AppResult<Vec<project_sample::Model>> {
        frontend(ProjectSample::find().filter(project_sample::Column::ProjectId.eq(project_id)))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Autocomplete lookup: exact ID or case-insensitive name substring.
    pub async fn autocomplete(
        &self,
        term: &str,
        limit: u64,
    ) -> AppResult<Vec<project_sample::Model>> {
        ProjectSample::find()
            .filter(autocomplete_condition(
                project_sample::Column::Id,
                project_sample::Column::Name,
                term,
            ))
            .order_by_asc(project_sample::Column::Name)
            .limit(limit)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Count the samples of a project.
    pub async fn count_by_project(&self, project_id: i32) -> AppResult<u64> {
        ProjectSample::find()
            .filter(project_sample::Column::ProjectId.eq(project_id))
            .count(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new sample.
    pub async fn create(
        &self,
        model: project_sample::ActiveModel,
    ) -> AppResult<project_sample::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a sample.
    pub async fn update(
        &self,
        model: project_sample::ActiveModel,
    ) -> AppResult<project_sample::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a sample together with its attached galleries and assets.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let removed = delete_attached(&txn, ParentRef::new(ParentKind::ProjectSample, id))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        ProjectSample::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        info!(sample_id = id, attached = removed, "Deleted project sample");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait};

    fn create_test_sample(id: i32, name: &str, slot: Option<i32>) -> project_sample::Model {
        project_sample::Model {
            id,
            name: name.to_string(),
            description: String::new(),
            project_id: 1,
            slot,
            enabled: true,
        }
    }

    #[test]
    fn test_frontend_query_filters_and_orders() {
        let sql = frontend(ProjectSample::find())
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"WHERE "project_sample"."enabled" = TRUE"#));
        assert!(sql.contains(
            r#"ORDER BY "project_sample"."slot" ASC NULLS LAST, "project_sample"."id" ASC"#
        ));
    }

    #[tokio::test]
    async fn test_find_frontend_by_project() {
        let s1 = create_test_sample(1, "Homepage", Some(1));
        let s2 = create_test_sample(2, "Checkout", None);

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[s1, s2]])
                .into_connection(),
        );

        let repo = ProjectSampleRepository::new(db);
        let result = repo.find_frontend_by_project(1).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Homepage");
    }

    #[tokio::test]
    async fn test_autocomplete() {
        let sample = create_test_sample(3, "Homepage", Some(1));

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[sample]])
                .into_connection(),
        );

        let repo = ProjectSampleRepository::new(db);
        let result = repo.autocomplete("home", 10).await.unwrap();

        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_count_by_project() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[maplit::btreemap! {
                    "num_items" => sea_orm::Value::BigInt(Some(0))
                }]])
                .into_connection(),
        );

        let repo = ProjectSampleRepository::new(db);
        assert_eq!(repo.count_by_project(1).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_attached() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                // no galleries attached
                .append_query_results([Vec::<crate::entities::gallery::Model>::new()])
                .append_exec_results([
                    // sample assets
                    MockExecResult {
                        last_insert_id: 0,
                        rows_affected: 2,
                    },
                    // the sample
                    MockExecResult {
                        last_insert_id: 0,
                        rows_affected: 1,
                    },
                ])
                .into_connection(),
        );

        let repo = ProjectSampleRepository::new(db);
        assert!(repo.delete(1).await.is_ok());
    }
}
