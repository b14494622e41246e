//! Project service.

use crate::admin::forms::ProjectInput;
use crate::display;
use tracing::info;
use work_projects_common::{AppResult, PortfolioConfig};
use work_projects_db::entities::project;
use work_projects_db::repositories::{ClientRepository, ProjectRepository, ProjectTypeRepository};

/// Service for projects and their derived display values.
#[derive(Clone)]
pub struct ProjectService {
    project_repo: ProjectRepository,
    project_type_repo: ProjectTypeRepository,
    client_repo: ClientRepository,
    portfolio: PortfolioConfig,
}

impl ProjectService {
    /// Create a new project service.
    #[must_use]
    pub const fn new(
        project_repo: ProjectRepository,
        project_type_repo: ProjectTypeRepository,
        client_repo: ClientRepository,
        portfolio: PortfolioConfig,
    ) -> Self {
        Self {
            project_repo,
            project_type_repo,
            client_repo,
            portfolio,
        }
    }

    /// Get a project by ID.
    pub async fn get(&self, id: i32) -> AppResult<project::Model> {
        self.project_repo.get_by_id(id).await
    }

    /// Client name and project name, e.g. `"Northrose Bakery Site"`.
    pub async fn full_name(&self, project: &project::Model) -> AppResult<String> {
        let client = self.client_repo.get_by_id(project.client_id).await?;
        Ok(display::full_name(&client.name, &project.name))
    }

    /// Name of the client the project belongs to.
    pub async fn client_name(&self, project: &project::Model) -> AppResult<String> {
        Ok(self.client_repo.get_by_id(project.client_id).await?.name)
    }

    /// Name of the project's type.
    pub async fn type_name(&self, project: &project::Model) -> AppResult<String> {
        Ok(self.project_type_repo.get_by_id(project.type_id).await?.name)
    }

    /// Number of samples, enabled or not.
    pub async fn sample_count(&self, project_id: i32) -> AppResult<u64> {
        self.project_repo.count_samples(project_id).await
    }

    /// Number of enabled samples.
    pub async fn valid_sample_count(&self, project_id: i32) -> AppResult<u64> {
        self.project_repo.count_enabled_samples(project_id).await
    }

    /// Whether the project's type is one of the configured design types.
    pub async fn is_design_related(&self, project: &project::Model) -> AppResult<bool> {
        let type_name = self.type_name(project).await?;
        Ok(self.portfolio.is_design_type(&type_name))
    }

    /// Enabled projects for public listings, in slot order.
    pub async fn list_enabled(&self) -> AppResult<Vec<project::Model>> {
        self.project_repo.find_enabled().await
    }

    /// All projects for the admin list, in slot order.
    pub async fn list_all(&self) -> AppResult<Vec<project::Model>> {
        self.project_repo.find_all().await
    }

    /// Create a project from admin input.
    pub async fn create(&self, input: ProjectInput) -> AppResult<project::Model> {
        // both must exist before the insert
        self.client_repo.get_by_id(input.client_id).await?;
        self.project_type_repo.get_by_id(input.type_id).await?;

        let project = self.project_repo.create(input.into_active_model()?).await?;
        info!(project_id = project.id, slug = %project.slug, "Created project");
        Ok(project)
    }

    /// Delete a project and everything under it.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.project_repo.delete(id).await
    }
}
