//! Project sample service.

use std::collections::HashMap;

use super::AutocompleteItem;
use crate::admin::forms::ProjectSampleInput;
use crate::display;
use tracing::info;
use work_projects_common::AppResult;
use work_projects_db::entities::{ParentKind, ParentRef, project_sample};
use work_projects_db::repositories::{
    AUTOCOMPLETE_LIMIT, AssetRepository, ClientRepository, GalleryRepository, ProjectRepository,
    ProjectSampleRepository, ProjectTypeRepository,
};

/// Service for project samples and their derived display values.
#[derive(Clone)]
pub struct ProjectSampleService {
    sample_repo: ProjectSampleRepository,
    project_repo: ProjectRepository,
    project_type_repo: ProjectTypeRepository,
    client_repo: ClientRepository,
    gallery_repo: GalleryRepository,
    asset_repo: AssetRepository,
}

const fn as_parent(sample_id: i32) -> ParentRef {
    ParentRef::new(ParentKind::ProjectSample, sample_id)
}

impl ProjectSampleService {
    /// Create a new project sample service.
    #[must_use]
    pub const fn new(
        sample_repo: ProjectSampleRepository,
        project_repo: ProjectRepository,
        project_type_repo: ProjectTypeRepository,
        client_repo: ClientRepository,
        gallery_repo: GalleryRepository,
        asset_repo: AssetRepository,
    ) -> Self {
        Self {
            sample_repo,
            project_repo,
            project_type_repo,
            client_repo,
            gallery_repo,
            asset_repo,
        }
    }

    /// Get a sample by ID.
    pub async fn get(&self, id: i32) -> AppResult<project_sample::Model> {
        self.sample_repo.get_by_id(id).await
    }

    /// Full name of the sample's project.
    pub async fn project_full_name(&self, sample: &project_sample::Model) -> AppResult<String> {
        let project = self.project_repo.get_by_id(sample.project_id).await?;
        let client = self.client_repo.get_by_id(project.client_id).await?;
        Ok(display::full_name(&client.name, &project.name))
    }

    /// `"{type} > {project} > {sample}"`.
    pub async fn project_full_path(&self, sample: &project_sample::Model) -> AppResult<String> {
        let project = self.project_repo.get_by_id(sample.project_id).await?;
        let project_type = self.project_type_repo.get_by_id(project.type_id).await?;
        Ok(display::full_path(
            &project_type.name,
            &project.name,
            &sample.name,
        ))
    }

    /// `"{project} > {sample}"`, shown in related-object pickers.
    pub async fn related_label(&self, sample: &project_sample::Model) -> AppResult<String> {
        let project = self.project_repo.get_by_id(sample.project_id).await?;
        Ok(display::related_label(&project.name, &sample.name))
    }

    /// Number of galleries attached to the sample.
    pub async fn gallery_count(&self, sample_id: i32) -> AppResult<u64> {
        self.gallery_repo.count_by_parent(as_parent(sample_id)).await
    }

    /// Number of assets attached directly to the sample, enabled or not.
    pub async fn asset_count(&self, sample_id: i32) -> AppResult<u64> {
        self.asset_repo.count_by_parent(as_parent(sample_id)).await
    }

    /// Enabled samples for the front end, optionally limited to one project.
    pub async fn list_frontend(
        &self,
        project_id: Option<i32>,
    ) -> AppResult<Vec<project_sample::Model>> {
        match project_id {
            Some(project_id) => self.sample_repo.find_frontend_by_project(project_id).await,
            None => self.sample_repo.find_frontend().await,
        }
    }

    /// All samples of one project, enabled or not, in slot order.
    pub async fn list_by_project(&self, project_id: i32) -> AppResult<Vec<project_sample::Model>> {
        self.sample_repo.find_by_project(project_id).await
    }

    /// All samples for the admin list, in slot order.
    pub async fn list_all(&self) -> AppResult<Vec<project_sample::Model>> {
        self.sample_repo.find_all().await
    }

    /// Autocomplete suggestions labelled with [`Self::related_label`].
    pub async fn autocomplete(&self, term: &str) -> AppResult<Vec<AutocompleteItem>> {
        let samples = self.sample_repo.autocomplete(term, AUTOCOMPLETE_LIMIT).await?;

        let mut project_names: HashMap<i32, String> = HashMap::new();
        let mut items = Vec::with_capacity(samples.len());
        for sample in samples {
            if !project_names.contains_key(&sample.project_id) {
                let project = self.project_repo.get_by_id(sample.project_id).await?;
                project_names.insert(project.id, project.name);
            }
            let project_name = project_names
                .get(&sample.project_id)
                .map_or("", String::as_str);

            items.push(AutocompleteItem {
                id: sample.id,
                label: display::related_label(project_name, &sample.name),
            });
        }

        Ok(items)
    }

    /// Create a sample from admin input.
    pub async fn create(&self, input: ProjectSampleInput) -> AppResult<project_sample::Model> {
        self.project_repo.get_by_id(input.project_id).await?;

        let sample = self.sample_repo.create(input.into_active_model()?).await?;
        info!(sample_id = sample.id, project_id = sample.project_id, "Created project sample");
        Ok(sample)
    }

    /// Delete a sample with its galleries and assets.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.sample_repo.delete(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use std::sync::Arc;
    use work_projects_db::entities::{client, project, project_type};

    fn create_test_sample(id: i32, name: &str, project_id: i32) -> project_sample::Model {
        project_sample::Model {
            id,
            name: name.to_string(),
            description: String::new(),
            project_id,
            slot: None,
            enabled: true,
        }
    }

    fn create_test_project(id: i32, name: &str) -> project::Model {
        project::Model {
            id,
            name: name.to_string(),
            client_id: 1,
            slug: String::new(),
            description: String::new(),
            teaser: String::new(),
            site_url: String::new(),
            demo_url: String::new(),
            display_date: String::new(),
            slot: None,
            enabled: true,
            type_id: 1,
        }
    }

    fn service(db: DatabaseConnection) -> ProjectSampleService {
        let db = Arc::new(db);
        ProjectSampleService::new(
            ProjectSampleRepository::new(db.clone()),
            ProjectRepository::new(db.clone()),
            ProjectTypeRepository::new(db.clone()),
            ClientRepository::new(db.clone()),
            GalleryRepository::new(db.clone()),
            AssetRepository::new(db),
        )
    }

    #[tokio::test]
    async fn test_project_full_path() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[create_test_project(1, "Project")]])
            .append_query_results([[project_type::Model {
                id: 1,
                name: "Type".to_string(),
                slug: "type".to_string(),
                enabled: true,
                is_default: false,
            }]])
            .into_connection();

        let result = service(db)
            .project_full_path(&create_test_sample(1, "Sample", 1))
            .await
            .unwrap();

        assert_eq!(result, "Type > Project > Sample");
    }

    #[tokio::test]
    async fn test_project_full_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[create_test_project(1, "Name")]])
            .append_query_results([[client::Model {
                id: 1,
                name: "Client".to_string(),
            }]])
            .into_connection();

        let result = service(db)
            .project_full_name(&create_test_sample(1, "Sample", 1))
            .await
            .unwrap();

        assert_eq!(result, "Client Name");
    }

    #[tokio::test]
    async fn test_counts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                [maplit::btreemap! { "num_items" => sea_orm::Value::BigInt(Some(2)) }],
                [maplit::btreemap! { "num_items" => sea_orm::Value::BigInt(Some(0)) }],
            ])
            .into_connection();

        let service = service(db);
        assert_eq!(service.gallery_count(1).await.unwrap(), 2);
        assert_eq!(service.asset_count(1).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_autocomplete_labels() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[
                create_test_sample(3, "Checkout", 1),
                create_test_sample(1, "Homepage", 1),
            ]])
            .append_query_results([[create_test_project(1, "Bakery Site")]])
            .into_connection();

        let result = service(db).autocomplete("o").await.unwrap();

        assert_eq!(
            result,
            vec![
                AutocompleteItem {
                    id: 3,
                    label: "Bakery Site > Checkout".to_string(),
                },
                AutocompleteItem {
                    id: 1,
                    label: "Bakery Site > Homepage".to_string(),
                },
            ]
        );
    }
}
