//! Admin list rows.

use super::links::{UrlReverser, changeform_link};
use crate::display::bool_label;
use crate::services::{AssetService, GalleryService, ProjectSampleService, ProjectService};
use work_projects_common::{AppError, AppResult};
use work_projects_db::entities::{asset, gallery, project, project_sample, project_type, tag};
use work_projects_db::repositories::{ProjectTypeRepository, TagRepository};

/// One rendered row of an admin list: `(column, value)` pairs in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// Primary key of the listed record.
    pub id: i32,
    /// Rendered cells.
    pub values: Vec<(&'static str, String)>,
}

impl ListRow {
    /// Value of a column.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in order.
    #[must_use]
    pub fn columns(&self) -> Vec<&'static str> {
        self.values.iter().map(|(name, _)| *name).collect()
    }
}

/// Builds the list rows the admin renders for each model.
#[derive(Clone)]
pub struct AdminLists {
    project_type_repo: ProjectTypeRepository,
    tag_repo: TagRepository,
    projects: ProjectService,
    samples: ProjectSampleService,
    galleries: GalleryService,
    assets: AssetService,
}

impl AdminLists {
    /// Create the list builder.
    #[must_use]
    pub const fn new(
        project_type_repo: ProjectTypeRepository,
        tag_repo: TagRepository,
        projects: ProjectService,
        samples: ProjectSampleService,
        galleries: GalleryService,
        assets: AssetService,
    ) -> Self {
        Self {
            project_type_repo,
            tag_repo,
            projects,
            samples,
            galleries,
            assets,
        }
    }

    /// Row of the project type list.
    pub async fn project_type_row(&self, model: &project_type::Model) -> AppResult<ListRow> {
        let project_count = self.project_type_repo.count_projects(model.id).await?;
        Ok(ListRow {
            id: model.id,
            values: vec![
                ("name", model.name.clone()),
                ("slug", model.slug.clone()),
                ("project_count", project_count.to_string()),
                ("enabled", bool_label(model.enabled).to_string()),
                ("is_default", bool_label(model.is_default).to_string()),
            ],
        })
    }

    /// Row of the project list.
    pub async fn project_row(&self, model: &project::Model) -> AppResult<ListRow> {
        Ok(ListRow {
            id: model.id,
            values: vec![
                ("name", model.name.clone()),
                ("client", self.projects.client_name(model).await?),
                ("type_name", self.projects.type_name(model).await?),
                (
                    "sample_count",
                    self.projects.sample_count(model.id).await?.to_string(),
                ),
                ("enabled", bool_label(model.enabled).to_string()),
            ],
        })
    }

    /// Row of the project sample list.
    pub async fn project_sample_row(&self, model: &project_sample::Model) -> AppResult<ListRow> {
        Ok(ListRow {
            id: model.id,
            values: vec![
                ("name", model.name.clone()),
                (
                    "project_full_path",
                    self.samples.project_full_path(model).await?,
                ),
                (
                    "asset_count",
                    self.samples.asset_count(model.id).await?.to_string(),
                ),
                (
                    "gallery_count",
                    self.samples.gallery_count(model.id).await?.to_string(),
                ),
                ("enabled", bool_label(model.enabled).to_string()),
            ],
        })
    }

    /// Row of the asset list.
    pub async fn asset_row(&self, model: &asset::Model) -> AppResult<ListRow> {
        Ok(ListRow {
            id: model.id,
            values: vec![
                ("name", model.name.clone()),
                ("parent_name", self.assets.parent_name(model).await?),
                ("parent_type", self.assets.parent_type(model)),
                ("image", model.image.clone()),
                ("caption", model.caption.clone()),
                ("tag_names", self.assets.tag_names(model.id).await?),
            ],
        })
    }

    /// Row of the gallery list.
    pub async fn gallery_row(&self, model: &gallery::Model) -> AppResult<ListRow> {
        Ok(ListRow {
            id: model.id,
            values: vec![
                ("name", model.name.clone()),
                ("parent_name", self.galleries.parent_name(model).await?),
                ("parent_type", self.galleries.parent_type(model)),
                (
                    "asset_count",
                    self.galleries.asset_count(model.id).await?.to_string(),
                ),
                ("slug", model.slug.clone()),
                ("tag_names", self.galleries.tag_names(model.id).await?),
            ],
        })
    }

    /// Row of the tag list.
    #[must_use]
    pub fn tag_row(&self, model: &tag::Model) -> ListRow {
        ListRow {
            id: model.id,
            values: vec![("name", model.name.clone()), ("slug", model.slug.clone())],
        }
    }

    /// Rows of the sample inline on a project's change page.
    ///
    /// Samples are listed enabled or not, in slot order, each with its
    /// "Details" link.
    pub async fn project_sample_inline<R: UrlReverser + ?Sized>(
        &self,
        project_id: i32,
        reverser: &R,
    ) -> AppResult<Vec<ListRow>> {
        let samples = self.samples.list_by_project(project_id).await?;
        Ok(samples
            .into_iter()
            .map(|sample| ListRow {
                id: sample.id,
                values: vec![
                    ("name", sample.name),
                    ("slot", sample.slot.map(|s| s.to_string()).unwrap_or_default()),
                    ("enabled", bool_label(sample.enabled).to_string()),
                    ("changeform_link", changeform_link(reverser, Some(sample.id))),
                ],
            })
            .collect())
    }

    /// Rows for the whole list view of `model`.
    pub async fn rows(&self, model: &str) -> AppResult<Vec<ListRow>> {
        let mut rows = Vec::new();
        match model {
            "projecttype" => {
                for m in self.project_type_repo.find_all().await? {
                    rows.push(self.project_type_row(&m).await?);
                }
            }
            "project" => {
                for m in self.projects.list_all().await? {
                    rows.push(self.project_row(&m).await?);
                }
            }
            "projectsample" => {
                for m in self.samples.list_all().await? {
                    rows.push(self.project_sample_row(&m).await?);
                }
            }
            "asset" => {
                for m in self.assets.list_all().await? {
                    rows.push(self.asset_row(&m).await?);
                }
            }
            "gallery" => {
                for m in self.galleries.list_all().await? {
                    rows.push(self.gallery_row(&m).await?);
                }
            }
            "tag" => {
                rows = self
                    .tag_repo
                    .find_all()
                    .await?
                    .iter()
                    .map(|m| self.tag_row(m))
                    .collect();
            }
            other => {
                return Err(AppError::NotFound(format!("Admin model: {other}")));
            }
        }
        Ok(rows)
    }
}
