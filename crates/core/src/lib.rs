//! Core business logic for work-projects.
//!
//! Services compute the derived values shown to visitors and editors
//! (full names, paths, counts, tag lists). The [`admin`] module describes the
//! admin site built on top of them.

pub mod admin;
pub mod display;
pub mod services;

pub use services::*;

use admin::AdminLists;
use work_projects_common::PortfolioConfig;
use work_projects_db::Repositories;

/// Every service, wired over one repository set.
#[derive(Clone)]
#[allow(missing_docs)]
pub struct Services {
    pub projects: ProjectService,
    pub samples: ProjectSampleService,
    pub galleries: GalleryService,
    pub assets: AssetService,
    pub admin: AdminLists,
}

impl Services {
    /// Wire the services.
    #[must_use]
    pub fn new(repos: &Repositories, portfolio: PortfolioConfig) -> Self {
        let projects = ProjectService::new(
            repos.projects.clone(),
            repos.project_types.clone(),
            repos.clients.clone(),
            portfolio,
        );
        let samples = ProjectSampleService::new(
            repos.samples.clone(),
            repos.projects.clone(),
            repos.project_types.clone(),
            repos.clients.clone(),
            repos.galleries.clone(),
            repos.assets.clone(),
        );
        let galleries = GalleryService::new(
            repos.galleries.clone(),
            repos.parents.clone(),
            repos.tags.clone(),
        );
        let assets = AssetService::new(
            repos.assets.clone(),
            repos.parents.clone(),
            repos.tags.clone(),
        );
        let admin = AdminLists::new(
            repos.project_types.clone(),
            repos.tags.clone(),
            projects.clone(),
            samples.clone(),
            galleries.clone(),
            assets.clone(),
        );

        Self {
            projects,
            samples,
            galleries,
            assets,
            admin,
        }
    }
}
