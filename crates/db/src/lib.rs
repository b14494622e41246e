//! Database layer for work-projects.
//!
//! Entities, migrations, and repositories for project types, projects,
//! project samples, galleries, assets, and tags.

pub mod entities;
pub mod migrations;
pub mod repositories;
pub mod test_utils;

use std::sync::Arc;

use repositories::{
    AssetRepository, ClientRepository, GalleryRepository, ParentRepository, ProjectRepository,
    ProjectSampleRepository, ProjectTypeRepository, TagRepository,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::log::LevelFilter;
use work_projects_common::{AppError, Config};

/// Initialize database connection.
pub async fn init(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database.url);

    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Run pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), AppError> {
    use sea_orm_migration::MigratorTrait;
    migrations::Migrator::up(db, None)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Every repository, sharing one connection.
#[derive(Clone)]
#[allow(missing_docs)]
pub struct Repositories {
    pub clients: ClientRepository,
    pub project_types: ProjectTypeRepository,
    pub projects: ProjectRepository,
    pub samples: ProjectSampleRepository,
    pub galleries: GalleryRepository,
    pub assets: AssetRepository,
    pub tags: TagRepository,
    pub parents: ParentRepository,
}

impl Repositories {
    /// Build the repository set over a shared connection.
    #[must_use]
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            clients: ClientRepository::new(db.clone()),
            project_types: ProjectTypeRepository::new(db.clone()),
            projects: ProjectRepository::new(db.clone()),
            samples: ProjectSampleRepository::new(db.clone()),
            galleries: GalleryRepository::new(db.clone()),
            assets: AssetRepository::new(db.clone()),
            tags: TagRepository::new(db.clone()),
            parents: ParentRepository::new(db),
        }
    }
}
