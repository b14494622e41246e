//! Database integration tests.
//!
//! These tests require a running `PostgreSQL` instance.
//! Run with: `cargo test --test db_integration -- --ignored`
//!
//! Environment variables:
//!   `TEST_DB_HOST` (default: localhost)
//!   `TEST_DB_PORT` (default: 5433)
//!   `TEST_DB_USER` (default: `work_projects_test`)
//!   `TEST_DB_PASSWORD` (default: `work_projects_test`)
//!   `TEST_DB_NAME` (default: `work_projects_test`)

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use sea_orm::{Set, SqlxPostgresConnector};
use work_projects_db::Repositories;
use work_projects_db::entities::{
    ParentKind, ParentRef, asset, gallery, project, project_sample, project_type,
};
use work_projects_db::test_utils::{TestDatabase, TestDbConfig};

async fn setup() -> (TestDatabase, Repositories) {
    let db = TestDatabase::create_unique()
        .await
        .expect("Failed to create test database");
    db.insert_client(1, "Northrose Bakery")
        .await
        .expect("Failed to insert client");
    let repos = Repositories::new(Arc::new(SqlxPostgresConnector::from_sqlx_postgres_pool(
        db.connection().get_postgres_connection_pool().clone(),
    )));
    (db, repos)
}

async fn create_sample(repos: &Repositories) -> (project::Model, project_sample::Model) {
    let web = repos
        .project_types
        .create(project_type::ActiveModel {
            name: Set("Web Development".to_string()),
            slug: Set("web-development".to_string()),
            enabled: Set(true),
            is_default: Set(true),
            ..Default::default()
        })
        .await
        .unwrap();

    let project = repos
        .projects
        .create(project::ActiveModel {
            name: Set("Bakery Site".to_string()),
            client_id: Set(1),
            slug: Set("bakery-site".to_string()),
            description: Set(String::new()),
            teaser: Set(String::new()),
            site_url: Set(String::new()),
            demo_url: Set(String::new()),
            display_date: Set("Spring 2014".to_string()),
            slot: Set(None),
            enabled: Set(true),
            type_id: Set(web.id),
            ..Default::default()
        })
        .await
        .unwrap();

    let sample = repos
        .samples
        .create(project_sample::ActiveModel {
            name: Set("Homepage".to_string()),
            description: Set(String::new()),
            project_id: Set(project.id),
            slot: Set(Some(1)),
            enabled: Set(true),
            ..Default::default()
        })
        .await
        .unwrap();

    (project, sample)
}

fn new_asset(parent: ParentRef, name: &str, slot: Option<i32>, enabled: bool) -> asset::ActiveModel {
    asset::ActiveModel {
        parent_type: Set(Some(parent.kind)),
        parent_id: Set(Some(parent.id)),
        name: Set(name.to_string()),
        slug: Set(String::new()),
        image: Set(format!("projects/{name}.png")),
        teaser: Set(String::new()),
        caption: Set(String::new()),
        slot: Set(slot),
        enabled: Set(enabled),
        ..Default::default()
    }
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_database_connection() {
    let config = TestDbConfig::default();
    let result = TestDatabase::with_config(config).await;
    assert!(result.is_ok(), "Failed to connect: {:?}", result.err());
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_portfolio_order_and_visibility() {
    let (db, repos) = setup().await;
    let (_, sample) = create_sample(&repos).await;
    let parent = ParentRef::new(ParentKind::ProjectSample, sample.id);

    repos.assets.create(new_asset(parent, "unordered", None, true)).await.unwrap();
    repos.assets.create(new_asset(parent, "second", Some(2), true)).await.unwrap();
    repos.assets.create(new_asset(parent, "hidden", Some(0), false)).await.unwrap();
    repos.assets.create(new_asset(parent, "first", Some(1), true)).await.unwrap();

    let visible: Vec<String> = repos
        .assets
        .find_portfolio_by_parent(parent)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(visible, ["first", "second", "unordered"]);

    assert_eq!(repos.assets.count_by_parent(parent).await.unwrap(), 4);

    db.drop_database().await.unwrap();
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_delete_sample_cascades_to_attached() {
    let (db, repos) = setup().await;
    let (project, sample) = create_sample(&repos).await;
    let sample_parent = ParentRef::new(ParentKind::ProjectSample, sample.id);

    let gallery = repos
        .galleries
        .create(gallery::ActiveModel {
            parent_type: Set(Some(ParentKind::ProjectSample)),
            parent_id: Set(Some(sample.id)),
            name: Set("Sketches".to_string()),
            slug: Set("sketches".to_string()),
            description: Set(String::new()),
            ..Default::default()
        })
        .await
        .unwrap();

    repos.assets.create(new_asset(sample_parent, "hero", Some(1), true)).await.unwrap();
    repos
        .assets
        .create(new_asset(gallery.as_parent(), "sketch", Some(1), true))
        .await
        .unwrap();

    repos.samples.delete(sample.id).await.unwrap();

    assert!(repos.galleries.find_by_id(gallery.id).await.unwrap().is_none());
    assert_eq!(repos.assets.find_all().await.unwrap().len(), 0);
    assert_eq!(repos.projects.count_samples(project.id).await.unwrap(), 0);

    db.drop_database().await.unwrap();
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_resolve_parent_and_tags() {
    let (db, repos) = setup().await;
    let (_, sample) = create_sample(&repos).await;
    let parent = ParentRef::new(ParentKind::ProjectSample, sample.id);

    let resolved = repos.parents.resolve(parent).await.unwrap().unwrap();
    assert_eq!(resolved.name(), "Homepage");

    let asset = repos.assets.create(new_asset(parent, "hero", None, true)).await.unwrap();
    let ink = repos.tags.get_or_create("Ink").await.unwrap();
    let wash = repos.tags.get_or_create("Watercolor Wash").await.unwrap();
    assert_eq!(repos.tags.get_or_create("ink").await.unwrap().id, ink.id);

    repos.assets.add_tag(asset.id, wash.id).await.unwrap();
    repos.assets.add_tag(asset.id, ink.id).await.unwrap();
    repos.assets.add_tag(asset.id, ink.id).await.unwrap();

    let names: Vec<String> = repos
        .assets
        .find_tags(asset.id)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["Watercolor Wash", "Ink"]);

    db.drop_database().await.unwrap();
}

#[test]
fn test_config_from_env() {
    let config = TestDbConfig::default();
    assert!(!config.host.is_empty());
    assert!(config.port > 0);
    assert!(!config.username.is_empty());
    assert!(config.database_url().starts_with("postgres://"));
}
