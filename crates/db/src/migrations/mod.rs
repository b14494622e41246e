//! Database migrations.
//!
//! Schema migrations for the database.

#![allow(missing_docs)]

use sea_orm_migration::prelude::*;

mod m20250101_000001_create_client_table;
mod m20250101_000002_create_project_type_table;
mod m20250101_000003_create_project_table;
mod m20250101_000004_create_project_sample_table;
mod m20250101_000005_create_gallery_table;
mod m20250101_000006_create_asset_table;
mod m20250101_000007_create_tag_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_client_table::Migration),
            Box::new(m20250101_000002_create_project_type_table::Migration),
            Box::new(m20250101_000003_create_project_table::Migration),
            Box::new(m20250101_000004_create_project_sample_table::Migration),
            Box::new(m20250101_000005_create_gallery_table::Migration),
            Box::new(m20250101_000006_create_asset_table::Migration),
            Box::new(m20250101_000007_create_tag_tables::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_order() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        assert_eq!(names.len(), 7);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
