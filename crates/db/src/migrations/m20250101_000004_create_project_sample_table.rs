//! Create project_sample table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectSample::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectSample::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectSample::Name)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(ProjectSample::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(ProjectSample::ProjectId).integer().not_null())
                    .col(ColumnDef::new(ProjectSample::Slot).integer().null())
                    .col(
                        ColumnDef::new(ProjectSample::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_sample_project")
                            .from(ProjectSample::Table, ProjectSample::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_sample_project_id")
                    .table(ProjectSample::Table)
                    .col(ProjectSample::ProjectId)
                    .to_owned(),
            )
            .await?;

        // Front-end listings filter on enabled and sort by slot
        manager
            .create_index(
                Index::create()
                    .name("idx_project_sample_enabled_slot")
                    .table(ProjectSample::Table)
                    .col(ProjectSample::Enabled)
                    .col(ProjectSample::Slot)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectSample::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProjectSample {
    Table,
    Id,
    Name,
    Description,
    ProjectId,
    Slot,
    Enabled,
}

#[derive(Iden)]
enum Project {
    Table,
    Id,
}
