//! Create project table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Project::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Project::Name)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Project::ClientId).integer().not_null())
                    .col(
                        ColumnDef::new(Project::Slug)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Project::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Project::Teaser).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Project::SiteUrl)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Project::DemoUrl)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Project::DisplayDate)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Project::Slot).small_integer().null())
                    .col(
                        ColumnDef::new(Project::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Project::TypeId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_client")
                            .from(Project::Table, Project::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_type")
                            .from(Project::Table, Project::TypeId)
                            .to(ProjectType::Table, ProjectType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_client_id")
                    .table(Project::Table)
                    .col(Project::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_type_id")
                    .table(Project::Table)
                    .col(Project::TypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_slug")
                    .table(Project::Table)
                    .col(Project::Slug)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Project {
    Table,
    Id,
    Name,
    ClientId,
    Slug,
    Description,
    Teaser,
    SiteUrl,
    DemoUrl,
    DisplayDate,
    Slot,
    Enabled,
    TypeId,
}

#[derive(Iden)]
enum Client {
    Table,
    Id,
}

#[derive(Iden)]
enum ProjectType {
    Table,
    Id,
}
