//! Create gallery table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gallery::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gallery::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gallery::ParentType).string_len(32).null())
                    .col(ColumnDef::new(Gallery::ParentId).integer().null())
                    .col(
                        ColumnDef::new(Gallery::Name)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Gallery::Slug)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Gallery::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        // Polymorphic parent lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_gallery_parent")
                    .table(Gallery::Table)
                    .col(Gallery::ParentType)
                    .col(Gallery::ParentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gallery::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Gallery {
    Table,
    Id,
    ParentType,
    ParentId,
    Name,
    Slug,
    Description,
}
