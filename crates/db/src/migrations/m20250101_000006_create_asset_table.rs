//! Create asset table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Asset::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Asset::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Asset::ParentType).string_len(32).null())
                    .col(ColumnDef::new(Asset::ParentId).integer().null())
                    .col(
                        ColumnDef::new(Asset::Name)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Asset::Slug)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Asset::Image).string_len(255).not_null())
                    .col(ColumnDef::new(Asset::Teaser).text().not_null().default(""))
                    .col(ColumnDef::new(Asset::Caption).text().not_null().default(""))
                    .col(ColumnDef::new(Asset::Slot).integer().null())
                    .col(
                        ColumnDef::new(Asset::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // Polymorphic parent lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_asset_parent")
                    .table(Asset::Table)
                    .col(Asset::ParentType)
                    .col(Asset::ParentId)
                    .to_owned(),
            )
            .await?;

        // Portfolio listings filter on enabled and sort by slot
        manager
            .create_index(
                Index::create()
                    .name("idx_asset_enabled_slot")
                    .table(Asset::Table)
                    .col(Asset::Enabled)
                    .col(Asset::Slot)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Asset::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Asset {
    Table,
    Id,
    ParentType,
    ParentId,
    Name,
    Slug,
    Image,
    Teaser,
    Caption,
    Slot,
    Enabled,
}
