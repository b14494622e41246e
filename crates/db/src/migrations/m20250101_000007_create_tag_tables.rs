//! Create tag, asset_tag and gallery_tag tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create tag table
        manager
            .create_table(
                Table::create()
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tag::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Tag::Name)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Tag::Slug)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tag_slug")
                    .table(Tag::Table)
                    .col(Tag::Slug)
                    .to_owned(),
            )
            .await?;

        // Create asset_tag table
        manager
            .create_table(
                Table::create()
                    .table(AssetTag::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssetTag::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AssetTag::AssetId).integer().not_null())
                    .col(ColumnDef::new(AssetTag::TagId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_tag_asset")
                            .from(AssetTag::Table, AssetTag::AssetId)
                            .to(Asset::Table, Asset::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_tag_tag")
                            .from(AssetTag::Table, AssetTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_asset_tag_unique")
                    .table(AssetTag::Table)
                    .col(AssetTag::AssetId)
                    .col(AssetTag::TagId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create gallery_tag table
        manager
            .create_table(
                Table::create()
                    .table(GalleryTag::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GalleryTag::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GalleryTag::GalleryId).integer().not_null())
                    .col(ColumnDef::new(GalleryTag::TagId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gallery_tag_gallery")
                            .from(GalleryTag::Table, GalleryTag::GalleryId)
                            .to(Gallery::Table, Gallery::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gallery_tag_tag")
                            .from(GalleryTag::Table, GalleryTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gallery_tag_unique")
                    .table(GalleryTag::Table)
                    .col(GalleryTag::GalleryId)
                    .col(GalleryTag::TagId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GalleryTag::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AssetTag::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Tag {
    Table,
    Id,
    Name,
    Slug,
}

#[derive(Iden)]
enum AssetTag {
    Table,
    Id,
    AssetId,
    TagId,
}

#[derive(Iden)]
enum GalleryTag {
    Table,
    Id,
    GalleryId,
    TagId,
}

#[derive(Iden)]
enum Asset {
    Table,
    Id,
}

#[derive(Iden)]
enum Gallery {
    Table,
    Id,
}
