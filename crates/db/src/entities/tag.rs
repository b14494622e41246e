//! Tag entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tag - a keyword attached to assets and galleries.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::asset_tag::Entity")]
    AssetTags,
    #[sea_orm(has_many = "super::gallery_tag::Entity")]
    GalleryTags,
}

impl Related<super::asset_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetTags.def()
    }
}

impl Related<super::gallery_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GalleryTags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
