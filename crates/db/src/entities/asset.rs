//! Asset entity (uploaded images with display metadata).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::parent::{ParentKind, ParentRef};

/// Asset - an image shown in the context of a project sample or gallery.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asset")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Kind of the owning record.
    #[sea_orm(nullable)]
    pub parent_type: Option<ParentKind>,

    /// ID of the owning record.
    #[sea_orm(nullable)]
    pub parent_id: Option<i32>,

    pub name: String,

    /// URL slug, prepopulated from the name.
    pub slug: String,

    /// Storage key of the uploaded image.
    pub image: String,

    #[sea_orm(column_type = "Text")]
    pub teaser: String,

    #[sea_orm(column_type = "Text")]
    pub caption: String,

    /// Manual ordering position; `None` means unordered.
    #[sea_orm(nullable)]
    pub slot: Option<i32>,

    #[sea_orm(default_value = true)]
    pub enabled: bool,
}

impl Model {
    /// Parent kinds an asset may attach to.
    pub const PERMITTED_PARENTS: &'static [ParentKind] =
        &[ParentKind::ProjectSample, ParentKind::Gallery];

    /// The stored parent reference, if both halves are set.
    #[must_use]
    pub const fn parent_ref(&self) -> Option<ParentRef> {
        ParentRef::from_columns(self.parent_type, self.parent_id)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::asset_tag::Entity")]
    AssetTags,
}

impl Related<super::asset_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetTags.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::asset_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::asset_tag::Relation::Asset.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
