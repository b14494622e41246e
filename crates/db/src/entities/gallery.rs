//! Gallery entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::parent::{ParentKind, ParentRef};

/// Gallery - a named collection of assets attached to a project sample.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "gallery")]
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

    #[sea_orm(column_type = "Text")]
    pub description: String,
}

impl Model {
    /// Parent kinds a gallery may attach to.
    pub const PERMITTED_PARENTS: &'static [ParentKind] = &[ParentKind::ProjectSample];

    /// The stored parent reference, if both halves are set.
    #[must_use]
    pub const fn parent_ref(&self) -> Option<ParentRef> {
        ParentRef::from_columns(self.parent_type, self.parent_id)
    }

    /// Reference used by assets attached to this gallery.
    #[must_use]
    pub const fn as_parent(&self) -> ParentRef {
        ParentRef::new(ParentKind::Gallery, self.id)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gallery_tag::Entity")]
    GalleryTags,
}

impl Related<super::gallery_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GalleryTags.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::gallery_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::gallery_tag::Relation::Gallery.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
