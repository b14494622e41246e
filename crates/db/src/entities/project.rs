//! Project entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project - a client showcase entry.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Project name.
    pub name: String,

    /// Owning client ID.
    #[sea_orm(indexed)]
    pub client_id: i32,

    /// URL slug, prepopulated from the name.
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub teaser: String,

    /// Live site URL (may be empty).
    pub site_url: String,

    /// Demo URL (may be empty).
    pub demo_url: String,

    /// Free-form date label, e.g. "Spring 2014".
    pub display_date: String,

    /// Manual ordering position; `None` means unordered.
    #[sea_orm(nullable)]
    pub slot: Option<i16>,

    #[sea_orm(default_value = true)]
    pub enabled: bool,

    /// Project type ID.
    #[sea_orm(indexed)]
    pub type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_delete = "Cascade"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::project_type::Entity",
        from = "Column::TypeId",
        to = "super::project_type::Column::Id",
        on_delete = "Cascade"
    )]
    ProjectType,
    #[sea_orm(has_many = "super::project_sample::Entity")]
    Samples,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::project_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectType.def()
    }
}

impl Related<super::project_sample::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Samples.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
