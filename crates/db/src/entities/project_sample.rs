//! Project sample entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project sample - a named sub-unit of a project.
///
/// Assets and galleries attach to samples through their polymorphic
/// parent columns (see [`super::parent`]).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_sample")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Owning project ID.
    #[sea_orm(indexed)]
    pub project_id: i32,

    /// Manual ordering position; `None` means unordered.
    #[sea_orm(nullable)]
    pub slot: Option<i32>,

    #[sea_orm(default_value = true)]
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
