//! Project type entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project type - a category grouping projects (e.g. "Web Development").
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Type name.
    pub name: String,

    /// URL slug, prepopulated from the name.
    pub slug: String,

    /// Whether the type is shown.
    #[sea_orm(default_value = true)]
    pub enabled: bool,

    /// Whether this is the type selected by default. At most one by convention.
    #[sea_orm(default_value = false)]
    pub is_default: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project::Entity")]
    Projects,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
