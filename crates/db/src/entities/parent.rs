//! Polymorphic parent references for assets and galleries.
//!
//! Assets and galleries store their owner as a `(parent_type, parent_id)`
//! column pair. The pair is resolved at read time by
//! [`ParentRepository`](crate::repositories::ParentRepository).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of record an asset or gallery can be attached to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum ParentKind {
    #[sea_orm(string_value = "project_sample")]
    ProjectSample,
    #[sea_orm(string_value = "gallery")]
    Gallery,
}

impl ParentKind {
    /// Human-readable label shown in admin list columns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProjectSample => "project sample",
            Self::Gallery => "gallery",
        }
    }
}

impl fmt::Display for ParentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A `(kind, id)` pointer to the owning record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParentRef {
    pub kind: ParentKind,
    pub id: i32,
}

impl ParentRef {
    #[must_use]
    pub const fn new(kind: ParentKind, id: i32) -> Self {
        Self { kind, id }
    }

    /// Build a reference from stored columns; `None` unless both are set.
    #[must_use]
    pub const fn from_columns(kind: Option<ParentKind>, id: Option<i32>) -> Option<Self> {
        match (kind, id) {
            (Some(kind), Some(id)) => Some(Self { kind, id }),
            _ => None,
        }
    }

    /// Whether this reference's kind is in `permitted`.
    #[must_use]
    pub fn is_permitted(&self, permitted: &[ParentKind]) -> bool {
        permitted.contains(&self.kind)
    }
}

/// A resolved parent record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parent {
    ProjectSample(super::project_sample::Model),
    Gallery(super::gallery::Model),
}

impl Parent {
    /// The parent's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ProjectSample(sample) => &sample.name,
            Self::Gallery(gallery) => &gallery.name,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ParentKind {
        match self {
            Self::ProjectSample(_) => ParentKind::ProjectSample,
            Self::Gallery(_) => ParentKind::Gallery,
        }
    }
}
