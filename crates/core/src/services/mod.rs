//! Business logic services.

#![allow(missing_docs)]

pub mod asset;
pub mod gallery;
pub mod project;
pub mod project_sample;

pub use asset::AssetService;
pub use gallery::GalleryService;
pub use project::ProjectService;
pub use project_sample::ProjectSampleService;

use serde::Serialize;
use work_projects_db::entities::ParentKind;

/// One autocomplete suggestion for a related-object picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteItem {
    pub id: i32,
    pub label: String,
}

/// Display label of a stored parent kind; empty when unset.
fn parent_kind_label(kind: Option<ParentKind>) -> String {
    kind.map(|k| k.label().to_string()).unwrap_or_default()
}
