//! Database entities.

#![allow(missing_docs)]

pub mod asset;
pub mod asset_tag;
pub mod client;
pub mod gallery;
pub mod gallery_tag;
pub mod parent;
pub mod project;
pub mod project_sample;
pub mod project_type;
pub mod tag;

pub use asset::Entity as Asset;
pub use asset_tag::Entity as AssetTag;
pub use client::Entity as Client;
pub use gallery::Entity as Gallery;
pub use gallery_tag::Entity as GalleryTag;
pub use parent::{Parent, ParentKind, ParentRef};
pub use project::Entity as Project;
pub use project_sample::Entity as ProjectSample;
pub use project_type::Entity as ProjectType;
pub use tag::Entity as Tag;
