//! Admin form input.
//!
//! Each input validates against the column limits of its table and converts
//! into an active model ready for insertion.

#![allow(missing_docs)]

use sea_orm::Set;
use serde::Deserialize;
use validator::{Validate, ValidateUrl, ValidationError};
use work_projects_common::{AppError, AppResult, image_upload_key, is_valid_slug, slugify};
use work_projects_db::entities::{
    ParentKind, ParentRef, asset, gallery, project, project_sample, project_type, tag,
};

/// Fill an empty slug from the name, as the admin's prepopulated fields do.
#[must_use]
pub fn prepopulate_slug(slug: &str, name: &str) -> String {
    let slug = slug.trim();
    if slug.is_empty() {
        slugify(name)
    } else {
        slug.to_string()
    }
}

/// Reject a parent whose kind the entity cannot attach to.
///
/// An unset parent is accepted; the record simply has no owner yet.
pub fn check_parent_kind(parent: Option<ParentRef>, permitted: &[ParentKind]) -> AppResult<()> {
    match parent {
        Some(parent) if !parent.is_permitted(permitted) => Err(AppError::Validation(format!(
            "Parent kind '{}' is not permitted here",
            parent.kind
        ))),
        _ => Ok(()),
    }
}

fn blank_or_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

fn valid_slug(value: &str) -> Result<(), ValidationError> {
    if is_valid_slug(value) {
        Ok(())
    } else {
        Err(ValidationError::new("slug"))
    }
}

const fn default_true() -> bool {
    true
}

/// Input for creating a project type.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTypeInput {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 50), custom(function = "valid_slug"))]
    pub slug: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub is_default: bool,
}

impl ProjectTypeInput {
    /// Validate and convert into an active model.
    pub fn into_active_model(mut self) -> AppResult<project_type::ActiveModel> {
        self.slug = prepopulate_slug(&self.slug, &self.name);
        self.validate()?;

        Ok(project_type::ActiveModel {
            name: Set(self.name),
            slug: Set(self.slug),
            enabled: Set(self.enabled),
            is_default: Set(self.is_default),
            ..Default::default()
        })
    }
}

/// Input for creating a project.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub client_id: i32,
    pub type_id: i32,
    #[serde(default)]
    #[validate(length(max = 50), custom(function = "valid_slug"))]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub teaser: String,
    #[serde(default)]
    #[validate(length(max = 200), custom(function = "blank_or_url"))]
    pub site_url: String,
    #[serde(default)]
    #[validate(length(max = 200), custom(function = "blank_or_url"))]
    pub demo_url: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub display_date: String,
    #[validate(range(min = 0))]
    pub slot: Option<i16>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl ProjectInput {
    /// Validate and convert into an active model.
    pub fn into_active_model(mut self) -> AppResult<project::ActiveModel> {
        self.slug = prepopulate_slug(&self.slug, &self.name);
        self.validate()?;

        Ok(project::ActiveModel {
            name: Set(self.name),
            client_id: Set(self.client_id),
            slug: Set(self.slug),
            description: Set(self.description),
            teaser: Set(self.teaser),
            site_url: Set(self.site_url),
            demo_url: Set(self.demo_url),
            display_date: Set(self.display_date),
            slot: Set(self.slot),
            enabled: Set(self.enabled),
            type_id: Set(self.type_id),
            ..Default::default()
        })
    }
}

/// Input for creating a project sample.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSampleInput {
    pub project_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0))]
    pub slot: Option<i32>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl ProjectSampleInput {
    /// Validate and convert into an active model.
    pub fn into_active_model(self) -> AppResult<project_sample::ActiveModel> {
        self.validate()?;

        Ok(project_sample::ActiveModel {
            name: Set(self.name),
            description: Set(self.description),
            project_id: Set(self.project_id),
            slot: Set(self.slot),
            enabled: Set(self.enabled),
            ..Default::default()
        })
    }
}

/// Input for creating a gallery.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GalleryInput {
    pub parent: Option<ParentRef>,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 50), custom(function = "valid_slug"))]
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

impl GalleryInput {
    /// Validate and convert into an active model.
    pub fn into_active_model(mut self) -> AppResult<gallery::ActiveModel> {
        check_parent_kind(self.parent, gallery::Model::PERMITTED_PARENTS)?;
        self.slug = prepopulate_slug(&self.slug, &self.name);
        self.validate()?;

        Ok(gallery::ActiveModel {
            parent_type: Set(self.parent.map(|p| p.kind)),
            parent_id: Set(self.parent.map(|p| p.id)),
            name: Set(self.name),
            slug: Set(self.slug),
            description: Set(self.description),
            ..Default::default()
        })
    }
}

/// Input for creating an asset.
///
/// `image` is the storage key of an already uploaded file.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssetInput {
    pub parent: Option<ParentRef>,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 50), custom(function = "valid_slug"))]
    pub slug: String,
    #[validate(length(min = 1, max = 255))]
    pub image: String,
    #[serde(default)]
    pub teaser: String,
    #[serde(default)]
    pub caption: String,
    #[validate(range(min = 0))]
    pub slot: Option<i32>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl AssetInput {
    /// Point `image` at a fresh storage key for an uploaded file.
    pub fn set_uploaded_image(&mut self, original_name: &str) {
        self.image = image_upload_key(original_name);
    }

    /// Validate and convert into an active model.
    pub fn into_active_model(mut self) -> AppResult<asset::ActiveModel> {
        check_parent_kind(self.parent, asset::Model::PERMITTED_PARENTS)?;
        self.slug = prepopulate_slug(&self.slug, &self.name);
        self.validate()?;

        Ok(asset::ActiveModel {
            parent_type: Set(self.parent.map(|p| p.kind)),
            parent_id: Set(self.parent.map(|p| p.id)),
            name: Set(self.name),
            slug: Set(self.slug),
            image: Set(self.image),
            teaser: Set(self.teaser),
            caption: Set(self.caption),
            slot: Set(self.slot),
            enabled: Set(self.enabled),
            ..Default::default()
        })
    }
}

/// Input for creating a tag.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TagInput {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 50), custom(function = "valid_slug"))]
    pub slug: String,
}

impl TagInput {
    /// Validate and convert into an active model.
    pub fn into_active_model(mut self) -> AppResult<tag::ActiveModel> {
        self.slug = prepopulate_slug(&self.slug, &self.name);
        self.validate()?;

        Ok(tag::ActiveModel {
            name: Set(self.name),
            slug: Set(self.slug),
            ..Default::default()
        })
    }
}
