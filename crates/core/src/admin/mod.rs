//! Admin site description.
//!
//! The admin UI itself is external. This module describes what it shows for
//! each model: list columns, prepopulated slugs, inline editors and generic
//! parent lookups, plus the row values and edit links it renders.

pub mod forms;
pub mod links;
pub mod list;

pub use forms::{
    AssetInput, GalleryInput, ProjectInput, ProjectSampleInput, ProjectTypeInput, TagInput,
    check_parent_kind, prepopulate_slug,
};
pub use links::{AdminRouter, ReverseError, UrlReverser, changeform_link};
pub use list::{AdminLists, ListRow};

/// A named list column and its header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListColumn {
    /// Key the row values are stored under.
    pub name: &'static str,
    /// Column heading.
    pub header: &'static str,
}

const fn col(name: &'static str, header: &'static str) -> ListColumn {
    ListColumn { name, header }
}

/// How an inline editor lays out its forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    /// One full form per child.
    Stacked,
    /// One table row per child.
    Tabular,
}

/// A child editor nested in a parent's change page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineAdmin {
    /// Child model name.
    pub model: &'static str,
    /// Form layout.
    pub style: InlineStyle,
    /// Blank forms shown for new children.
    pub extra: u8,
    /// Drag-and-drop ordering field.
    pub sortable_field: Option<&'static str>,
    /// Computed fields shown but not edited.
    pub readonly_fields: &'static [&'static str],
    /// Child attaches through `parent_type`/`parent_id` rather than a foreign key.
    pub generic: bool,
    /// Heading override for the inline.
    pub verbose_name: Option<&'static str>,
}

/// Admin options for one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelAdmin {
    /// Model name, as used in admin routes.
    pub model: &'static str,
    /// Columns of the list view.
    pub list_display: &'static [ListColumn],
    /// `(target, source)` pairs filled by [`prepopulate_slug`].
    pub prepopulated_fields: &'static [(&'static str, &'static str)],
    /// Child editors on the change page.
    pub inlines: &'static [InlineAdmin],
    /// Fields edited through inlines instead of the main form.
    pub exclude: &'static [&'static str],
    /// Generic parent `(kind, id)` fields with autocomplete lookup.
    pub generic_lookup: Option<(&'static str, &'static str)>,
}

const ASSET_INLINE: InlineAdmin = InlineAdmin {
    model: "asset",
    style: InlineStyle::Tabular,
    extra: 0,
    sortable_field: Some("slot"),
    readonly_fields: &[],
    generic: true,
    verbose_name: None,
};

const GALLERY_INLINE: InlineAdmin = InlineAdmin {
    model: "gallery",
    style: InlineStyle::Tabular,
    extra: 0,
    sortable_field: None,
    readonly_fields: &[],
    generic: true,
    verbose_name: None,
};

const PROJECT_SAMPLE_INLINE: InlineAdmin = InlineAdmin {
    model: "projectsample",
    style: InlineStyle::Stacked,
    extra: 1,
    sortable_field: Some("slot"),
    readonly_fields: &["changeform_link"],
    generic: false,
    verbose_name: None,
};

const ASSET_TAG_INLINE: InlineAdmin = InlineAdmin {
    model: "asset_tag",
    style: InlineStyle::Tabular,
    extra: 1,
    sortable_field: None,
    readonly_fields: &[],
    generic: false,
    verbose_name: Some("Tag"),
};

const GALLERY_TAG_INLINE: InlineAdmin = InlineAdmin {
    model: "gallery_tag",
    style: InlineStyle::Tabular,
    extra: 1,
    sortable_field: None,
    readonly_fields: &[],
    generic: false,
    verbose_name: Some("Tag"),
};

const SLUG_FROM_NAME: &[(&str, &str)] = &[("slug", "name")];

const MODELS: &[ModelAdmin] = &[
    ModelAdmin {
        model: "projecttype",
        list_display: &[
            col("name", "Name"),
            col("slug", "Slug"),
            col("project_count", "Projects"),
            col("enabled", "Enabled"),
            col("is_default", "Is default"),
        ],
        prepopulated_fields: SLUG_FROM_NAME,
        inlines: &[],
        exclude: &[],
        generic_lookup: None,
    },
    ModelAdmin {
        model: "project",
        list_display: &[
            col("name", "Name"),
            col("client", "Client"),
            col("type_name", "Type"),
            col("sample_count", "Samples"),
            col("enabled", "Enabled"),
        ],
        prepopulated_fields: SLUG_FROM_NAME,
        inlines: &[PROJECT_SAMPLE_INLINE],
        exclude: &[],
        generic_lookup: None,
    },
    ModelAdmin {
        model: "projectsample",
        list_display: &[
            col("name", "Name"),
            col("project_full_path", "Project"),
            col("asset_count", "Assets"),
            col("gallery_count", "Galleries"),
            col("enabled", "Enabled"),
        ],
        prepopulated_fields: &[],
        inlines: &[ASSET_INLINE, GALLERY_INLINE],
        exclude: &["tags"],
        generic_lookup: None,
    },
    ModelAdmin {
        model: "asset",
        list_display: &[
            col("name", "Name"),
            col("parent_name", "Parent"),
            col("parent_type", "Parent type"),
            col("image", "Image"),
            col("caption", "Caption"),
            col("tag_names", "Tags"),
        ],
        prepopulated_fields: SLUG_FROM_NAME,
        inlines: &[ASSET_TAG_INLINE],
        exclude: &["tags"],
        generic_lookup: Some(("parent_type", "parent_id")),
    },
    ModelAdmin {
        model: "gallery",
        list_display: &[
            col("name", "Name"),
            col("parent_name", "Parent"),
            col("parent_type", "Parent type"),
            col("asset_count", "Assets"),
            col("slug", "Slug"),
            col("tag_names", "Tags"),
        ],
        prepopulated_fields: SLUG_FROM_NAME,
        inlines: &[ASSET_INLINE, GALLERY_TAG_INLINE],
        exclude: &["tags"],
        generic_lookup: Some(("parent_type", "parent_id")),
    },
    ModelAdmin {
        model: "tag",
        list_display: &[col("name", "Name"), col("slug", "Slug")],
        prepopulated_fields: SLUG_FROM_NAME,
        inlines: &[],
        exclude: &[],
        generic_lookup: None,
    },
];

/// Registry of model admins.
#[derive(Debug, Clone, Copy)]
pub struct AdminSite {
    models: &'static [ModelAdmin],
}

impl AdminSite {
    /// The site with every work-projects model registered.
    #[must_use]
    pub const fn default_site() -> Self {
        Self { models: MODELS }
    }

    /// Registered model admins in registration order.
    #[must_use]
    pub const fn models(&self) -> &'static [ModelAdmin] {
        self.models
    }

    /// Admin options for `model`.
    #[must_use]
    pub fn get(&self, model: &str) -> Option<&'static ModelAdmin> {
        self.models.iter().find(|m| m.model == model)
    }

    /// Column names shown in the list view of `model`.
    #[must_use]
    pub fn column_names(&self, model: &str) -> Vec<&'static str> {
        self.get(model)
            .map(|m| m.list_display.iter().map(|c| c.name).collect())
            .unwrap_or_default()
    }
}
