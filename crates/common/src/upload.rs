//! Storage keys for uploaded asset images.
//!
//! The file storage backend is provided by the host application; assets only
//! keep the key returned here.

/// Directory asset images are uploaded into.
pub const IMAGE_UPLOAD_DIR: &str = "projects";

/// Build a unique storage key for an uploaded image.
///
/// The key keeps a sanitized version of the original file stem so that
/// stored files stay recognizable, e.g. `projects/hero-shot_<uuid>.png`.
#[must_use]
pub fn image_upload_key(original_name: &str) -> String {
    let (stem, extension) = match original_name.rfind('.') {
        Some(pos) if pos > 0 && pos < original_name.len() - 1 => {
            (&original_name[..pos], &original_name[pos + 1..])
        }
        _ => (original_name, "bin"),
    };

    let extension = if extension.len() <= 10 && extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        extension.to_ascii_lowercase()
    } else {
        "bin".to_string()
    };

    let stem = crate::slug::slugify(stem);
    let stem = if stem.is_empty() { "image" } else { &stem };

    format!(
        "{IMAGE_UPLOAD_DIR}/{stem}_{}.{extension}",
        uuid::Uuid::new_v4().simple()
    )
}
