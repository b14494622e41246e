//! Slug generation for fields prepopulated from a name.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Characters that survive slugification: word characters, whitespace and hyphens.
static STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("slug strip pattern is valid"));

/// Runs of hyphens and whitespace collapse into a single hyphen.
static DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("slug dash pattern is valid"));

/// A well-formed slug: ASCII letters, digits, underscores and hyphens.
pub static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("slug pattern is valid"));

/// Convert a display name into a URL slug.
///
/// Accented letters fold to their ASCII base (`é` becomes `e`) through NFKD
/// decomposition; characters with no ASCII form are dropped. The rest is
/// lowercased, punctuation is removed and whitespace/hyphen runs become a
/// single `-`. Leading and trailing hyphens and underscores are trimmed.
#[must_use]
pub fn slugify(name: &str) -> String {
    let ascii: String = name.nfkd().filter(char::is_ascii).collect();
    let lower = ascii.to_lowercase();
    let stripped = STRIP_RE.replace_all(&lower, "");
    let dashed = DASH_RE.replace_all(stripped.trim(), "-");
    dashed.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Whether a string is a well-formed slug.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("My BG Design"), "my-bg-design");
        assert_eq!(slugify("Web Development"), "web-development");
    }

    #[test]
    fn test_slugify_punctuation_and_spacing() {
        assert_eq!(slugify("  Hello,   World!  "), "hello-world");
        assert_eq!(slugify("Rock & Roll -- Live"), "rock-roll-live");
        assert_eq!(slugify("snake_case_name"), "snake_case_name");
    }

    #[test]
    fn test_slugify_folds_accents() {
        assert_eq!(slugify("Café Menu"), "cafe-menu");
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("ﬁnal Ｄraft"), "final-draft");
    }

    #[test]
    fn test_slugify_drops_unmapped() {
        assert_eq!(slugify("日本"), "");
        assert_eq!(slugify("Tokyo 東京"), "tokyo");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("-_leading and trailing_-"), "leading-and-trailing");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("my-bg-design"));
        assert!(is_valid_slug("sample_2"));
        assert!(!is_valid_slug("has space"));
        assert!(!is_valid_slug(""));
    }
}
