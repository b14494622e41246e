//! Repository layer for database operations.

mod asset;
mod client;
mod gallery;
mod parent;
mod project;
mod project_sample;
mod project_type;
mod tag;

pub use asset::AssetRepository;
pub use client::ClientRepository;
pub use gallery::GalleryRepository;
pub use parent::ParentRepository;
pub use project::ProjectRepository;
pub use project_sample::ProjectSampleRepository;
pub use project_type::ProjectTypeRepository;
pub use tag::TagRepository;

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, Condition};

/// Default number of autocomplete suggestions.
pub const AUTOCOMPLETE_LIMIT: u64 = 20;

/// Lowercased `LIKE` substring pattern with the escape character and
/// wildcards in `term` taken literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Autocomplete condition: exact ID match or case-insensitive name substring.
fn autocomplete_condition<C: ColumnTrait>(id_col: C, name_col: C, term: &str) -> Condition {
    let term = term.trim();
    let pattern = like_pattern(term);

    let name_lower = Func::lower(Expr::col((name_col.entity_name(), name_col)));
    let mut condition = Condition::any().add(Expr::expr(name_lower).like(pattern));
    if let Ok(id) = term.parse::<i32>() {
        condition = condition.add(id_col.eq(id));
    }
    condition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ProjectSample, project_sample};
    use sea_orm::{DatabaseBackend, EntityTrait, QueryFilter, QueryTrait};

    fn autocomplete_sql(term: &str) -> String {
        ProjectSample::find()
            .filter(autocomplete_condition(
                project_sample::Column::Id,
                project_sample::Column::Name,
                term,
            ))
            .build(DatabaseBackend::Postgres)
            .to_string()
    }

    #[test]
    fn test_autocomplete_numeric_term_matches_id_or_name() {
        let sql = autocomplete_sql(" 12 ");

        assert!(sql.contains(r#"LOWER("project_sample"."name") LIKE '%12%'"#));
        assert!(sql.contains(r#""project_sample"."id" = 12"#));
        assert!(sql.contains(" OR "));
    }

    #[test]
    fn test_autocomplete_text_term_matches_name_only() {
        let sql = autocomplete_sql("HomePage");

        assert!(sql.contains(r#"LOWER("project_sample"."name") LIKE '%homepage%'"#));
        assert!(!sql.contains(r#""project_sample"."id" ="#));
    }

    #[test]
    fn test_like_pattern_escapes() {
        assert_eq!(like_pattern("Ink"), "%ink%");
        assert_eq!(like_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(like_pattern(r"a\"), r"%a\\%");
        assert_eq!(like_pattern(r"\%"), r"%\\\%%");
    }
}
