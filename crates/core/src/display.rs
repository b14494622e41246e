//! Display strings derived from record state.
//!
//! These are pure formatters; the services load the records and call them.

/// Project full name: `"{client} {project}"`.
#[must_use]
pub fn full_name(client_name: &str, project_name: &str) -> String {
    format!("{client_name} {project_name}")
}

/// Sample path: `"{type} > {project} > {sample}"`.
#[must_use]
pub fn full_path(type_name: &str, project_name: &str, sample_name: &str) -> String {
    format!("{type_name} > {project_name} > {sample_name}")
}

/// Label shown for a sample in autocomplete results: `"{project} > {sample}"`.
#[must_use]
pub fn related_label(project_name: &str, sample_name: &str) -> String {
    format!("{project_name} > {sample_name}")
}

/// Join tag names with `", "`, keeping the given order.
pub fn join_tag_names<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, name) in names.into_iter().enumerate() {
        if i > 0 {
            joined.push_str(", ");
        }
        joined.push_str(name.as_ref());
    }
    joined
}

/// Admin rendering of a boolean flag.
#[must_use]
pub const fn bool_label(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
