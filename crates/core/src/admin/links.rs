//! Edit links rendered inside admin inlines.

use std::collections::HashMap;

use thiserror::Error;
use work_projects_common::{AdminConfig, html_escape};

/// App label used when a reverser does not name its own.
pub const DEFAULT_APP_LABEL: &str = "work_projects";

/// Models that get a change route.
const ROUTED_MODELS: &[&str] = &[
    "projecttype",
    "project",
    "projectsample",
    "gallery",
    "asset",
    "tag",
];

/// Failure to turn a route name into a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReverseError {
    /// The route points at a view that is not registered.
    #[error("view does not exist")]
    ViewDoesNotExist,
    /// Path resolution failed.
    #[error("resolver 404")]
    Resolver404,
    /// No route matches the name and arguments.
    #[error("no reverse match")]
    NoReverseMatch,
}

impl ReverseError {
    /// Text shown in place of the link.
    #[must_use]
    pub const fn display_text(&self) -> &'static str {
        match self {
            Self::ViewDoesNotExist => "error: View does not exist.",
            Self::Resolver404 => "URL resolver error: Resolver 404.",
            Self::NoReverseMatch => "URL resolver error: No reverse match.",
        }
    }
}

/// Turns named routes into URLs.
pub trait UrlReverser {
    /// Build the URL for `route` with positional `args`.
    fn reverse(&self, route: &str, args: &[i32]) -> Result<String, ReverseError>;

    /// App label the admin routes are registered under.
    fn app_label(&self) -> &str {
        DEFAULT_APP_LABEL
    }
}

impl<F> UrlReverser for F
where
    F: Fn(&str, &[i32]) -> Result<String, ReverseError>,
{
    fn reverse(&self, route: &str, args: &[i32]) -> Result<String, ReverseError> {
        self(route, args)
    }
}

/// Name of the change route for `model`, e.g. `admin:work_projects_projectsample_change`.
#[must_use]
pub fn change_route(app_label: &str, model: &str) -> String {
    format!("admin:{app_label}_{model}_change")
}

/// Route table for the admin site.
///
/// Patterns hold one `{}` placeholder per positional argument.
#[derive(Debug, Clone)]
pub struct AdminRouter {
    app_label: String,
    routes: HashMap<String, String>,
}

impl AdminRouter {
    /// Router with a change route for every admin model.
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        let prefix = config.url_prefix.trim_end_matches('/');
        let app_label = config.app_label.clone();

        let routes = ROUTED_MODELS
            .iter()
            .map(|model| {
                (
                    change_route(&app_label, model),
                    format!("{prefix}/{app_label}/{model}/{{}}/change/"),
                )
            })
            .collect();

        Self { app_label, routes }
    }

    /// Register an extra route.
    pub fn register(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.routes.insert(name.into(), pattern.into());
    }
}

impl UrlReverser for AdminRouter {
    fn reverse(&self, route: &str, args: &[i32]) -> Result<String, ReverseError> {
        let pattern = self.routes.get(route).ok_or(ReverseError::NoReverseMatch)?;

        let mut parts = pattern.split("{}");
        let mut url = parts.next().unwrap_or_default().to_string();
        let mut args = args.iter();
        for part in parts {
            let arg = args.next().ok_or(ReverseError::NoReverseMatch)?;
            url.push_str(&arg.to_string());
            url.push_str(part);
        }
        if args.next().is_some() {
            return Err(ReverseError::NoReverseMatch);
        }

        Ok(url)
    }

    fn app_label(&self) -> &str {
        &self.app_label
    }
}

/// "Details" link to a sample's own change page, for the sample inline
/// under a project.
///
/// Unsaved samples get an empty string. Reverse failures are rendered as
/// text so the surrounding list still renders.
pub fn changeform_link<R: UrlReverser + ?Sized>(reverser: &R, sample_id: Option<i32>) -> String {
    let Some(id) = sample_id else {
        return String::new();
    };

    let route = change_route(reverser.app_label(), "projectsample");
    match reverser.reverse(&route, &[id]) {
        Ok(url) => format!(r#"<a href="{}" target="_blank">Details</a>"#, html_escape(&url)),
        Err(e) => {
            tracing::warn!(sample_id = id, error = %e, "Could not reverse sample change route");
            e.display_text().to_string()
        }
    }
}
