//! Application configuration.

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Portfolio configuration.
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    /// Admin interface configuration.
    #[serde(default)]
    pub admin: AdminConfig,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Portfolio configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioConfig {
    /// Names of project types that count as design work.
    #[serde(default)]
    pub design_project_types: Vec<String>,
}

impl PortfolioConfig {
    /// Create a portfolio configuration from a list of design type names.
    #[must_use]
    pub fn with_design_types<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            design_project_types: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a project type name is one of the configured design types.
    ///
    /// Matching is exact and case-sensitive.
    #[must_use]
    pub fn is_design_type(&self, type_name: &str) -> bool {
        self.design_project_types.iter().any(|t| t == type_name)
    }
}

/// Admin interface configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Path prefix the admin site is mounted under.
    #[serde(default = "default_admin_prefix")]
    pub url_prefix: String,
    /// Application label used in admin route names.
    #[serde(default = "default_app_label")]
    pub app_label: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            url_prefix: default_admin_prefix(),
            app_label: default_app_label(),
        }
    }
}

const fn default_max_connections() -> u32 {
    10
}

const fn default_min_connections() -> u32 {
    1
}

fn default_admin_prefix() -> String {
    "/admin".to_string()
}

fn default_app_label() -> String {
    "work_projects".to_string()
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `.env` (if present)
    /// 2. `config/default.toml`
    /// 3. `config/{environment}.toml` (based on `WORK_PROJECTS_ENV`)
    /// 4. Environment variables with `WORK_PROJECTS_` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let env =
            std::env::var("WORK_PROJECTS_ENV").unwrap_or_else(|_| "development".to_string());
        tracing::debug!(environment = %env, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("WORK_PROJECTS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("WORK_PROJECTS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
