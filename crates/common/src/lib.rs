//! Common utilities and shared types for work-projects.
//!
//! This crate provides foundational components used across all work-projects crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **Slugs**: URL slug generation for prepopulated admin fields
//! - **HTML**: Escaping for markup emitted into admin list rows
//! - **Uploads**: Storage keys for asset images
//!
//! # Example
//!
//! ```no_run
//! use work_projects_common::{AppResult, Config};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     let design = config.portfolio.is_design_type("Background Design");
//!     println!("design related: {design}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod html;
pub mod slug;
pub mod upload;

pub use config::{AdminConfig, Config, DatabaseConfig, PortfolioConfig};
pub use error::{AppError, AppResult};
pub use html::html_escape;
pub use slug::{SLUG_RE, is_valid_slug, slugify};
pub use upload::{IMAGE_UPLOAD_DIR, image_upload_key};
