//! Portfolio content service
//!
//! A single markdown file (front matter + `# ` sections) is the source of
//! truth for a personal portfolio site. This crate parses it, serves it over
//! HTTP for editing, and generates a static module for the frontend.
//!
//! - `document/`: front matter and section parsing, rendering back to text
//! - `items/`: Education, Experience, Projects and About sub-item parsers
//! - `store`: serialized read-modify-write access to the content file
//! - `sync`: build-time code generation
//! - `mailer/`: contact form delivery
//! - `api_server`: Axum routes

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod items;
pub mod persist;
pub mod sync;

#[cfg(feature = "api")]
pub mod store;
#[cfg(feature = "api")]
pub mod mailer;
#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::ServerConfig;
pub use diagnostics::{Diagnostics, SkipReason, SkippedLine};
pub use document::{Config, ConfigUpdate, Document, Sections};
pub use error::{ContentError, Result};
pub use items::{AboutContent, EducationItem, ExperienceItem, ProjectItem};
pub use sync::{PortfolioData, SyncOptions, SyncReport};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
#[cfg(feature = "api")]
pub use store::ContentStore;
