//! File-backed catalog resources.
//!
//! Each resource is a markdown file with YAML frontmatter at
//! `<root>/<kind>/<id>.md`. `ResourceStore` provides write/read/list/remove
//! for one kind; `Catalog` binds a root and hands out stores.

pub mod catalog;
pub mod config;
pub mod error;
pub mod file_ops;
pub mod frontmatter;
pub mod kind;
pub mod resource;
pub mod resources;
pub mod store;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use frontmatter::{parse_frontmatter, write_with_frontmatter, FrontmatterError};
pub use kind::ResourceKind;
pub use resource::{validate_id, CatalogResource, Resource};
pub use resources::{Document, Team, User};
pub use store::{ResourceStore, StoredResource, WriteOptions};
