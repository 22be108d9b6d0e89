//! Record types bundled with the catalog
//!
//! `User` and `Team` have typed schemas; `Document` carries any frontmatter
//! and works with every other kind (domains, services, events, ...).

pub mod document;
pub mod team;
pub mod user;

pub use document::Document;
pub use team::Team;
pub use user::User;
