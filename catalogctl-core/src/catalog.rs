//! Catalog handle - binds a root once and hands out stores per kind

use crate::config::CatalogConfig;
use crate::kind::ResourceKind;
use crate::resource::CatalogResource;
use crate::resources::{Document, Team, User};
use crate::store::ResourceStore;

/// An opened catalog directory
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Store for a record type's own kind
    pub fn store<T: CatalogResource>(&self) -> ResourceStore<T> {
        ResourceStore::with_config(&self.config, T::kind())
    }

    pub fn users(&self) -> ResourceStore<User> {
        self.store()
    }

    pub fn teams(&self) -> ResourceStore<Team> {
        self.store()
    }

    /// Schema-less store for any other kind
    pub fn documents(&self, kind: ResourceKind) -> ResourceStore<Document> {
        ResourceStore::with_config(&self.config, kind)
    }
}
