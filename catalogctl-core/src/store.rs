//! Resource store - one markdown file per resource
//!
//! A `ResourceStore<T>` is bound to a catalog root and a resource kind and
//! maps `<root>/<kind>/<id>.md` documents to records of type `T`.
//!
//! The store does no locking between calls. Two overriding writes of the
//! same id race and the last rename wins; callers that need mutual
//! exclusion serialize above this layer.

use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::file_ops::{self, MarkdownEntry};
use crate::frontmatter::{parse_frontmatter, write_with_frontmatter};
use crate::kind::ResourceKind;
use crate::resource::{from_document, into_document, validate_id, Resource};

/// Options for `ResourceStore::write`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOptions {
    /// Replace an existing resource instead of failing (default: false)
    #[serde(rename = "override", default)]
    pub override_existing: bool,
}

impl WriteOptions {
    pub fn overriding() -> Self {
        Self {
            override_existing: true,
        }
    }
}

/// A listed resource together with where and when it was stored
#[derive(Debug, Clone, PartialEq)]
pub struct StoredResource<T> {
    pub resource: T,
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
}

/// Store for one resource kind under a catalog root
#[derive(Debug, Clone)]
pub struct ResourceStore<T> {
    kind_dir: PathBuf,
    kind: ResourceKind,
    _record: PhantomData<fn() -> T>,
}

impl<T: Resource> ResourceStore<T> {
    /// Bind a store to `<root>/<kind>`. The directory is created on first write.
    pub fn new(root: impl AsRef<Path>, kind: ResourceKind) -> Self {
        Self::with_config(&CatalogConfig::with_root(root.as_ref()), kind)
    }

    pub fn with_config(config: &CatalogConfig, kind: ResourceKind) -> Self {
        Self {
            kind_dir: config.kind_path(&kind),
            kind,
            _record: PhantomData,
        }
    }

    pub fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    /// Directory holding this kind's documents
    pub fn dir(&self) -> &Path {
        &self.kind_dir
    }

    /// File path for `id` (the id is validated)
    pub fn path_for(&self, id: &str) -> Result<PathBuf> {
        validate_id(id)?;
        Ok(self.kind_dir.join(format!("{id}.md")))
    }

    /// Write a resource.
    ///
    /// Without `override_existing` an existing file for the id is an
    /// `AlreadyExists` error and the file is left untouched. With it the file
    /// is replaced wholesale, never merged.
    pub fn write(&self, resource: &T, options: WriteOptions) -> Result<()> {
        let id = resource.id();
        let path = self.path_for(id)?;

        let (metadata, body) = into_document(resource)?;
        let content = write_with_frontmatter(&metadata, &body)
            .map_err(|e| CatalogError::encode(id, e.to_string()))?;

        if options.override_existing {
            file_ops::write_replace(&path, &content)?;
        } else {
            file_ops::write_new(&path, &content).map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => CatalogError::already_exists(id, self.kind.label()),
                _ => CatalogError::from(e),
            })?;
        }

        debug!(
            kind = %self.kind,
            id,
            path = %path.display(),
            override_existing = options.override_existing,
            "wrote resource"
        );
        Ok(())
    }

    /// Read a resource; `None` when no file exists for the id
    pub fn read(&self, id: &str) -> Result<Option<T>> {
        let path = self.path_for(id)?;

        let Some(content) = file_ops::read_optional(&path)? else {
            debug!(kind = %self.kind, id, "resource not found");
            return Ok(None);
        };

        self.decode(&path, id, content).map(Some)
    }

    /// Whether a file exists for the id
    pub fn exists(&self, id: &str) -> Result<bool> {
        Ok(file_ops::is_present(&self.path_for(id)?)?)
    }

    /// All resources of this kind, most recently modified first.
    ///
    /// Equal modification times fall back to id order. Every call rescans
    /// the directory; a malformed file fails the whole listing.
    pub fn list(&self) -> Result<Vec<T>> {
        Ok(self
            .list_stored()?
            .into_iter()
            .map(|stored| stored.resource)
            .collect())
    }

    /// Like `list`, keeping each resource's path and modification time
    pub fn list_stored(&self) -> Result<Vec<StoredResource<T>>> {
        let mut entries = file_ops::list_markdown(&self.kind_dir)?;
        entries.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.stem.cmp(&b.stem)));

        let mut resources = Vec::with_capacity(entries.len());
        for MarkdownEntry {
            path,
            stem,
            modified,
        } in entries
        {
            // removed since the scan
            let Some(content) = file_ops::read_optional(&path)? else {
                continue;
            };
            let resource = self.decode(&path, &stem, content)?;
            resources.push(StoredResource {
                resource,
                path,
                modified: DateTime::<Utc>::from(modified),
            });
        }

        debug!(kind = %self.kind, count = resources.len(), "listed resources");
        Ok(resources)
    }

    /// Delete a resource. Returns `false` (and does nothing) if it was absent.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let path = self.path_for(id)?;
        let removed = file_ops::remove_optional(&path)?;

        debug!(kind = %self.kind, id, removed, "removed resource");
        Ok(removed)
    }

    fn decode(&self, path: &Path, id: &str, content: Vec<u8>) -> Result<T> {
        let content = String::from_utf8(content)
            .map_err(|e| CatalogError::malformed(path, format!("not valid UTF-8: {e}")))?;
        let (metadata, body) =
            parse_frontmatter(&content).map_err(|e| CatalogError::frontmatter(path, e))?;
        from_document(path, id, metadata, body)
    }
}
