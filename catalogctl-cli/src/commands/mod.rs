//! Subcommands, one module per resource kind
//!
//! The kind modules own their clap args and rendering; the store calls and
//! output plumbing they share live here.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use catalogctl_core::{Resource, ResourceStore, StoredResource, WriteOptions};
use clap::Args;

pub mod teams;
pub mod users;

/// Output settings shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
}

/// Markdown body source for write commands
#[derive(Args, Debug, Default)]
pub struct MarkdownArgs {
    /// Inline markdown body
    #[arg(long, conflicts_with = "markdown_file")]
    pub markdown: Option<String>,

    /// Read the markdown body from a file (`-` for stdin)
    #[arg(long)]
    pub markdown_file: Option<PathBuf>,
}

impl MarkdownArgs {
    pub fn read(self) -> Result<String> {
        match (self.markdown, self.markdown_file) {
            (Some(text), _) => Ok(text),
            (None, Some(path)) if path.as_os_str() == "-" => {
                let mut body = String::new();
                std::io::stdin()
                    .read_to_string(&mut body)
                    .context("Failed to read markdown from stdin")?;
                Ok(body)
            }
            (None, Some(path)) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read markdown from {}", path.display())),
            (None, None) => Ok(String::new()),
        }
    }
}

pub(crate) fn get<T: Resource>(
    store: &ResourceStore<T>,
    id: &str,
    output: Output,
    render: impl Fn(&T),
) -> Result<()> {
    let label = store.kind().label().to_string();
    let Some(resource) = store
        .read(id)
        .with_context(|| format!("Failed to read {label} {id}"))?
    else {
        bail!("{label} {id} not found");
    };

    if output.json {
        println!("{}", serde_json::to_string_pretty(&resource)?);
    } else {
        render(&resource);
    }
    Ok(())
}

pub(crate) fn list<T: Resource>(
    store: &ResourceStore<T>,
    output: Output,
    render_row: impl Fn(&StoredResource<T>),
) -> Result<()> {
    let stored = store
        .list_stored()
        .with_context(|| format!("Failed to list {}", store.kind()))?;

    if output.json {
        let resources: Vec<&T> = stored.iter().map(|s| &s.resource).collect();
        println!("{}", serde_json::to_string_pretty(&resources)?);
        return Ok(());
    }

    if stored.is_empty() {
        println!("No {} found in {}", store.kind(), store.dir().display());
    }
    for entry in &stored {
        render_row(entry);
    }
    Ok(())
}

pub(crate) fn write<T: Resource>(
    store: &ResourceStore<T>,
    resource: &T,
    override_existing: bool,
    output: Output,
) -> Result<()> {
    store.write(resource, WriteOptions { override_existing })?;

    let id = resource.id();
    if output.json {
        let path = store.path_for(id)?;
        println!(
            "{}",
            serde_json::json!({ "id": id, "path": path.display().to_string() })
        );
    } else {
        println!("Wrote {} {}", store.kind().label(), id);
    }
    Ok(())
}

pub(crate) fn remove<T: Resource>(store: &ResourceStore<T>, id: &str, output: Output) -> Result<()> {
    let label = store.kind().label();
    if !store.remove(id)? {
        bail!("{label} {id} not found");
    }

    if output.json {
        println!("{}", serde_json::json!({ "id": id, "removed": true }));
    } else {
        println!("Removed {label} {id}");
    }
    Ok(())
}
