//! catalogctl CLI - read and write catalog resources
//!
//! Binds a catalog root and forwards to the resource store:
//! - `users`: get, list, write, rm
//! - `teams`: get, list, write, rm

use std::path::PathBuf;

use anyhow::{Context, Result};
use catalogctl_core::{Catalog, CatalogConfig};
use clap::{Parser, Subcommand};
use tracing::debug;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "catalogctl",
    author,
    version,
    about = "Manage catalog resources stored as markdown files with YAML frontmatter"
)]
struct Cli {
    /// Catalog root directory
    #[arg(long, env = "CATALOG_ROOT", global = true)]
    catalog: Option<PathBuf>,

    /// Config file (default: ~/.catalogctl/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// User operations (get, list, write, rm)
    Users(commands::users::UsersArgs),
    /// Team operations (get, list, write, rm)
    Teams(commands::teams::TeamsArgs),
}

fn resolve_config(cli: &Cli) -> Result<CatalogConfig> {
    if let Some(root) = &cli.catalog {
        return Ok(CatalogConfig::with_root(root));
    }

    if let Some(path) = &cli.config {
        return CatalogConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    if let Some(path) = CatalogConfig::default_config_path().filter(|p| p.is_file()) {
        return CatalogConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    Ok(CatalogConfig::from_env())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let config = resolve_config(&cli)?;
    debug!(root = %config.root_dir.display(), "using catalog");
    let catalog = Catalog::new(config);

    let output = commands::Output { json: cli.json };
    match cli.command {
        Commands::Users(args) => commands::users::run(&catalog, args, output),
        Commands::Teams(args) => commands::teams::run(&catalog, args, output),
    }
}
