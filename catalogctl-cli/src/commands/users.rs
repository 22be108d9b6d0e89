//! `catalogctl users` - manage users

use anyhow::Result;
use catalogctl_core::{Catalog, User};
use clap::{Parser, Subcommand};

use super::{MarkdownArgs, Output};

#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommands,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommands {
    /// Show one user
    Get {
        /// User id
        id: String,
    },
    /// List users, most recently written first
    List,
    /// Create a user (or replace one with --override)
    Write(WriteUserArgs),
    /// Delete a user
    Rm {
        /// User id
        id: String,
    },
}

#[derive(Parser, Debug)]
pub struct WriteUserArgs {
    /// User id (also the file name)
    #[arg(long)]
    pub id: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    #[command(flatten)]
    pub markdown: MarkdownArgs,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub avatar_url: Option<String>,

    #[arg(long)]
    pub slack_direct_message_url: Option<String>,

    #[arg(long)]
    pub ms_teams_direct_message_url: Option<String>,

    /// Hide the user from generated catalog pages
    #[arg(long)]
    pub hidden: bool,

    /// Replace the user if it already exists
    #[arg(long = "override")]
    pub override_existing: bool,
}

impl WriteUserArgs {
    fn into_user(self) -> Result<(User, bool)> {
        let markdown = self.markdown.read()?;
        let user = User {
            avatar_url: self.avatar_url,
            role: self.role,
            email: self.email,
            slack_direct_message_url: self.slack_direct_message_url,
            ms_teams_direct_message_url: self.ms_teams_direct_message_url,
            hidden: self.hidden.then_some(true),
            ..User::new(self.id, self.name, markdown)
        };
        Ok((user, self.override_existing))
    }
}

pub fn run(catalog: &Catalog, args: UsersArgs, output: Output) -> Result<()> {
    let store = catalog.users();

    match args.command {
        UsersCommands::Get { id } => super::get(&store, &id, output, print_user),
        UsersCommands::List => super::list(&store, output, |entry| {
            let user = &entry.resource;
            println!(
                "{:<32} {:<32} {}",
                user.id,
                user.name,
                entry.modified.format("%Y-%m-%d %H:%M:%S")
            );
        }),
        UsersCommands::Write(write_args) => {
            let (user, override_existing) = write_args.into_user()?;
            super::write(&store, &user, override_existing, output)
        }
        UsersCommands::Rm { id } => super::remove(&store, &id, output),
    }
}

fn print_user(user: &User) {
    println!("id:    {}", user.id);
    println!("name:  {}", user.name);
    let optional = [
        ("role", &user.role),
        ("email", &user.email),
        ("avatar", &user.avatar_url),
        ("slack", &user.slack_direct_message_url),
        ("teams", &user.ms_teams_direct_message_url),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            println!("{:<6} {}", format!("{label}:"), value);
        }
    }
    if user.hidden == Some(true) {
        println!("hidden: true");
    }
    if !user.markdown.is_empty() {
        println!("\n{}", user.markdown);
    }
}
