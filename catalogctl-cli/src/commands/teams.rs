//! `catalogctl teams` - manage teams

use anyhow::Result;
use catalogctl_core::{Catalog, Team};
use clap::{Parser, Subcommand};

use super::{MarkdownArgs, Output};

#[derive(Parser, Debug)]
pub struct TeamsArgs {
    #[command(subcommand)]
    pub command: TeamsCommands,
}

#[derive(Subcommand, Debug)]
pub enum TeamsCommands {
    /// Show one team
    Get {
        /// Team id
        id: String,
    },
    /// List teams, most recently written first
    List,
    /// Create a team (or replace one with --override)
    Write(WriteTeamArgs),
    /// Delete a team
    Rm {
        /// Team id
        id: String,
    },
}

#[derive(Parser, Debug)]
pub struct WriteTeamArgs {
    /// Team id (also the file name)
    #[arg(long)]
    pub id: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    #[command(flatten)]
    pub markdown: MarkdownArgs,

    /// One-line description
    #[arg(long)]
    pub summary: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub slack_direct_message_url: Option<String>,

    #[arg(long)]
    pub ms_teams_direct_message_url: Option<String>,

    /// Member user id (repeatable)
    #[arg(long = "member")]
    pub members: Vec<String>,

    /// Hide the team from generated catalog pages
    #[arg(long)]
    pub hidden: bool,

    /// Replace the team if it already exists
    #[arg(long = "override")]
    pub override_existing: bool,
}

impl WriteTeamArgs {
    fn into_team(self) -> Result<(Team, bool)> {
        let markdown = self.markdown.read()?;
        let team = Team {
            summary: self.summary,
            email: self.email,
            slack_direct_message_url: self.slack_direct_message_url,
            ms_teams_direct_message_url: self.ms_teams_direct_message_url,
            hidden: self.hidden.then_some(true),
            members: self.members,
            ..Team::new(self.id, self.name, markdown)
        };
        Ok((team, self.override_existing))
    }
}

pub fn run(catalog: &Catalog, args: TeamsArgs, output: Output) -> Result<()> {
    let store = catalog.teams();

    match args.command {
        TeamsCommands::Get { id } => super::get(&store, &id, output, print_team),
        TeamsCommands::List => super::list(&store, output, |entry| {
            let team = &entry.resource;
            println!(
                "{:<32} {:<32} {:>3} members  {}",
                team.id,
                team.name,
                team.members.len(),
                entry.modified.format("%Y-%m-%d %H:%M:%S")
            );
        }),
        TeamsCommands::Write(write_args) => {
            let (team, override_existing) = write_args.into_team()?;
            super::write(&store, &team, override_existing, output)
        }
        TeamsCommands::Rm { id } => super::remove(&store, &id, output),
    }
}

fn print_team(team: &Team) {
    println!("id:      {}", team.id);
    println!("name:    {}", team.name);
    if let Some(summary) = &team.summary {
        println!("summary: {summary}");
    }
    if let Some(email) = &team.email {
        println!("email:   {email}");
    }
    if !team.members.is_empty() {
        println!("members: {}", team.members.join(", "));
    }
    if !team.markdown.is_empty() {
        println!("\n{}", team.markdown);
    }
}
