use crate::domain::model::LinkType;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "linkdock")]
#[command(about = "Command-line companion for a self-hosted bookmark manager", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Verbosity requested by the active subcommand, 0 when it has none.
    pub fn verbosity(&self) -> u8 {
        match &self.command {
            Commands::Auth(_) => 0,
            Commands::Links(command) => match command {
                LinksCommand::ListLinks { verbose } => *verbose,
                LinksCommand::GetLink { verbose, .. } => *verbose,
                LinksCommand::AddLink { verbose, .. } => *verbose,
            },
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the stored API credentials
    #[command(subcommand)]
    Auth(AuthCommand),
    /// Inspect and create links
    #[command(subcommand)]
    Links(LinksCommand),
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Store the API access token
    SetToken { token: String },
    /// Store the API user name
    SetUser { user: String },
    /// Store the API host, e.g. https://links.example.com
    SetHost { host: String },
}

#[derive(Debug, Subcommand)]
pub enum LinksCommand {
    /// List all saved links
    ListLinks {
        /// Increase output detail (repeatable)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },
    /// Show a single link by id
    GetLink {
        id: i64,

        /// Increase output detail (repeatable)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },
    /// Save a new link
    AddLink {
        url: String,

        /// Link name
        #[arg(short, long)]
        name: Option<String>,

        /// Link description
        #[arg(short, long)]
        description: Option<String>,

        /// Collection id to file the link under
        #[arg(short, long)]
        collection: Option<i64>,

        /// Link type
        #[arg(long, value_name = "pdf|image|url")]
        link_type: Option<LinkType>,

        /// Tag id to attach (repeatable)
        #[arg(short, long = "tag", value_name = "ID")]
        tags: Vec<i64>,

        /// Increase output detail (repeatable)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },
}
