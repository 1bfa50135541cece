//! Command-line definition.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "havenctl")]
#[command(about = "Haven dashboard - library, anonymous chat and schedules", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.config/haven/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the full normalized response as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List article categories
    Categories,

    /// List articles
    Articles {
        /// Only articles in this category id
        #[arg(long)]
        category: Option<String>,
    },

    /// Categories and articles together
    Library {
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one article
    Article { id: String },

    /// Delete an article
    DeleteArticle { id: String },

    /// List chat groups
    Groups,

    /// Join a chat group under an alias
    Join {
        group: String,
        #[arg(long)]
        alias: String,
    },

    /// Leave a chat group
    Leave { group: String },

    /// Show messages in a group
    Messages {
        group: String,
        /// Only messages after this RFC 3339 time
        #[arg(long)]
        since: Option<DateTime<Utc>>,
    },

    /// Post a message to a group
    Send {
        group: String,
        #[arg(long)]
        alias: String,
        #[arg(long)]
        body: String,
    },

    /// Show a therapist's weekly schedule
    Schedule { therapist: String },
}
