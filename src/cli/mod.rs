//! CLI interface for reqdoc

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "reqdoc")]
#[command(version)]
#[command(about = "Terminal client for the requirements document service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new reqdoc.toml configuration file
    Init,

    /// Log in and store the session token
    Login {
        /// Email to log in with
        #[arg(short, long)]
        email: String,
    },

    /// Create a new account
    Register {
        /// Username for the new account
        #[arg(short, long)]
        username: String,

        /// Email for the new account
        #[arg(short, long)]
        email: String,
    },

    /// Clear the stored session
    Logout,

    /// Show the currently logged-in user
    Whoami,

    /// List requirements you participate in
    List {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show a single requirement
    Show {
        /// Requirement id
        id: String,
    },

    /// Create a new requirement
    Create {
        /// Requirement title
        #[arg(short, long)]
        title: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Invite users to a requirement by email
    Invite {
        /// Requirement id
        id: String,

        /// Email of a user to invite (repeatable)
        #[arg(short, long = "email", required = true)]
        emails: Vec<String>,
    },

    /// List the participants of a requirement
    Participants {
        /// Requirement id
        id: String,
    },

    /// Generate a new document version for a requirement
    Generate {
        /// Requirement id
        id: String,
    },

    /// Export the latest document as PDF
    Export {
        /// Requirement id
        id: String,

        /// Output file (defaults to <id>.pdf)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// List generated document versions for a requirement
    Versions {
        /// Requirement id
        id: String,
    },

    /// Print a specific document version
    Doc {
        /// Requirement id
        id: String,

        /// Document version number
        version: u32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
