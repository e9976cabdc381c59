//! Command-line interface
//!
//! The binary is an operational front end to the same service the HTTP API
//! exposes: start the server, inspect the catalog, and create or look up
//! tickets from a shell.

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};

/// IT help desk ticketing service
#[derive(Parser)]
#[command(name = "helpdesk", version, about)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    #[cfg(feature = "api")]
    Serve {
        /// Override the configured bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured bind port
        #[arg(long)]
        port: Option<u16>,
    },

    /// List tickets, most recent first
    List {
        /// Show at most this many tickets
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the supported issue catalog
    Issues,

    /// Create a ticket
    Create {
        /// Requester name
        #[arg(long)]
        name: String,

        /// Requester email
        #[arg(long)]
        email: String,

        /// Requester phone number
        #[arg(long)]
        phone: String,

        /// Requester address
        #[arg(long)]
        address: String,

        /// Free-text issue description
        #[arg(long)]
        issue: String,
    },

    /// Look up a ticket by name, email, and confirmation number
    Lookup {
        /// Requester name
        #[arg(long)]
        name: String,

        /// Requester email
        #[arg(long)]
        email: String,

        /// Five-digit confirmation number
        #[arg(long)]
        confirmation_number: u32,
    },
}
