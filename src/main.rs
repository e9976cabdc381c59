//! helpdesk - IT help desk ticketing service
//!
//! This is the main entry point for the helpdesk CLI. It parses
//! command-line arguments and dispatches to the appropriate command
//! handlers; the `serve` command starts the HTTP API.

use clap::Parser;
use helpdesk::cli::{Cli, Commands, OutputFormatter, handlers};
use helpdesk::error::Result;
use std::process;

/// Main entry point for the helpdesk CLI
///
/// Parses command-line arguments and executes the requested command.
/// Handles errors gracefully and provides helpful error messages to users.
fn main() {
    let cli = Cli::parse();

    // Configure output formatter based on flags
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    // Execute the command and handle errors
    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    // Set up logging; verbose mode lowers the filter to debug. Logs go to
    // stderr so --json output stays parseable.
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    dispatch_command(cli.command, formatter)
}

fn dispatch_command(command: Commands, formatter: &OutputFormatter) -> Result<()> {
    match command {
        #[cfg(feature = "api")]
        Commands::Serve { host, port } => handlers::handle_serve_command(host, port, formatter),
        Commands::List { limit } => handlers::handle_list_command(limit, formatter),
        Commands::Issues => handlers::handle_issues_command(formatter),
        Commands::Create {
            name,
            email,
            phone,
            address,
            issue,
        } => handlers::handle_create_command(
            handlers::CreateParams {
                name,
                email,
                phone,
                address,
                issue,
            },
            formatter,
        ),
        Commands::Lookup {
            name,
            email,
            confirmation_number,
        } => handlers::handle_lookup_command(&name, &email, confirmation_number, formatter),
    }
}

/// Handle errors and display them to the user
///
/// Shows the user-facing message, any suggestions, and (in JSON mode) a
/// structured error object.
fn handle_error(error: &helpdesk::error::HelpdeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  - {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "success": false,
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }
}
