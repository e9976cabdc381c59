//! Output formatting for the CLI
//!
//! Handlers never print directly; they go through [`OutputFormatter`] so
//! `--json` and `--no-color` behave uniformly across commands.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats command output for humans or machines
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter from the global CLI flags
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON output was requested
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message (suppressed in JSON mode)
    pub fn success(&self, message: &str) {
        if self.json {
            return;
        }
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    /// Print an informational message (suppressed in JSON mode)
    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Print an error message to stderr
    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("Error: {message}");
        } else {
            eprintln!("{} {message}", "Error:".red().bold());
        }
    }

    /// Print a value as pretty JSON
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
