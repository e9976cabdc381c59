//! Issues command handler

use crate::cli::output::OutputFormatter;
use crate::core::issue::ISSUE_CATALOG;
use crate::error::Result;

/// Print the supported issue catalog
pub fn handle_issues_command(formatter: &OutputFormatter) -> Result<()> {
    if formatter.is_json() {
        return formatter.json(&ISSUE_CATALOG);
    }

    formatter.info("Supported issues:");
    for issue in &ISSUE_CATALOG {
        formatter.info(&format!(
            "  {:<12} {} (${}) - {}",
            issue.category.key(),
            issue.name,
            issue.price,
            issue.description,
        ));
    }
    Ok(())
}
