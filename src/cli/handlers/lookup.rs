//! Lookup command handler

use crate::cli::handlers::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::error::Result;

/// Look up a ticket by its identity triple
pub fn handle_lookup_command(
    name: &str,
    email: &str,
    confirmation_number: u32,
    formatter: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::new()?;
    let ticket = context.block_on(context.service.lookup(name, email, confirmation_number))?;

    if formatter.is_json() {
        return formatter.json(&ticket);
    }

    formatter.success(&format!(
        "Found ticket #{}: {} (${})",
        ticket.id, ticket.issue, ticket.price
    ));
    formatter.info(&format!("  Name:    {}", ticket.name));
    formatter.info(&format!("  Email:   {}", ticket.email));
    formatter.info(&format!("  Phone:   {}", ticket.phone));
    formatter.info(&format!("  Address: {}", ticket.address));
    formatter.info(&format!(
        "  Created: {}",
        ticket.created_at.format("%Y-%m-%d %H:%M")
    ));
    Ok(())
}
