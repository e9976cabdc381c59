//! List command handler

use crate::cli::handlers::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::error::Result;

/// List tickets, most recent first
pub fn handle_list_command(limit: Option<usize>, formatter: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::new()?;
    let mut tickets = context.block_on(context.service.list())?;
    if let Some(limit) = limit {
        tickets.truncate(limit);
    }

    if formatter.is_json() {
        return formatter.json(&tickets);
    }

    if tickets.is_empty() {
        formatter.info("No tickets yet");
        return Ok(());
    }

    for ticket in &tickets {
        formatter.info(&format!(
            "#{} [{}] {} <{}> {} (${}) created {}",
            ticket.id,
            ticket.confirmation_number,
            ticket.name,
            ticket.email,
            ticket.issue,
            ticket.price,
            ticket.created_at.format("%Y-%m-%d %H:%M"),
        ));
    }
    formatter.success(&format!("{} ticket(s)", tickets.len()));
    Ok(())
}
