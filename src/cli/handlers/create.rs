//! Create command handler

use crate::cli::handlers::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::error::Result;
use crate::service::TicketSubmission;

/// Parameters for creating a ticket from the command line
pub struct CreateParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub issue: String,
}

/// Create a ticket
///
/// The issue text goes through the same classifier as API submissions; an
/// unsupported description fails with the catalog enumeration before
/// anything is written.
pub fn handle_create_command(params: CreateParams, formatter: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::new()?;
    let created = context.block_on(context.service.create(TicketSubmission {
        name: params.name,
        email: params.email,
        phone: params.phone,
        address: params.address,
        issue_description: params.issue,
    }))?;

    if formatter.is_json() {
        return formatter.json(&created);
    }

    formatter.success(&format!(
        "Created ticket #{} for {}: {} (${})",
        created.ticket_id, created.email, created.issue, created.price
    ));
    formatter.info(&format!(
        "Confirmation number: {}",
        created.confirmation_number
    ));
    Ok(())
}
