//! Serve command handler

use crate::api::ApiServer;
use crate::cli::output::OutputFormatter;
use crate::cli::handlers::common::build_store;
use crate::config::Config;
use crate::error::Result;

/// Start the HTTP API server
///
/// Host/port flags override the loaded configuration; everything else
/// (storage backend, database URL) comes from config and environment.
pub fn handle_serve_command(
    host: Option<String>,
    port: Option<u16>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let mut config = Config::load_or_default();
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let store = build_store(&config, &runtime)?;

    formatter.info(&format!(
        "Starting help desk API on http://{}",
        config.bind_addr()
    ));

    let server = ApiServer::new(config, store);
    runtime.block_on(server.serve())
}
