//! Shared plumbing for command handlers

use crate::config::Config;
use crate::error::Result;
use crate::service::TicketService;
use crate::storage::{TicketStore, shared_store};
use std::future::Future;
use std::sync::Arc;

/// Common context for handler operations
///
/// Loads configuration, resolves the storage backend, and owns the tokio
/// runtime the sync CLI drives async store calls with.
pub struct HandlerContext {
    pub config: Config,
    pub service: TicketService,
    runtime: tokio::runtime::Runtime,
}

impl HandlerContext {
    /// Create a new handler context from configuration
    pub fn new() -> Result<Self> {
        let config = Config::load_or_default();
        let runtime = tokio::runtime::Runtime::new()?;
        let store = build_store(&config, &runtime)?;
        Ok(Self {
            config,
            service: TicketService::new(store),
            runtime,
        })
    }

    /// Run a future to completion on the context's runtime
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

/// Resolve the ticket store for this process
///
/// A configured database URL selects the database backend (when compiled
/// in); otherwise the file/temp/memory fallback chain decides.
pub fn build_store(
    config: &Config,
    runtime: &tokio::runtime::Runtime,
) -> Result<Arc<dyn TicketStore>> {
    #[cfg(feature = "database")]
    if let Some(url) = &config.database.url {
        let store = runtime.block_on(crate::storage::DatabaseStorage::connect(url))?;
        return Ok(Arc::new(store));
    }

    #[cfg(not(feature = "database"))]
    if config.database.url.is_some() {
        tracing::warn!("built without database support, ignoring database.url");
    }

    let _ = runtime;
    Ok(shared_store(&config.storage))
}
