//! Backend selection and the fallback chain
//!
//! The store backend is resolved lazily at first use and then cached for
//! the remainder of the process: a configured (or default) data directory,
//! then a platform temp directory, then a process-local in-memory store.
//! Writability is probed by creating the directory and writing a probe
//! file; the chain is never re-evaluated per call.

use crate::config::StorageConfig;
use crate::storage::{JsonFileStorage, MemoryStorage, TicketStore};
use once_cell::sync::OnceCell;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Subdirectory used for the temp-dir fallback tier
const TEMP_SUBDIR: &str = "helpdesk";

/// Process-wide cache of the selected backend
///
/// Single-assignment: the first caller resolves the chain, everyone after
/// gets the same store.
static SELECTED_STORE: OnceCell<Arc<dyn TicketStore>> = OnceCell::new();

/// The process-wide ticket store, resolving the fallback chain on first use
pub fn shared_store(config: &StorageConfig) -> Arc<dyn TicketStore> {
    SELECTED_STORE
        .get_or_init(|| select_backend(config))
        .clone()
}

/// Resolve the fallback chain to a concrete backend
///
/// Unlike [`shared_store`] this performs a fresh probe on every call; it is
/// the building block the cache wraps.
pub fn select_backend(config: &StorageConfig) -> Arc<dyn TicketStore> {
    let data_dir = config.resolve_data_dir();
    if dir_is_writable(&data_dir) {
        info!(path = %data_dir.display(), "using file-backed ticket store");
        return Arc::new(JsonFileStorage::new(data_dir));
    }

    let temp_dir = std::env::temp_dir().join(TEMP_SUBDIR);
    if dir_is_writable(&temp_dir) {
        warn!(
            configured = %data_dir.display(),
            fallback = %temp_dir.display(),
            "data directory is not writable, falling back to temp directory"
        );
        return Arc::new(JsonFileStorage::new(temp_dir));
    }

    warn!("no writable directory available, tickets will not survive restart");
    Arc::new(MemoryStorage::new())
}

/// Probe whether a directory exists (or can be created) and accepts writes
fn dir_is_writable(path: &Path) -> bool {
    if fs::create_dir_all(path).is_err() {
        return false;
    }
    let probe = path.join(".write-probe");
    match fs::write(&probe, b"probe") {
        Ok(()) => {
            let _ = fs::remove_file(&probe);
            true
        },
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_new_ticket;
    use tempfile::TempDir;

    fn config_with_dir(path: &Path) -> StorageConfig {
        StorageConfig {
            data_dir: Some(path.to_path_buf()),
        }
    }

    #[tokio::test]
    async fn test_selects_configured_directory_when_writable() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        let store = select_backend(&config_with_dir(&data_dir));

        store
            .create(sample_new_ticket("Jane Doe", "jane@example.com", 12345))
            .await
            .unwrap();
        assert!(data_dir.join("tickets.json").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_falls_back_when_directory_is_read_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let locked = temp_dir.path().join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // Permission bits don't stop root; nothing to exercise there.
        if dir_is_writable(&locked.join("data")) {
            return;
        }

        let store = select_backend(&config_with_dir(&locked.join("data")));

        // The chain moved past the locked directory; writes still succeed
        // somewhere (temp dir tier or, failing that, memory).
        store
            .create(sample_new_ticket("Jane Doe", "jane@example.com", 12345))
            .await
            .unwrap();
        assert!(!locked.join("data").join("tickets.json").exists());

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_dir_is_writable_probe_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("probe-me");
        assert!(dir_is_writable(&dir));
        assert!(!dir.join(".write-probe").exists());
    }

    #[test]
    fn test_shared_store_is_cached() {
        let temp_dir = TempDir::new().unwrap();
        let first = shared_store(&config_with_dir(&temp_dir.path().join("a")));
        // A different config afterwards still yields the cached store.
        let second = shared_store(&config_with_dir(&temp_dir.path().join("b")));
        assert!(Arc::ptr_eq(&first, &second));
    }
}
