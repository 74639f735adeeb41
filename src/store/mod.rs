pub mod disk;
pub mod memory;

use crate::core::cache::KeyValueSlot;
use crate::core::config::AppConfig;
use std::sync::Arc;
use tracing::warn;

/// Opens the durable slot under the app data directory, falling back to a
/// process-local slot when the keyspace cannot be opened. The rate cache is
/// an optimization, so a broken data directory must never stop the app.
pub fn open_default_slot(config: &AppConfig) -> Arc<dyn KeyValueSlot> {
    let opened = config
        .default_data_path()
        .and_then(|path| disk::FjallSlot::open(&path.join("cache")));

    match opened {
        Ok(slot) => Arc::new(slot),
        Err(e) => {
            warn!("Falling back to in-memory rate cache: {e}");
            Arc::new(memory::MemorySlot::new())
        }
    }
}
