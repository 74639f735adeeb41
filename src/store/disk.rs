use crate::core::cache::{KeyValueSlot, StorageError};
use anyhow::Result;
use async_trait::async_trait;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle};
use std::path::Path;
use tracing::debug;

/// Durable slot backed by a fjall partition under the app data directory.
/// Survives process restarts, which is what makes the one-hour rate cache
/// useful for a short-lived CLI.
pub struct FjallSlot {
    partition: PartitionHandle,
    // Keeps the keyspace (and its journal) alive as long as the slot.
    _keyspace: Keyspace,
}

impl FjallSlot {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)?;

        let keyspace = fjall::Config::new(path).open()?;
        let partition = keyspace.open_partition("rates", PartitionCreateOptions::default())?;
        Ok(Self {
            partition,
            _keyspace: keyspace,
        })
    }
}

#[async_trait]
impl KeyValueSlot for FjallSlot {
    async fn get(&self, key: &str) -> Option<String> {
        match self.partition.get(key) {
            Ok(Some(bytes)) => String::from_utf8(bytes.to_vec()).ok(),
            Ok(None) => None,
            Err(e) => {
                debug!("FjallSlot get error: {e}");
                None
            }
        }
    }

    async fn put(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.partition
            .insert(key, value.as_bytes())
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        debug!("FjallSlot PUT for key: {key}");
        Ok(())
    }

    async fn remove(&self, key: &str) {
        if let Err(e) = self.partition.remove(key) {
            debug!("FjallSlot remove error: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_fjall_slot_get_put() {
        let dir = tempdir().unwrap();
        let slot = FjallSlot::open(dir.path()).unwrap();

        assert!(slot.get("key1").await.is_none());

        slot.put("key1", "value1".to_string()).await.unwrap();
        assert_eq!(slot.get("key1").await.as_deref(), Some("value1"));

        assert!(slot.get("key2").await.is_none());
    }

    #[tokio::test]
    async fn test_fjall_slot_remove() {
        let dir = tempdir().unwrap();
        let slot = FjallSlot::open(dir.path()).unwrap();

        slot.put("key1", "value1".to_string()).await.unwrap();
        slot.remove("key1").await;
        assert!(slot.get("key1").await.is_none());
    }

    #[tokio::test]
    async fn test_fjall_slot_persists_across_reopen() {
        let dir = tempdir().unwrap();

        {
            let slot = FjallSlot::open(dir.path()).unwrap();
            slot.put("key1", "value1".to_string()).await.unwrap();
        }

        let slot = FjallSlot::open(dir.path()).unwrap();
        assert_eq!(slot.get("key1").await.as_deref(), Some("value1"));
    }
}
