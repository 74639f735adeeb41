use crate::core::cache::{KeyValueSlot, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory slot, used in tests and as the fallback when the durable store
/// is unavailable. Contents vanish with the process.
pub struct MemorySlot {
    inner: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemorySlot {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueSlot for MemorySlot {
    async fn get(&self, key: &str) -> Option<String> {
        let slots = self.inner.lock().await;
        slots.get(key).cloned()
    }

    async fn put(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut slots = self.inner.lock().await;
        slots.insert(key.to_string(), value);
        debug!("MemorySlot PUT for key: {key}");
        Ok(())
    }

    async fn remove(&self, key: &str) {
        let mut slots = self.inner.lock().await;
        slots.remove(key);
        debug!("MemorySlot REMOVE for key: {key}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_slot_get_put() {
        let slot = MemorySlot::new();

        assert!(slot.get("key1").await.is_none());

        slot.put("key1", "value1".to_string()).await.unwrap();
        assert_eq!(slot.get("key1").await.as_deref(), Some("value1"));

        assert!(slot.get("key2").await.is_none());
    }

    #[tokio::test]
    async fn test_memory_slot_overwrite() {
        let slot = MemorySlot::new();

        slot.put("key1", "old".to_string()).await.unwrap();
        slot.put("key1", "new".to_string()).await.unwrap();
        assert_eq!(slot.get("key1").await.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_memory_slot_remove() {
        let slot = MemorySlot::new();

        slot.put("key1", "value1".to_string()).await.unwrap();
        slot.remove("key1").await;
        assert!(slot.get("key1").await.is_none());

        // Removing an absent key is a no-op.
        slot.remove("key1").await;
    }
}
