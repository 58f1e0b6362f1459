use std::collections::HashMap;
use std::sync::Mutex;

use crate::app::{OsonewsError, Result};
use crate::store::PersistenceClient;

/// Process-local store. Nothing outlives the process.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PersistenceClient for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|e| OsonewsError::Other(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| OsonewsError::Other(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
