use std::collections::HashMap;

use crate::errors::CoreError;

/// The persistence capability the dashboard is handed.
///
/// Mirrors the browser local-storage surface the original app wrote to:
/// opaque bytes under fixed string keys, read-then-write, single writer
/// assumed. Injecting it keeps the portfolio logic testable against an
/// in-memory fake.
pub trait KeyValueStore: Send {
    /// Read the bytes stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError>;

    /// Replace the bytes stored under `key`.
    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), CoreError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key (useful for seeding corrupt/valid fixtures).
    pub fn with_entry(mut self, key: &str, bytes: &[u8]) -> Self {
        self.entries.insert(key.to_string(), bytes.to_vec());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
