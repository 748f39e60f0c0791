use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};

use super::traits::RecordSlot;

/// In-memory record slot.
///
/// Clones share the same slot, so a test can hand one clone to the store and
/// keep another to inspect the raw stored bytes.
#[derive(Debug, Clone)]
pub struct MemorySlot {
    contents: Arc<Mutex<Option<String>>>,
    available: bool,
}

impl MemorySlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self {
            contents: Arc::new(Mutex::new(None)),
            available: true,
        }
    }

    /// Create a slot that already holds a raw record
    pub fn with_contents(raw: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(raw.into()))),
            available: true,
        }
    }

    /// Create a slot whose every operation fails, like a browser with storage
    /// disabled or over quota
    pub fn unavailable() -> Self {
        Self {
            contents: Arc::new(Mutex::new(None)),
            available: false,
        }
    }

    /// Raw stored record, bypassing availability
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }

    fn ensure_available(&self) -> Result<()> {
        if self.available {
            Ok(())
        } else {
            Err(anyhow!("Storage is unavailable"))
        }
    }
}

impl Default for MemorySlot {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        self.ensure_available()?;
        let guard = self
            .contents
            .lock()
            .map_err(|_| anyhow!("Memory slot lock poisoned"))?;
        Ok(guard.clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        self.ensure_available()?;
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| anyhow!("Memory slot lock poisoned"))?;
        *guard = Some(contents.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        self.ensure_available()?;
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| anyhow!("Memory slot lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}
