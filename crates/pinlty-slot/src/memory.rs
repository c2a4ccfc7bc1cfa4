//! In-memory slot store for testing.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{SlotError, SlotStore, validate_key};

/// In-memory [`SlotStore`].
///
/// Use the builder methods to seed slots with test data and [`Self::get`] to
/// inspect what was written.
///
/// # Example
///
/// ```ignore
/// use pinlty_slot::{MemorySlotStore, SlotStore};
///
/// let slots = MemorySlotStore::new().with_slot("pinltyDocs", "{}");
/// assert_eq!(slots.read("pinltyDocs").unwrap(), Some("{}".to_owned()));
/// ```
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RwLock<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemorySlotStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with a value.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_slot(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots
            .write()
            .unwrap()
            .insert(key.into(), value.into());
        self
    }

    /// Current value of a slot, bypassing key validation.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.read().unwrap().get(key).cloned()
    }

    /// Number of successful writes since creation.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        validate_key(key)?;
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SlotError> {
        validate_key(key)?;
        self.slots
            .write()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
