//! Persisted key-value slots for Pinlty Docs.
//!
//! A slot is a single named storage location that survives across sessions.
//! The page store keeps its whole tree in one slot and overwrites it on every
//! save. This crate decouples the store from where slots actually live:
//!
//! - [`SlotStore`]: read and overwrite a named slot
//! - [`FileSlotStore`]: one JSON file per slot inside a data directory
//! - [`MemorySlotStore`]: in-memory slots for testing (behind `memory` feature)
//!
//! # Example
//!
//! ```ignore
//! use pinlty_slot::{FileSlotStore, SlotStore};
//!
//! let slots = FileSlotStore::new(".pinlty".into());
//! slots.write("pinltyDocs", r#"{"intro":"<h2>Hi</h2>"}"#)?;
//! assert!(slots.read("pinltyDocs")?.is_some());
//! ```

mod file;
#[cfg(feature = "memory")]
mod memory;

pub use file::FileSlotStore;
#[cfg(feature = "memory")]
pub use memory::MemorySlotStore;

/// A store of named, string-valued slots.
///
/// Writes replace the whole slot. There is no merge or versioning: the last
/// writer wins.
pub trait SlotStore: Send + Sync {
    /// Read the current value of a slot.
    ///
    /// Returns `Ok(None)` if the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, SlotError>;

    /// Overwrite a slot with `value`.
    ///
    /// Readers observe either the previous value or the new one, never a
    /// partial write.
    fn write(&self, key: &str, value: &str) -> Result<(), SlotError>;
}

/// Slot access error.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    /// Key is empty or would escape the slot namespace.
    #[error("Invalid slot key: {0:?}")]
    InvalidKey(String),
    /// I/O error while reading or writing a slot.
    #[error("Slot '{key}' I/O error: {source}")]
    Io {
        /// Slot key.
        key: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl SlotError {
    pub(crate) fn io(key: &str, source: std::io::Error) -> Self {
        Self::Io {
            key: key.to_owned(),
            source,
        }
    }
}

/// Check that `key` can name a slot.
///
/// Keys must be non-empty, must not contain path separators and must not be
/// `.` or `..`.
///
/// # Errors
///
/// Returns [`SlotError::InvalidKey`] if the key is rejected.
pub fn validate_key(key: &str) -> Result<(), SlotError> {
    if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
        return Err(SlotError::InvalidKey(key.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_plain_names() {
        for key in &["pinltyDocs", "docs-backup", "v2.docs", "docs..old"] {
            assert!(validate_key(key).is_ok(), "{key} should be valid");
        }
    }

    #[test]
    fn test_validate_key_rejects_escapes() {
        for key in &["", ".", "..", "a/b", "../docs", "a\\b"] {
            let err = validate_key(key).unwrap_err();
            assert!(matches!(err, SlotError::InvalidKey(_)), "{key}: {err:?}");
        }
    }

    #[test]
    fn test_io_error_display_names_key() {
        let err = SlotError::io(
            "pinltyDocs",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("pinltyDocs"));
        assert!(msg.contains("denied"));
    }
}
