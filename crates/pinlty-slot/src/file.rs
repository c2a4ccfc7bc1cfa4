//! File-based slot store.
//!
//! [`FileSlotStore`] keeps each slot as a file inside a data directory:
//!
//! ```text
//! {dir}/
//! +-- pinltyDocs.json    # slot "pinltyDocs"
//! +-- ...
//! ```
//!
//! Writes go to a temporary file in the same directory which is then renamed
//! over the slot file, so a crash mid-write leaves the previous value intact.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{SlotError, SlotStore, validate_key};

/// Extension appended to slot keys on disk.
const SLOT_EXTENSION: &str = "json";

/// File-based [`SlotStore`] rooted at a directory on disk.
///
/// The directory is created lazily on first write.
#[derive(Debug)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Create a slot store rooted at `dir`.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Data directory holding the slot files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidKey`] if the key is rejected.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, SlotError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{SLOT_EXTENSION}")))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => {
                tracing::debug!(path = %path.display(), bytes = value.len(), "Read slot");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SlotError::io(key, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SlotError> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| SlotError::io(key, e))?;

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| SlotError::io(key, e))?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| SlotError::io(key, e))?;
        tmp.persist(&path).map_err(|e| SlotError::io(key, e.error))?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "Wrote slot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_slot_is_none() {
        let tmp = TempDir::new().unwrap();
        let slots = FileSlotStore::new(tmp.path().to_path_buf());

        assert_eq!(slots.read("pinltyDocs").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let tmp = TempDir::new().unwrap();
        let slots = FileSlotStore::new(tmp.path().to_path_buf());

        slots.write("pinltyDocs", r#"{"intro":"hi"}"#).unwrap();

        assert_eq!(
            slots.read("pinltyDocs").unwrap(),
            Some(r#"{"intro":"hi"}"#.to_owned())
        );
    }

    #[test]
    fn test_write_overwrites_previous_value() {
        let tmp = TempDir::new().unwrap();
        let slots = FileSlotStore::new(tmp.path().to_path_buf());

        slots.write("pinltyDocs", "first").unwrap();
        slots.write("pinltyDocs", "second").unwrap();

        assert_eq!(slots.read("pinltyDocs").unwrap(), Some("second".to_owned()));
    }

    #[test]
    fn test_write_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("deeply/nested/.pinlty");
        let slots = FileSlotStore::new(dir.clone());

        assert!(!dir.exists());
        slots.write("pinltyDocs", "{}").unwrap();

        assert_eq!(
            fs::read_to_string(dir.join("pinltyDocs.json")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let tmp = TempDir::new().unwrap();
        let slots = FileSlotStore::new(tmp.path().to_path_buf());

        slots.write("pinltyDocs", "a").unwrap();
        slots.write("pinltyDocs", "b").unwrap();

        let names: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["pinltyDocs.json".to_owned()]);
    }

    #[test]
    fn test_slots_are_isolated() {
        let tmp = TempDir::new().unwrap();
        let slots = FileSlotStore::new(tmp.path().to_path_buf());

        slots.write("alpha", "a").unwrap();
        slots.write("beta", "b").unwrap();

        assert_eq!(slots.read("alpha").unwrap(), Some("a".to_owned()));
        assert_eq!(slots.read("beta").unwrap(), Some("b".to_owned()));
    }

    #[test]
    fn test_invalid_key_rejected() {
        let tmp = TempDir::new().unwrap();
        let slots = FileSlotStore::new(tmp.path().join("data"));

        assert!(matches!(
            slots.write("../escape", "x"),
            Err(SlotError::InvalidKey(_))
        ));
        assert!(matches!(slots.read(""), Err(SlotError::InvalidKey(_))));
        assert!(!tmp.path().join("escape.json").exists());
    }

    #[test]
    fn test_read_directory_in_place_of_slot_is_io_error() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("pinltyDocs.json")).unwrap();
        let slots = FileSlotStore::new(tmp.path().to_path_buf());

        assert!(matches!(
            slots.read("pinltyDocs"),
            Err(SlotError::Io { .. })
        ));
    }
}
