//! Page store error types.

use pinlty_slot::SlotError;

/// Error raised when editing, saving or exporting pages.
///
/// Lookups never fail; a missing page resolves to
/// [`Lookup::NotFound`](crate::Lookup::NotFound) instead.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// A section on the way to the page does not exist.
    #[error("Section '{0}' does not exist")]
    MissingParent(String),
    /// A segment on the way to the page names a page, not a section.
    #[error("'{0}' is a page, not a section")]
    NotABranch(String),
    /// The target names a section, which cannot be replaced by page content.
    #[error("'{0}' is a section, not a page")]
    NotALeaf(String),
    /// Save was requested while not in edit mode.
    #[error("Not in edit mode")]
    NotEditing,
    /// Tree could not be serialized.
    #[error("Failed to serialize pages: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Persisted slot could not be written.
    #[error("{0}")]
    Slot(#[from] SlotError),
}
