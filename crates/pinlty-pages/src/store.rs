//! Page store: the page tree mirrored to a persisted slot.

use std::sync::Arc;

use pinlty_slot::SlotStore;

use crate::defaults::default_tree;
use crate::error::PageError;
use crate::path::PagePath;
use crate::tree::{Lookup, PageTree};

/// Slot key the page tree is persisted under.
pub const DEFAULT_SLOT_KEY: &str = "pinltyDocs";

/// Owns the page tree and keeps its persisted slot in sync.
///
/// The tree is loaded once by [`PageStore::initialize`] and rewritten to the
/// slot in full after every successful [`PageStore::commit_edit`].
pub struct PageStore {
    tree: PageTree,
    slots: Arc<dyn SlotStore>,
    key: String,
}

impl PageStore {
    /// Load the tree from slot `key`, falling back to [`default_tree`].
    ///
    /// An absent slot, an unreadable slot, and a slot that does not hold a
    /// page tree all install the default tree. None of these are reported to
    /// the caller.
    pub fn initialize(slots: Arc<dyn SlotStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let tree = load_tree(slots.as_ref(), &key).unwrap_or_else(default_tree);
        Self { tree, slots, key }
    }

    /// Create a store around an existing tree without touching the slot.
    pub fn with_tree(tree: PageTree, slots: Arc<dyn SlotStore>, key: impl Into<String>) -> Self {
        Self {
            tree,
            slots,
            key: key.into(),
        }
    }

    /// Current page tree.
    #[must_use]
    pub fn tree(&self) -> &PageTree {
        &self.tree
    }

    /// Slot key the tree is persisted under.
    #[must_use]
    pub fn slot_key(&self) -> &str {
        &self.key
    }

    /// Resolve `path` to page content.
    pub fn resolve(&self, path: &PagePath) -> Lookup<'_> {
        self.tree.lookup(path)
    }

    /// Content to open in the editor for `path`; empty if it does not resolve.
    #[must_use]
    pub fn begin_edit(&self, path: &PagePath) -> String {
        self.resolve(path).content().unwrap_or_default().to_owned()
    }

    /// Replace the page at `path` with `content` and persist the tree.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingParent`], [`PageError::NotABranch`] or
    /// [`PageError::NotALeaf`] if `path` cannot hold a page; nothing is changed
    /// or persisted in that case. Returns [`PageError::Slot`] if the slot
    /// write fails, after the in-memory tree has been updated.
    pub fn commit_edit(
        &mut self,
        path: &PagePath,
        content: impl Into<String>,
    ) -> Result<(), PageError> {
        let previous = self.tree.set_page(path, content)?;
        tracing::info!(page = %path, created = previous.is_none(), "Committed page edit");
        self.persist()
    }

    /// Pretty-printed JSON of the whole tree, indented by two spaces.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Serialize`] if serialization fails.
    pub fn serialize_all(&self) -> Result<String, PageError> {
        Ok(serde_json::to_string_pretty(&self.tree)?)
    }

    /// Overwrite the persisted slot with the current tree.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Serialize`] or [`PageError::Slot`] on failure.
    pub fn persist(&self) -> Result<(), PageError> {
        let json = serde_json::to_string(&self.tree)?;
        self.slots.write(&self.key, &json)?;
        tracing::debug!(slot = %self.key, bytes = json.len(), "Persisted page tree");
        Ok(())
    }

    /// Identifiers of every page, depth first in key order.
    #[must_use]
    pub fn page_ids(&self) -> Vec<PagePath> {
        self.tree.page_paths()
    }
}

/// Read and parse the persisted tree, if there is a usable one.
fn load_tree(slots: &dyn SlotStore, key: &str) -> Option<PageTree> {
    let json = match slots.read(key) {
        Ok(Some(json)) => json,
        Ok(None) => {
            tracing::debug!(slot = %key, "No persisted pages, using defaults");
            return None;
        }
        Err(e) => {
            tracing::warn!(slot = %key, error = %e, "Failed to read persisted pages, using defaults");
            return None;
        }
    };

    match serde_json::from_str::<PageTree>(&json) {
        Ok(tree) => {
            let unaddressable = tree.unaddressable_keys();
            if unaddressable > 0 {
                tracing::warn!(
                    slot = %key,
                    keys = unaddressable,
                    "Persisted pages have keys containing the delimiter, hiding them"
                );
            }
            Some(tree)
        }
        Err(e) => {
            tracing::warn!(slot = %key, error = %e, "Discarding unparseable persisted pages");
            None
        }
    }
}
