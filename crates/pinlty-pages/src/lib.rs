//! Page tree, page store and viewer session for Pinlty Docs.
//!
//! Documentation pages live in a [`PageTree`]: a recursive mapping whose
//! values are either page markup ([`PageNode::Leaf`]) or a nested section
//! ([`PageNode::Branch`]). Pages are addressed by dash-delimited identifiers
//! such as `editor-overview`, parsed into a [`PagePath`].
//!
//! # Architecture
//!
//! - [`PageTree`]: path-addressed lookup and leaf replacement
//! - [`PageStore`]: owns the tree and mirrors it to a persisted slot
//! - [`Viewer`]: a session over the store with the current page and an
//!   explicit [`Mode`] (viewing or editing)
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pinlty_pages::{PageStore, Viewer};
//! use pinlty_slot::FileSlotStore;
//!
//! let slots = Arc::new(FileSlotStore::new(".pinlty".into()));
//! let mut viewer = Viewer::new(PageStore::initialize(slots, "pinltyDocs"));
//!
//! let html = viewer.navigate("editor-assets");
//! viewer.enter_edit();
//! viewer.save("<p>new</p>")?;
//! let export = viewer.export()?;
//! ```

mod defaults;
mod error;
mod path;
mod store;
mod tree;
mod viewer;

pub use defaults::default_tree;
pub use error::PageError;
pub use path::{DELIMITER, PagePath};
pub use store::{DEFAULT_SLOT_KEY, PageStore};
pub use tree::{Lookup, NOT_FOUND_HTML, PageNode, PageTree};
pub use viewer::{
    DEFAULT_EXPORT_FILE_NAME, DEFAULT_HOME_PAGE, EXPORT_MIME, Export, Mode, Surface, Viewer,
};
