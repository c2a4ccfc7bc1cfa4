//! Viewer session over a [`PageStore`].
//!
//! Tracks which page is open and whether it is being viewed or edited. Every
//! method corresponds to one user action and returns what should be shown in
//! the content area afterwards.

use crate::error::PageError;
use crate::path::PagePath;
use crate::store::PageStore;

/// Page opened when a session starts.
pub const DEFAULT_HOME_PAGE: &str = "intro";

/// File name offered for exports.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "PinltyDocs.json";

/// Media type of exports.
pub const EXPORT_MIME: &str = "application/json";

/// Whether the current page is shown or open in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Page markup is rendered.
    #[default]
    Viewing,
    /// Page markup is open for editing.
    Editing,
}

/// What the content area shows after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Surface {
    /// Rendered page markup (or the not-found sentinel).
    Page(String),
    /// Editor pre-filled with this draft.
    Editor(String),
}

/// Snapshot of the whole page tree, ready to be saved as a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Suggested file name.
    pub file_name: String,
    /// Media type of `body`.
    pub mime: &'static str,
    /// Pretty-printed JSON of the page tree.
    pub body: String,
}

/// A viewing session: the store, the open page and the current [`Mode`].
pub struct Viewer {
    store: PageStore,
    current: PagePath,
    mode: Mode,
    export_file_name: String,
}

impl Viewer {
    /// Start a session on [`DEFAULT_HOME_PAGE`] in viewing mode.
    #[must_use]
    pub fn new(store: PageStore) -> Self {
        Self {
            store,
            current: PagePath::parse(DEFAULT_HOME_PAGE),
            mode: Mode::Viewing,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_owned(),
        }
    }

    /// Open `id` instead of the default home page.
    #[must_use]
    pub fn with_home(mut self, id: &str) -> Self {
        self.current = PagePath::parse(id);
        self
    }

    /// Offer exports under `file_name`.
    #[must_use]
    pub fn with_export_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.export_file_name = file_name.into();
        self
    }

    /// Underlying page store.
    #[must_use]
    pub fn store(&self) -> &PageStore {
        &self.store
    }

    /// Page currently open.
    #[must_use]
    pub fn current(&self) -> &PagePath {
        &self.current
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Markup for the current page, or the not-found sentinel.
    #[must_use]
    pub fn render(&self) -> String {
        self.store.resolve(&self.current).render().to_owned()
    }

    /// Open page `id`, leaving edit mode without saving.
    pub fn navigate(&mut self, id: &str) -> String {
        self.current = PagePath::parse(id);
        self.mode = Mode::Viewing;
        tracing::debug!(page = %self.current, "Navigated");
        self.render()
    }

    /// Switch to edit mode and return the draft for the current page.
    ///
    /// The draft is empty if the page does not resolve.
    pub fn enter_edit(&mut self) -> String {
        self.mode = Mode::Editing;
        self.store.begin_edit(&self.current)
    }

    /// Switch back to viewing mode, discarding any draft.
    pub fn exit_edit(&mut self) -> String {
        self.mode = Mode::Viewing;
        self.render()
    }

    /// Enter edit mode when viewing, leave it when editing.
    pub fn toggle_edit(&mut self) -> Surface {
        match self.mode {
            Mode::Viewing => Surface::Editor(self.enter_edit()),
            Mode::Editing => Surface::Page(self.exit_edit()),
        }
    }

    /// Commit `draft` as the current page, persist, and leave edit mode.
    ///
    /// Returns the re-rendered page.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NotEditing`] outside edit mode, or any error from
    /// [`PageStore::commit_edit`]. The session stays in edit mode on error so
    /// the draft is not lost.
    pub fn save(&mut self, draft: impl Into<String>) -> Result<String, PageError> {
        if self.mode != Mode::Editing {
            return Err(PageError::NotEditing);
        }
        self.store.commit_edit(&self.current, draft)?;
        Ok(self.exit_edit())
    }

    /// Export the whole page tree.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Serialize`] if the tree cannot be serialized.
    pub fn export(&self) -> Result<Export, PageError> {
        let body = self.store.serialize_all()?;
        tracing::info!(file = %self.export_file_name, bytes = body.len(), "Exported pages");
        Ok(Export {
            file_name: self.export_file_name.clone(),
            mime: EXPORT_MIME,
            body,
        })
    }
}
