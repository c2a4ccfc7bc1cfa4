//! Nested page tree.
//!
//! Serialized as plain JSON: a page is a string, a section is an object.
//!
//! ```json
//! {
//!   "intro": "<h2>Introduction</h2>",
//!   "editor": {
//!     "overview": "<h2>Editor Overview</h2>"
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PageError;
use crate::path::{DELIMITER, PagePath, join_segments};

/// Markup rendered in place of a page that does not resolve.
pub const NOT_FOUND_HTML: &str = "<h2>404</h2><p>Page not found.</p>";

/// A node of the page tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageNode {
    /// Page markup.
    Leaf(String),
    /// Nested section.
    Branch(PageTree),
}

/// Recursive mapping of keys to pages and sections.
///
/// Keys are kept sorted so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageTree {
    nodes: BTreeMap<String, PageNode>,
}

/// Result of resolving a [`PagePath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Path ends at a page with this markup.
    Found(&'a str),
    /// Path is missing, passes through a page, or ends at a section.
    NotFound,
}

impl<'a> Lookup<'a> {
    /// Markup to show: the page content, or [`NOT_FOUND_HTML`].
    #[must_use]
    pub fn render(self) -> &'a str {
        match self {
            Self::Found(content) => content,
            Self::NotFound => NOT_FOUND_HTML,
        }
    }

    /// Page content if found.
    #[must_use]
    pub fn content(self) -> Option<&'a str> {
        match self {
            Self::Found(content) => Some(content),
            Self::NotFound => None,
        }
    }

    /// Whether the path resolved to a page.
    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl PageTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page, replacing any node at `key`.
    #[must_use]
    pub fn with_page(mut self, key: impl Into<String>, content: impl Into<String>) -> Self {
        self.nodes.insert(key.into(), PageNode::Leaf(content.into()));
        self
    }

    /// Add a section, replacing any node at `key`.
    #[must_use]
    pub fn with_section(mut self, key: impl Into<String>, section: PageTree) -> Self {
        self.nodes.insert(key.into(), PageNode::Branch(section));
        self
    }

    /// Node stored directly under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PageNode> {
        self.nodes.get(key)
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct children in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageNode)> {
        self.nodes.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Walk `path` and return the page at its end.
    pub fn lookup(&self, path: &PagePath) -> Lookup<'_> {
        let (sections, leaf) = path.split_leaf();

        let mut current = self;
        for segment in sections {
            match current.nodes.get(segment) {
                Some(PageNode::Branch(section)) => current = section,
                Some(PageNode::Leaf(_)) | None => return Lookup::NotFound,
            }
        }

        match current.nodes.get(leaf) {
            Some(PageNode::Leaf(content)) => Lookup::Found(content),
            Some(PageNode::Branch(_)) | None => Lookup::NotFound,
        }
    }

    /// Store `content` as the page at `path`.
    ///
    /// Every section along the path must already exist. The page itself may be
    /// new. Returns the previous content, if any.
    ///
    /// # Errors
    ///
    /// - [`PageError::MissingParent`] if a section along the path is absent
    /// - [`PageError::NotABranch`] if a segment along the path names a page
    /// - [`PageError::NotALeaf`] if `path` names a section
    ///
    /// The tree is unchanged on error.
    pub fn set_page(
        &mut self,
        path: &PagePath,
        content: impl Into<String>,
    ) -> Result<Option<String>, PageError> {
        let (sections, leaf) = path.split_leaf();
        let parent = self.section_mut(sections)?;

        if let Some(PageNode::Branch(_)) = parent.nodes.get(leaf) {
            return Err(PageError::NotALeaf(path.to_string()));
        }

        let previous = parent
            .nodes
            .insert(leaf.to_owned(), PageNode::Leaf(content.into()));
        Ok(match previous {
            Some(PageNode::Leaf(old)) => Some(old),
            _ => None,
        })
    }

    /// Paths of every addressable page, depth first in key order.
    ///
    /// Keys containing [`DELIMITER`] cannot be reached by an identifier, so
    /// they and everything below them are left out.
    #[must_use]
    pub fn page_paths(&self) -> Vec<PagePath> {
        let mut paths = Vec::new();
        self.collect_pages(&mut Vec::new(), &mut paths);
        paths
    }

    fn collect_pages(&self, prefix: &mut Vec<String>, out: &mut Vec<PagePath>) {
        for (key, node) in &self.nodes {
            if key.contains(DELIMITER) {
                continue;
            }
            prefix.push(key.clone());
            match node {
                PageNode::Leaf(_) => out.extend(PagePath::from_segments(prefix.iter().cloned())),
                PageNode::Branch(section) => section.collect_pages(prefix, out),
            }
            prefix.pop();
        }
    }

    /// Number of keys anywhere in the tree that contain [`DELIMITER`].
    pub(crate) fn unaddressable_keys(&self) -> usize {
        self.nodes
            .iter()
            .map(|(key, node)| {
                let own = usize::from(key.contains(DELIMITER));
                match node {
                    PageNode::Leaf(_) => own,
                    PageNode::Branch(section) => own + section.unaddressable_keys(),
                }
            })
            .sum()
    }

    /// Mutable section reached by walking `sections` from the root.
    fn section_mut(&mut self, sections: &[String]) -> Result<&mut PageTree, PageError> {
        let mut current = self;
        for (depth, segment) in sections.iter().enumerate() {
            let walked = || join_segments(&sections[..=depth]);
            current = match current.nodes.get_mut(segment) {
                Some(PageNode::Branch(section)) => section,
                Some(PageNode::Leaf(_)) => return Err(PageError::NotABranch(walked())),
                None => return Err(PageError::MissingParent(walked())),
            };
        }
        Ok(current)
    }
}
