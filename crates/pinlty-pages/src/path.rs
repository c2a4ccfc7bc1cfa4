//! Page identifiers.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Separator between segments of a page identifier.
pub const DELIMITER: char = '-';

/// Location of a page in a [`PageTree`](crate::PageTree).
///
/// A path always has at least one segment. Identifiers are split on
/// [`DELIMITER`], so `editor-overview` becomes `["editor", "overview"]` and the
/// empty identifier becomes a single empty segment (which never resolves).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PagePath {
    segments: Vec<String>,
}

impl PagePath {
    /// Parse a dash-delimited page identifier.
    #[must_use]
    pub fn parse(id: &str) -> Self {
        Self {
            segments: id.split(DELIMITER).map(str::to_owned).collect(),
        }
    }

    /// Build a path from explicit segments.
    ///
    /// Returns `None` if `segments` is empty. Segments may contain
    /// [`DELIMITER`]; such paths do not survive a `to_string`/`parse` round trip.
    pub fn from_segments<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        (!segments.is_empty()).then_some(Self { segments })
    }

    /// All segments, root first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Split into the section segments and the final page key.
    #[must_use]
    pub fn split_leaf(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((leaf, sections)) => (sections, leaf),
            None => (&[], ""),
        }
    }
}

/// Join segments into a page identifier.
pub(crate) fn join_segments(segments: &[String]) -> String {
    let mut delimiter = [0u8; 4];
    segments.join(&*DELIMITER.encode_utf8(&mut delimiter))
}

impl FromStr for PagePath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for PagePath {
    fn from(id: &str) -> Self {
        Self::parse(id)
    }
}

impl fmt::Display for PagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_segments(&self.segments))
    }
}
