//! Location <-> selection codec
//!
//! A location is the opaque address string shown in the explorer's address
//! bar, shaped like `#<category>/<ui>/<story>`. Every component is optional
//! via truncation. Ids may not contain `/`.

use std::fmt;

/// Leading marker character of every location produced by [`encode`].
pub const LOCATION_MARKER: char = '#';

/// Opaque address string. Never mutated; each navigation builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The home location: the bare marker with no segments.
    pub fn root() -> Self {
        Self(LOCATION_MARKER.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Location {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// The (category, ui, story) triple derived from a location.
///
/// `Some("")` and `None` are different states: a trailing `/` yields an
/// empty id, a missing segment yields no id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub category: Option<String>,
    pub ui: Option<String>,
    pub story: Option<String>,
}

impl Selection {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn ui(&self) -> Option<&str> {
        self.ui.as_deref()
    }

    pub fn story(&self) -> Option<&str> {
        self.story.as_deref()
    }
}

/// Project a location onto a selection. Total: malformed input only ever
/// produces absent components.
pub fn decode(location: &Location) -> Selection {
    let raw = location.as_str();
    let path = raw.strip_prefix(LOCATION_MARKER).unwrap_or(raw);
    if path.is_empty() {
        return Selection::default();
    }

    let mut segments = path.split('/').map(str::to_string);
    Selection {
        category: segments.next(),
        ui: segments.next(),
        story: segments.next(),
    }
}

/// Build the location for a selection. Returns `None` unless both the
/// category and the ui are known; the story is appended only when present.
pub fn encode(category: Option<&str>, ui: Option<&str>, story: Option<&str>) -> Option<Location> {
    let (category, ui) = (category?, ui?);
    let raw = match story {
        Some(story) => format!("{LOCATION_MARKER}{category}/{ui}/{story}"),
        None => format!("{LOCATION_MARKER}{category}/{ui}"),
    };
    Some(Location(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(category: Option<&str>, ui: Option<&str>, story: Option<&str>) -> Selection {
        Selection {
            category: category.map(String::from),
            ui: ui.map(String::from),
            story: story.map(String::from),
        }
    }

    #[test]
    fn test_decode_empty_location_selects_nothing() {
        assert_eq!(decode(&Location::new("")), Selection::default());
    }

    #[test]
    fn test_decode_root_selects_nothing() {
        assert_eq!(decode(&Location::root()), Selection::default());
    }

    #[test]
    fn test_decode_full_path() {
        assert_eq!(
            decode(&Location::new("#cats/btn/Loading")),
            sel(Some("cats"), Some("btn"), Some("Loading"))
        );
    }

    #[test]
    fn test_decode_without_story() {
        assert_eq!(
            decode(&Location::new("#cats/btn")),
            sel(Some("cats"), Some("btn"), None)
        );
    }

    #[test]
    fn test_decode_without_marker() {
        assert_eq!(
            decode(&Location::new("cats/btn")),
            sel(Some("cats"), Some("btn"), None)
        );
    }

    #[test]
    fn test_decode_trailing_slash_is_empty_id_not_absent() {
        assert_eq!(
            decode(&Location::new("#cats/")),
            sel(Some("cats"), Some(""), None)
        );
        assert_eq!(
            decode(&Location::new("#cats/btn/")),
            sel(Some("cats"), Some("btn"), Some(""))
        );
    }

    #[test]
    fn test_decode_ignores_extra_segments() {
        assert_eq!(
            decode(&Location::new("#a/b/c/d/e")),
            sel(Some("a"), Some("b"), Some("c"))
        );
    }

    #[test]
    fn test_decode_strips_only_one_marker() {
        assert_eq!(decode(&Location::new("##a")), sel(Some("#a"), None, None));
    }

    #[test]
    fn test_encode_requires_category_and_ui() {
        assert_eq!(encode(None, Some("btn"), Some("Loading")), None);
        assert_eq!(encode(Some("cats"), None, Some("Loading")), None);
        assert_eq!(encode(None, None, None), None);
    }

    #[test]
    fn test_encode_with_and_without_story() {
        assert_eq!(
            encode(Some("cats"), Some("btn"), Some("Loading")),
            Some(Location::new("#cats/btn/Loading"))
        );
        assert_eq!(
            encode(Some("cats"), Some("btn"), None),
            Some(Location::new("#cats/btn"))
        );
    }

    #[test]
    fn test_decode_recovers_encoded_ids() {
        let cases = [
            ("Atoms", "Button", Some("Loading")),
            ("Atoms", "Button", None),
            ("", "Button", None),
            ("Atoms", "", Some("")),
        ];
        for (category, ui, story) in cases {
            let location = encode(Some(category), Some(ui), story).unwrap();
            assert_eq!(decode(&location), sel(Some(category), Some(ui), story));
        }
    }
}
