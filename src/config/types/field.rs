//! Config field paths used in diagnostics.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path to a config field, e.g. `site.base` or `sidebar."/api/"[0].items[2].link`.
///
/// Static section fields are built with [`FieldPath::new`] at compile time;
/// paths into maps and arrays are extended with [`key`](Self::key) and
/// [`index`](Self::index).
///
/// # Example
///
/// ```ignore
/// let path = SidebarMap::FIELD.key("/api/").index(0).field("items");
/// assert_eq!(path.as_str(), "sidebar.\"/api/\"[0].items");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a named sub-field (`a` -> `a.b`).
    pub fn field(&self, name: &str) -> Self {
        Self(Cow::Owned(format!("{}.{}", self.0, name)))
    }

    /// Append a quoted map key (`a` -> `a."key"`).
    pub fn key(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.\"{}\"", self.0, key)))
    }

    /// Append an array index (`a` -> `a[3]`).
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, i)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_path() {
        let path = FieldPath::new("sidebar")
            .key("/api/")
            .index(0)
            .field("items")
            .index(2)
            .field("link");
        assert_eq!(path.as_str(), "sidebar.\"/api/\"[0].items[2].link");
    }

    #[test]
    fn test_static_path() {
        const BASE: FieldPath = FieldPath::new("site.base");
        assert_eq!(BASE.as_str(), "site.base");
        assert_eq!(BASE.as_ref(), "site.base");
    }
}
