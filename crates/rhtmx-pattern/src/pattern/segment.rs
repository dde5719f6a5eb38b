//! Segment classification for route patterns
//!
//! A dedicated classifier: a raw segment is a wildcard only when the *whole*
//! segment has one of three fixed shapes. Anything else is literal text.

use std::fmt;

use serde::Serialize;

use crate::decode::percent_decode;

/// One `/`-delimited unit of a pattern path
///
/// # Examples
///
/// ```
/// use rhtmx_pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("users"), Segment::Literal("users".to_string()));
/// assert_eq!(classify_segment("{id}"), Segment::Single("id".to_string()));
/// assert_eq!(classify_segment("{path...}"), Segment::Rest("path".to_string()));
/// assert_eq!(classify_segment("{$}"), Segment::EndAnchor);
///
/// // Not a whole-segment match: stays literal
/// assert_eq!(classify_segment("v{id}"), Segment::Literal("v{id}".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    /// Fixed text, already percent-decoded
    Literal(String),
    /// `{name}`: one value, one path segment
    Single(String),
    /// `{name...}`: one value inserted verbatim, may contain `/`
    Rest(String),
    /// `{$}`: no value, requires the path to end in `/`
    EndAnchor,
}

impl Segment {
    /// Wildcard name, if this segment binds a value
    pub fn name(&self) -> Option<&str> {
        match self {
            Segment::Single(name) | Segment::Rest(name) => Some(name),
            Segment::Literal(_) | Segment::EndAnchor => None,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Single(_) | Segment::Rest(_))
    }

    /// Whether this segment must be the last one of its pattern
    pub fn is_terminal(&self) -> bool {
        matches!(self, Segment::Rest(_) | Segment::EndAnchor)
    }

    /// Number of build values this segment consumes (0 or 1)
    pub fn consumes_value(&self) -> usize {
        usize::from(self.is_wildcard())
    }
}

/// Renders the segment back in pattern syntax
///
/// Literals are written decoded; this is a readable rendering, not an
/// escaping one.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Single(name) => write!(f, "{{{name}}}"),
            Segment::Rest(name) => write!(f, "{{{name}...}}"),
            Segment::EndAnchor => f.write_str("{$}"),
        }
    }
}

/// Classifies a raw (undecoded) segment (pure function)
///
/// # Rules (evaluated in order)
///
/// 1. **End anchor**: exactly `{$}`
/// 2. **Rest wildcard**: `{name...}`
/// 3. **Single wildcard**: `{name}`
/// 4. **Literal**: anything else, percent-decoded
///
/// `name` must satisfy [`is_wildcard_name`]; a brace shape with any other
/// content is a literal.
pub fn classify_segment(raw: &str) -> Segment {
    if raw == "{$}" {
        return Segment::EndAnchor;
    }

    match raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(inner) => match inner.strip_suffix("...") {
            Some(name) if is_wildcard_name(name) => Segment::Rest(name.to_string()),
            Some(_) => literal(raw),
            None if is_wildcard_name(inner) => Segment::Single(inner.to_string()),
            None => literal(raw),
        },
        None => literal(raw),
    }
}

fn literal(raw: &str) -> Segment {
    Segment::Literal(percent_decode(raw).into_owned())
}

/// Checks the wildcard name rule (pure predicate)
///
/// First char alphabetic or `_`, the rest alphanumeric or `_`.
///
/// ```
/// use rhtmx_pattern::pattern::segment::is_wildcard_name;
///
/// assert!(is_wildcard_name("id"));
/// assert!(is_wildcard_name("_w1"));
/// assert!(!is_wildcard_name(""));
/// assert!(!is_wildcard_name("1st"));
/// assert!(!is_wildcard_name("a-b"));
/// ```
pub fn is_wildcard_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
