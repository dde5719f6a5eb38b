//! The pattern model
//!
//! A [`Pattern`] is created once by [`parse_pattern`] and is read-only from
//! then on. Building from it never mutates it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PatternError;

pub mod parser;
pub mod segment;

pub use parser::parse_pattern;
pub use segment::{classify_segment, is_wildcard_name, Segment};

/// A parsed route pattern: `[METHOD ][host]/seg/seg/...`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    pub(crate) source: String,
    pub(crate) method: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) segments: Vec<Segment>,
}

/// How many build values a pattern accepts
///
/// `required` counts `{name}` and `{name...}` wildcards. `trailing` is set when
/// the path ends in `/`, which leaves room for one more value in place of the
/// empty final segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub required: usize,
    pub trailing: bool,
}

impl Arity {
    /// Largest number of values a build can place
    pub fn max(&self) -> usize {
        self.required + usize::from(self.trailing)
    }

    pub fn accepts(&self, count: usize) -> bool {
        (self.required..=self.max()).contains(&count)
    }
}

impl Pattern {
    /// Parses a pattern string (same as [`parse_pattern`])
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        parse_pattern(raw)
    }

    /// The pattern text exactly as it was parsed
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Host portion, `None` when the pattern starts with `/`
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Path segments in declaration order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Wildcard names in declaration order (the positional build order)
    ///
    /// ```
    /// use rhtmx_pattern::Pattern;
    ///
    /// let pattern = Pattern::parse("/{a}/foo/{rest...}").unwrap();
    /// assert_eq!(pattern.wildcards().collect::<Vec<_>>(), vec!["a", "rest"]);
    /// ```
    pub fn wildcards(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(Segment::name)
    }

    /// True when the path ends in an empty segment (`/`, `/static/`)
    ///
    /// A trailing `{$}` is not counted: it closes the path.
    pub fn has_trailing_slash(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Literal(text)) if text.is_empty())
    }

    /// True when the last segment is `{$}`
    pub fn is_anchored(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::EndAnchor))
    }

    pub fn arity(&self) -> Arity {
        Arity {
            required: self.segments.iter().map(Segment::consumes_value).sum(),
            trailing: self.has_trailing_slash(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pattern(s)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = PatternError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_pattern(value)
    }
}

impl TryFrom<String> for Pattern {
    type Error = PatternError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_pattern(&value)
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

// Serialized as the source string; deserializing runs the parser.
impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_pattern(&raw).map_err(serde::de::Error::custom)
    }
}
