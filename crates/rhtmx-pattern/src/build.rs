//! Pattern reversal: `Pattern + values → request path`
//!
//! Substitution is positional by default. Values are inserted verbatim; literals
//! are emitted decoded and nothing is re-encoded. The method never appears in
//! the output.

use std::collections::HashMap;

use tracing::debug;

use crate::error::BuildError;
use crate::pattern::{Pattern, Segment};

/// Builds a concrete path from a pattern and positional values
///
/// Values fill `{name}` and `{name...}` wildcards in declaration order; `{$}`
/// takes none. A pattern whose path ends in `/` accepts one extra value,
/// which replaces the empty final segment.
///
/// # Errors
///
/// - [`BuildError::NotEnough`] when fewer values than wildcards are given
/// - [`BuildError::TooMany`] when more values are given than can be placed
///
/// # Examples
///
/// ```
/// use rhtmx_pattern::{build, Pattern};
///
/// let pattern = Pattern::parse("/{a}/foo/{rest...}").unwrap();
/// assert_eq!(build(&pattern, &["786", "d/a/f"]).unwrap(), "/786/foo/d/a/f");
///
/// let pattern = Pattern::parse("DELETE example.com/a/{foo12}/{$}").unwrap();
/// assert_eq!(build(&pattern, &["777"]).unwrap(), "example.com/a/777/");
///
/// let err = build(&Pattern::parse("/").unwrap(), &["dd/bb", "err"]).unwrap_err();
/// assert_eq!(err.to_string(), "too many values for pattern \"/\", got: 2, used: 1");
/// ```
pub fn build<S: AsRef<str>>(pattern: &Pattern, values: &[S]) -> Result<String, BuildError> {
    check_arity(pattern, values.len()).map_err(|err| {
        debug!(pattern = pattern.as_str(), error = %err, "route build rejected");
        err
    })?;

    let mut values = values.iter().map(|value| value.as_ref());
    let tail = pattern.has_trailing_slash().then(|| pattern.segments.len() - 1);

    let rendered = pattern
        .segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| match segment {
            Segment::Literal(text) if Some(idx) == tail => Ok(values.next().unwrap_or(text.as_str())),
            Segment::Literal(text) => Ok(text.as_str()),
            Segment::Single(_) | Segment::Rest(_) => {
                values.next().ok_or_else(|| not_enough(pattern))
            }
            Segment::EndAnchor => Ok(""),
        })
        .collect::<Result<Vec<&str>, BuildError>>()?;

    let url = join(pattern.host(), &rendered);
    debug!(pattern = pattern.as_str(), url = %url, "built route");
    Ok(url)
}

/// Builds a concrete path by wildcard name instead of position
///
/// Every named wildcard needs an entry in `params`; unknown keys are
/// ignored. The anonymous trailing slot of a `/`-terminated path stays empty.
///
/// # Examples
///
/// ```
/// use rhtmx_pattern::{build_named, Pattern};
/// use std::collections::HashMap;
///
/// let pattern = Pattern::parse("/posts/{year}/{slug}").unwrap();
///
/// let mut params = HashMap::new();
/// params.insert("slug".to_string(), "hello-world".to_string());
/// params.insert("year".to_string(), "2024".to_string());
///
/// assert_eq!(build_named(&pattern, &params).unwrap(), "/posts/2024/hello-world");
/// ```
pub fn build_named(
    pattern: &Pattern,
    params: &HashMap<String, String>,
) -> Result<String, BuildError> {
    let rendered = pattern
        .segments
        .iter()
        .map(|segment| match segment {
            Segment::Literal(text) => Ok(text.as_str()),
            Segment::Single(name) | Segment::Rest(name) => params
                .get(name)
                .map(String::as_str)
                .ok_or_else(|| BuildError::MissingValue {
                    pattern: pattern.as_str().to_string(),
                    name: name.clone(),
                }),
            Segment::EndAnchor => Ok(""),
        })
        .collect::<Result<Vec<&str>, BuildError>>()
        .map_err(|err| {
            debug!(pattern = pattern.as_str(), error = %err, "route build rejected");
            err
        })?;

    let url = join(pattern.host(), &rendered);
    debug!(pattern = pattern.as_str(), url = %url, "built route");
    Ok(url)
}

fn check_arity(pattern: &Pattern, got: usize) -> Result<(), BuildError> {
    let arity = pattern.arity();

    if arity.accepts(got) {
        Ok(())
    } else if got < arity.required {
        Err(not_enough(pattern))
    } else {
        Err(BuildError::TooMany {
            pattern: pattern.as_str().to_string(),
            got,
            used: arity.max(),
        })
    }
}

fn not_enough(pattern: &Pattern) -> BuildError {
    BuildError::NotEnough {
        pattern: pattern.as_str().to_string(),
        expected: pattern.arity().required,
    }
}

/// `host` followed by `/seg/seg/...`; no path at all leaves just the host
fn join(host: Option<&str>, rendered: &[&str]) -> String {
    let host = host.unwrap_or_default();

    if rendered.is_empty() {
        return host.to_string();
    }

    format!("{}/{}", host, rendered.join("/"))
}

impl Pattern {
    /// Positional build, see [`build`]
    pub fn build<S: AsRef<str>>(&self, values: &[S]) -> Result<String, BuildError> {
        build(self, values)
    }

    /// Name-keyed build, see [`build_named`]
    pub fn build_named(&self, params: &HashMap<String, String>) -> Result<String, BuildError> {
        build_named(self, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildErrorKind;

    const NONE: [&str; 0] = [];

    fn parse(raw: &str) -> Pattern {
        Pattern::parse(raw).unwrap()
    }

    #[test]
    fn test_build_root() {
        assert_eq!(build(&parse("/"), &NONE).unwrap(), "/");
    }

    #[test]
    fn test_build_root_trailing_slot() {
        assert_eq!(build(&parse("/"), &["dd/bb"]).unwrap(), "/dd/bb");
        assert_eq!(
            build(&parse("/static/"), &["css/app.css"]).unwrap(),
            "/static/css/app.css"
        );
    }

    #[test]
    fn test_build_double_slash_roundtrip() {
        assert_eq!(build(&parse("//"), &NONE).unwrap(), "//");
        assert_eq!(build(&parse("/a//b"), &NONE).unwrap(), "/a//b");
    }

    #[test]
    fn test_build_host_only() {
        assert_eq!(build(&parse("GET example.com"), &NONE).unwrap(), "example.com");
        assert_eq!(build(&parse(""), &NONE).unwrap(), "");
    }

    #[test]
    fn test_build_method_is_dropped() {
        assert_eq!(build(&parse("POST /items/{id}"), &["9"]).unwrap(), "/items/9");
    }

    #[test]
    fn test_build_values_are_not_encoded() {
        assert_eq!(build(&parse("/q/{term}"), &["a b%20c"]).unwrap(), "/q/a b%20c");
    }

    #[test]
    fn test_build_keeps_undecodable_escapes() {
        assert_eq!(build(&parse("/%FF/x"), &NONE).unwrap(), "/%FF/x");
        assert_eq!(build(&parse("/caf%C3%A9/%C3"), &NONE).unwrap(), "/café/%C3");
    }

    #[test]
    fn test_build_accepts_owned_values() {
        let values = vec!["1".to_string(), "2".to_string()];
        assert_eq!(build(&parse("/{a}/{b}"), &values).unwrap(), "/1/2");
    }

    #[test]
    fn test_build_not_enough() {
        let err = build(&parse("/{w1}/lit/{w2}"), &["111"]).unwrap_err();
        assert_eq!(err.kind(), BuildErrorKind::NotEnough);
        assert_eq!(
            err,
            BuildError::NotEnough {
                pattern: "/{w1}/lit/{w2}".to_string(),
                expected: 2
            }
        );
    }

    #[test]
    fn test_build_too_many_on_anchor() {
        let err = build(&parse("/a/{$}"), &["x"]).unwrap_err();
        assert_eq!(
            err,
            BuildError::TooMany {
                pattern: "/a/{$}".to_string(),
                got: 1,
                used: 0
            }
        );
    }

    #[test]
    fn test_build_leaves_pattern_reusable() {
        let pattern = parse("/{id}");
        assert!(build(&pattern, &NONE).is_err());
        assert_eq!(build(&pattern, &["5"]).unwrap(), "/5");
    }

    #[test]
    fn test_build_named() {
        let pattern = parse("example.com/{a}/x/{rest...}");
        let params = HashMap::from([
            ("a".to_string(), "1".to_string()),
            ("rest".to_string(), "p/q".to_string()),
            ("unused".to_string(), "z".to_string()),
        ]);
        assert_eq!(build_named(&pattern, &params).unwrap(), "example.com/1/x/p/q");
    }

    #[test]
    fn test_build_named_missing() {
        let params = HashMap::from([("a".to_string(), "1".to_string())]);
        let err = build_named(&parse("/{a}/{b}"), &params).unwrap_err();
        assert_eq!(err.kind(), BuildErrorKind::MissingValue);
        assert_eq!(
            err.to_string(),
            "missing value for wildcard \"b\" in pattern \"/{a}/{b}\""
        );
    }

    #[test]
    fn test_build_named_trailing_slot_stays_empty() {
        assert_eq!(build_named(&parse("/docs/"), &HashMap::new()).unwrap(), "/docs/");
    }
}
