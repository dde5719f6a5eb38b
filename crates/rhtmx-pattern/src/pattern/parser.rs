//! Pattern parser
//!
//! `raw string → Pattern` in three steps: method split, host/path split,
//! segmentation with per-segment classification.

use tracing::{debug, trace};

use super::segment::{classify_segment, Segment};
use super::Pattern;
use crate::error::PatternError;

/// Parses a route pattern string (pure function)
///
/// # Grammar
///
/// ```text
/// [METHOD " "] [host] "/" segment ("/" segment)*
/// ```
///
/// - Everything before the first space is the method
/// - Everything before the first `/` of the remainder is the host
/// - The path is split on every `/`; empty segments are kept and `.`/`..`
///   are not resolved
/// - `{$}` and `{name...}` must be the last segment
///
/// # Examples
///
/// ```
/// use rhtmx_pattern::{parse_pattern, Segment};
///
/// let pattern = parse_pattern("DELETE example.com/a/{foo12}/{$}").unwrap();
/// assert_eq!(pattern.method(), Some("DELETE"));
/// assert_eq!(pattern.host(), Some("example.com"));
/// assert_eq!(
///     pattern.segments(),
///     &[
///         Segment::Literal("a".to_string()),
///         Segment::Single("foo12".to_string()),
///         Segment::EndAnchor,
///     ]
/// );
///
/// assert!(parse_pattern("/{$}/more").is_err());
/// ```
pub fn parse_pattern(raw: &str) -> Result<Pattern, PatternError> {
    let (method, rest) = split_method(raw);
    let (host, path) = split_host(rest);

    let segments = parse_segments(raw, path).map_err(|err| {
        debug!(pattern = raw, error = %err, "rejected route pattern");
        err
    })?;

    let pattern = Pattern {
        source: raw.to_string(),
        method: non_empty(method),
        host: non_empty(Some(host)),
        segments,
    };

    debug!(
        pattern = raw,
        segments = pattern.segments.len(),
        required = pattern.arity().required,
        trailing = pattern.has_trailing_slash(),
        "parsed route pattern"
    );

    Ok(pattern)
}

/// Splits `"METHOD rest"` at the first space
fn split_method(raw: &str) -> (Option<&str>, &str) {
    raw.split_once(' ')
        .map(|(method, rest)| (Some(method), rest))
        .unwrap_or((None, raw))
}

/// Splits `rest` into the host prefix and the path starting at the first `/`
fn split_host(rest: &str) -> (&str, &str) {
    rest.find('/')
        .map(|idx| rest.split_at(idx))
        .unwrap_or((rest, ""))
}

fn non_empty(part: Option<&str>) -> Option<String> {
    part.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Classifies every `/`-delimited unit of the path, in order
///
/// The leading `/` opens the path, so `"/"` is one empty segment and `"//"`
/// is two.
fn parse_segments(source: &str, path: &str) -> Result<Vec<Segment>, PatternError> {
    let Some(path) = path.strip_prefix('/') else {
        return Ok(Vec::new());
    };

    let last = path.split('/').count() - 1;

    path.split('/')
        .enumerate()
        .map(|(idx, raw)| {
            let segment = classify_segment(raw);
            trace!(index = idx, raw, segment = ?segment, "classified segment");
            check_position(source, segment, idx == last)
        })
        .collect()
}

/// Terminal segments (`{$}`, `{name...}`) are only valid in last position
fn check_position(source: &str, segment: Segment, is_last: bool) -> Result<Segment, PatternError> {
    if is_last || !segment.is_terminal() {
        return Ok(segment);
    }

    Err(match segment {
        Segment::Rest(name) => PatternError::RestNotLast {
            pattern: source.to_string(),
            name,
        },
        _ => PatternError::EndAnchorNotLast {
            pattern: source.to_string(),
        },
    })
}
