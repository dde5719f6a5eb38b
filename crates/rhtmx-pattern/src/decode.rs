//! Lenient percent-decoding for literal pattern segments
//!
//! **Pure function** with zero-copy optimization using `Cow<'_, str>`.

use std::borrow::Cow;

/// Decodes `%XX` escapes in a literal segment, never failing
///
/// - Valid escapes (`%` + two hex digits, either case) become their byte value
/// - A `%` not followed by two hex digits is kept as-is, including a trailing `%`
/// - If the decoded bytes are not valid UTF-8, the segment is returned
///   undecoded so the original escapes survive a build
///
/// Returns `Cow::Borrowed` when the input has nothing to decode.
///
/// # Examples
///
/// ```
/// use rhtmx_pattern::percent_decode;
/// use std::borrow::Cow;
///
/// assert_eq!(percent_decode("%61%62"), "ab");
/// assert_eq!(percent_decode("%7b"), "{");
/// assert_eq!(percent_decode("%"), "%");
/// assert_eq!(percent_decode("100%zz"), "100%zz");
///
/// assert!(matches!(percent_decode("plain"), Cow::Borrowed("plain")));
/// ```
pub fn percent_decode(segment: &str) -> Cow<'_, str> {
    // Fast path: no escapes at all
    if !segment.contains('%') {
        return Cow::Borrowed(segment);
    }

    match urlencoding::decode_binary(segment.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(segment),
        Cow::Owned(bytes) => match String::from_utf8(bytes) {
            Ok(decoded) => Cow::Owned(decoded),
            Err(_) => Cow::Borrowed(segment),
        },
    }
}
