//! # RHTMX Pattern
//!
//! A small route-pattern grammar and its dual, URL reversal:
//! - Optional method (`GET /users/{id}`)
//! - Optional host (`example.com/a/{id}`)
//! - Single wildcards (`/users/{id}`)
//! - Rest wildcards (`/docs/{path...}`)
//! - End anchors (`/posts/{$}`)
//! - Percent-decoded literals (`/%61%62` is `/ab`)
//!
//! ## Functional Approach
//!
//! Parsing and building are pure functions over immutable inputs:
//! - **Sum type** for segments ([`Segment`]), matched exhaustively
//! - **Zero-copy** decoding with `Cow<'_, str>` when a literal has no escapes
//! - **No shared state**: every call allocates and returns its own values,
//!   so both are safe to call from any number of threads
//!
//! ## Data Flow
//!
//! ```text
//! raw string → parse_pattern → Pattern → build(+values) → request path
//! ```
//!
//! ## Example
//!
//! ```
//! use rhtmx_pattern::{build, parse_pattern};
//!
//! let pattern = parse_pattern("/{w1}/lit/{w2}").unwrap();
//! assert_eq!(build(&pattern, &["111", "foo"]).unwrap(), "/111/lit/foo");
//!
//! let err = build(&pattern, &["111"]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "not enough values for pattern \"/{w1}/lit/{w2}\", expect at least: 2"
//! );
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod build;
mod decode;
mod error;
pub mod pattern;
mod table;

// ============================================================================
// Re-exports
// ============================================================================

pub use build::{build, build_named};
pub use decode::percent_decode;
pub use error::{BuildError, BuildErrorKind, PatternError, TableError};
pub use pattern::{classify_segment, parse_pattern, Arity, Pattern, Segment};
pub use table::RouteTable;
