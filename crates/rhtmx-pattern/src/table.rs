//! Named route table loaded from TOML
//!
//! ```toml
//! [routes]
//! "user.show" = "GET /users/{id}"
//! "docs.page" = "/docs/{path...}"
//! ```
//!
//! Every pattern is parsed when the table is loaded, so grammar errors surface
//! at startup and never at request time.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::build::{build, build_named};
use crate::error::TableError;
use crate::pattern::{parse_pattern, Pattern};

/// On-disk shape of a route table file
#[derive(Debug, Default, Deserialize)]
struct RouteTableFile {
    #[serde(default)]
    routes: BTreeMap<String, String>,
}

/// Parsed patterns keyed by route name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteTable {
    routes: BTreeMap<String, Pattern>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a route table from a TOML string
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_pattern::RouteTable;
    ///
    /// let table = RouteTable::from_toml_str(r#"
    ///     [routes]
    ///     "user.show" = "GET /users/{id}"
    /// "#).unwrap();
    ///
    /// assert_eq!(table.url_for("user.show", &["42"]).unwrap(), "/users/42");
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, TableError> {
        let file: RouteTableFile = toml::from_str(content)?;

        let routes = file
            .routes
            .into_iter()
            .map(|(name, raw)| match parse_pattern(&raw) {
                Ok(pattern) => Ok((name, pattern)),
                Err(source) => Err(TableError::InvalidRoute { name, source }),
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Self { routes })
    }

    /// Loads a route table from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_toml_str(&content)?;
        info!(path = %path.display(), routes = table.len(), "loaded route table");
        Ok(table)
    }

    /// Adds or replaces a route (builder style)
    pub fn with_route(mut self, name: impl Into<String>, pattern: Pattern) -> Self {
        self.insert(name, pattern);
        self
    }

    /// Adds or replaces a route, returning the previous pattern
    pub fn insert(&mut self, name: impl Into<String>, pattern: Pattern) -> Option<Pattern> {
        self.routes.insert(name.into(), pattern)
    }

    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.routes.get(name)
    }

    /// Route names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.routes.keys().map(String::as_str)
    }

    /// `(name, pattern)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Pattern)> + '_ {
        self.routes.iter().map(|(name, pattern)| (name.as_str(), pattern))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Reverses a named route with positional values
    pub fn url_for<S: AsRef<str>>(&self, name: &str, values: &[S]) -> Result<String, TableError> {
        let pattern = self.lookup(name)?;
        Ok(build(pattern, values)?)
    }

    /// Reverses a named route with `(wildcard, value)` pairs
    ///
    /// ```
    /// use rhtmx_pattern::{Pattern, RouteTable};
    ///
    /// let table = RouteTable::new()
    ///     .with_route("post.show", Pattern::parse("/posts/{year}/{slug}").unwrap());
    ///
    /// let url = table
    ///     .url_for_params("post.show", &[("year", "2024"), ("slug", "hello-world")])
    ///     .unwrap();
    /// assert_eq!(url, "/posts/2024/hello-world");
    /// ```
    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Result<String, TableError> {
        let pattern = self.lookup(name)?;
        let params: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Ok(build_named(pattern, &params)?)
    }

    fn lookup(&self, name: &str) -> Result<&Pattern, TableError> {
        self.routes
            .get(name)
            .ok_or_else(|| TableError::UnknownRoute(name.to_string()))
    }
}

impl FromIterator<(String, Pattern)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (String, Pattern)>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::error::{BuildError, PatternError};

    const TABLE: &str = r#"
        [routes]
        "home" = "/{$}"
        "user.show" = "GET /users/{id}"
        "docs.page" = "/docs/{path...}"
        "static" = "cdn.example.com/assets/"
    "#;

    #[test]
    fn test_load_table() {
        let table = RouteTable::from_toml_str(TABLE).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.names().collect::<Vec<_>>(),
            vec!["docs.page", "home", "static", "user.show"]
        );
        assert_eq!(table.get("user.show").unwrap().method(), Some("GET"));
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::from_toml_str("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_invalid_route_is_named() {
        let err = RouteTable::from_toml_str("[routes]\nbad = \"/{$}/x\"\n").unwrap_err();
        match err {
            TableError::InvalidRoute { name, source } => {
                assert_eq!(name, "bad");
                assert!(matches!(source, PatternError::EndAnchorNotLast { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_toml() {
        let err = RouteTable::from_toml_str("[routes\n").unwrap_err();
        assert!(matches!(err, TableError::Toml(_)));
    }

    #[test]
    fn test_url_for() {
        let table = RouteTable::from_toml_str(TABLE).unwrap();
        assert_eq!(table.url_for("home", &[] as &[&str]).unwrap(), "/");
        assert_eq!(table.url_for("docs.page", &["a/b.md"]).unwrap(), "/docs/a/b.md");
        assert_eq!(
            table.url_for("static", &["app.js"]).unwrap(),
            "cdn.example.com/assets/app.js"
        );
    }

    #[test]
    fn test_url_for_errors() {
        let table = RouteTable::from_toml_str(TABLE).unwrap();

        let err = table.url_for("nope", &["1"]).unwrap_err();
        assert!(matches!(err, TableError::UnknownRoute(name) if name == "nope"));

        let err = table.url_for("user.show", &["1", "2"]).unwrap_err();
        assert!(matches!(err, TableError::Build(BuildError::TooMany { got: 2, used: 1, .. })));
    }

    #[test]
    fn test_url_for_params() {
        let table = RouteTable::from_toml_str(TABLE).unwrap();
        assert_eq!(table.url_for_params("user.show", &[("id", "7")]).unwrap(), "/users/7");
        assert!(table.url_for_params("user.show", &[]).is_err());
    }

    #[test]
    fn test_insert_and_collect() {
        let mut table: RouteTable = [("a".to_string(), Pattern::parse("/a").unwrap())]
            .into_iter()
            .collect();
        let previous = table.insert("a", Pattern::parse("/b").unwrap());
        assert_eq!(previous.unwrap().as_str(), "/a");
        assert_eq!(table.url_for("a", &[] as &[&str]).unwrap(), "/b");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TABLE.as_bytes()).unwrap();

        let table = RouteTable::from_file(file.path()).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.url_for("user.show", &["3"]).unwrap(), "/users/3");
    }

    #[test]
    fn test_from_file_missing() {
        let missing = {
            let dir = tempfile::tempdir().unwrap();
            dir.path().join("routes.toml")
        };

        let err = RouteTable::from_file(&missing).unwrap_err();
        assert!(matches!(err, TableError::Io { ref path, .. } if path == &missing));
    }
}
