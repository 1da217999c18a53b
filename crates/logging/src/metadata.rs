//! crates/logging/src/metadata.rs
//! Flat string metadata attached to log events.

use std::collections::BTreeMap;

/// Metadata key holding the name of the function that emitted the event.
pub const FUNCTION_KEY: &str = "function";
/// Metadata key holding the source file that emitted the event.
pub const FILE_KEY: &str = "file";
/// Metadata key holding the source line that emitted the event.
pub const LINE_KEY: &str = "line";

/// String-to-string metadata carried alongside a log message.
///
/// Backends only interpret the [`FUNCTION_KEY`], [`FILE_KEY`], and
/// [`LINE_KEY`] entries; any other key is passed through untouched. Keys are
/// kept sorted so iteration order is stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: BTreeMap<String, String>,
}

impl Metadata {
    /// Creates an empty metadata map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry and returns `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces an entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the `function` entry.
    #[must_use]
    pub fn function(&self) -> Option<&str> {
        self.get(FUNCTION_KEY)
    }

    /// Returns the `file` entry.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.get(FILE_KEY)
    }

    /// Returns the `line` entry.
    #[must_use]
    pub fn line(&self) -> Option<&str> {
        self.get(LINE_KEY)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no entries are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the `in FUNCTION at FILE:LINE` suffix used by the console and
    /// platform backends. Missing fields render as empty strings.
    #[must_use]
    pub fn location_suffix(&self) -> String {
        format!(
            "in {} at {}:{}",
            self.function().unwrap_or_default(),
            self.file().unwrap_or_default(),
            self.line().unwrap_or_default()
        )
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// Source location of a facade call.
///
/// Normally produced by [`call_site!`](crate::call_site), which fills in the
/// file, enclosing function path, and line of the invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl CallSite {
    /// Creates a call site from explicit parts.
    #[must_use]
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Source file of the call.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Fully qualified path of the calling function.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Source line of the call.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Converts the call site into the conventional metadata entries.
    #[must_use]
    pub fn to_metadata(&self) -> Metadata {
        Metadata::new()
            .with(FUNCTION_KEY, self.function)
            .with(FILE_KEY, self.file)
            .with(LINE_KEY, self.line.to_string())
    }
}

impl From<CallSite> for Metadata {
    fn from(site: CallSite) -> Self {
        site.to_metadata()
    }
}

/// Strips the helper-function segment and any closure segments from a type
/// name captured by [`call_site!`](crate::call_site).
///
/// `my_crate::worker::run::__f` becomes `my_crate::worker::run`, and
/// `my_crate::main::{{closure}}::__f` becomes `my_crate::main`.
#[doc(hidden)]
#[must_use]
pub fn trim_function_path(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__f").unwrap_or(raw);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_site_populates_conventional_keys() {
        let metadata = CallSite::new("net.go", "connect", 42).to_metadata();
        assert_eq!(metadata.function(), Some("connect"));
        assert_eq!(metadata.file(), Some("net.go"));
        assert_eq!(metadata.line(), Some("42"));
        assert_eq!(metadata.len(), 3);
    }

    #[test]
    fn location_suffix_defaults_missing_fields_to_empty() {
        let metadata = Metadata::new().with(FUNCTION_KEY, "connect");
        assert_eq!(metadata.location_suffix(), "in connect at :");
        assert_eq!(Metadata::new().location_suffix(), "in  at :");
    }

    #[test]
    fn collects_from_pairs_and_keeps_key_order() {
        let metadata: Metadata = [("line", "7"), ("file", "a.rs"), ("extra", "x")]
            .into_iter()
            .collect();
        let keys: Vec<_> = metadata.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["extra", "file", "line"]);
    }

    #[test]
    fn insert_replaces_existing_value() {
        let mut metadata = Metadata::new().with(LINE_KEY, "1");
        assert_eq!(metadata.insert(LINE_KEY, "2"), Some("1".to_owned()));
        assert_eq!(metadata.line(), Some("2"));
        metadata.extend([("file", "b.rs")]);
        assert_eq!(metadata.file(), Some("b.rs"));
    }

    #[test]
    fn trim_function_path_drops_helper_and_closures() {
        assert_eq!(trim_function_path("app::worker::run::__f"), "app::worker::run");
        assert_eq!(
            trim_function_path("app::main::{{closure}}::{{closure}}::__f"),
            "app::main"
        );
        assert_eq!(trim_function_path("plain"), "plain");
    }

    #[test]
    fn call_site_macro_names_enclosing_function() {
        let site = crate::call_site!();
        assert!(site.function().ends_with("call_site_macro_names_enclosing_function"));
        assert!(site.file().ends_with("metadata.rs"));
        assert!(site.line() > 0);
    }
}
