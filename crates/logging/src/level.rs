//! crates/logging/src/level.rs
//! Severity levels shared by every backend.

use std::fmt;
use std::str::FromStr;

/// Severity of a log event.
///
/// Levels are totally ordered, `Debug < Info < Warning < Error`, so backends
/// can filter with plain comparisons such as `level > LogLevel::Debug`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Diagnostic detail useful during development.
    Debug,
    /// Routine operational messages.
    Info,
    /// Something unexpected that the program recovered from.
    Warning,
    /// A failure the caller should know about.
    Error,
}

impl LogLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warning, Self::Error];

    /// Returns the lowercase level name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Returns the uppercase label rendered inside console brackets, e.g. `WARNING`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`LogLevel`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown log level '{input}' (expected debug, info, warning, or error)")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError {
                input: s.to_owned(),
            }),
        }
    }
}
