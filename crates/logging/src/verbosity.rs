//! crates/logging/src/verbosity.rs
//! Console verbosity tiers.

use std::fmt;
use std::str::FromStr;

/// How much detail the console backend renders for each event.
///
/// Each tier strictly adds to the previous one:
///
/// | tier | output |
/// |---|---|
/// | `Silent` | nothing |
/// | `Minimal` | `message` |
/// | `Standard` | `TIMESTAMP [LEVEL] message` |
/// | `Detailed` | `TIMESTAMP [LEVEL] subsystem[category] message in FUNCTION at FILE:LINE` |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConsoleVerbosity {
    /// No output at all.
    Silent,
    /// The message only.
    Minimal,
    /// Timestamp, level, and message.
    Standard,
    /// Everything, including subsystem, category, and call-site metadata.
    #[default]
    Detailed,
}

impl ConsoleVerbosity {
    /// Returns the lowercase tier name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Detailed => "detailed",
        }
    }

    /// Returns `true` for the tier that suppresses all output.
    #[must_use]
    pub const fn is_silent(self) -> bool {
        matches!(self, Self::Silent)
    }
}

impl fmt::Display for ConsoleVerbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`ConsoleVerbosity`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown console verbosity '{0}' (expected silent, minimal, standard, or detailed)")]
pub struct ParseVerbosityError(String);

impl FromStr for ConsoleVerbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "detailed" => Ok(Self::Detailed),
            _ => Err(ParseVerbosityError(s.to_owned())),
        }
    }
}
