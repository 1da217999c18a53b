//! crates/logging/src/config.rs
//! Console backend configuration.

use crate::env::EnvToggle;
use crate::verbosity::ConsoleVerbosity;

/// Subsystem name used when none is configured.
pub const DEFAULT_CONSOLE_SUBSYSTEM: &str = "console logger";

/// Process stream the console backend writes to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConsoleStream {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
}

/// Immutable settings for a [`ConsoleBackend`](crate::ConsoleBackend).
///
/// The defaults render detailed, colored output to stdout under the
/// `console logger` subsystem with an empty category, and leave the backend
/// enabled. [`from_env`](Self::from_env) consults the default
/// [`EnvToggle`] instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConsoleConfig {
    /// Subsystem printed in detailed output.
    pub subsystem: String,
    /// Category printed in brackets after the subsystem; omitted when empty.
    pub category: String,
    /// Rendering tier.
    pub verbosity: ConsoleVerbosity,
    /// Destination stream.
    pub stream: ConsoleStream,
    /// Wrap lines in ANSI colors when a terminal is attached.
    pub enable_colors: bool,
    /// When `false` the backend is a complete no-op.
    pub enabled: bool,
}

impl ConsoleConfig {
    /// Creates the default configuration with the enablement read from the
    /// default environment toggle.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_toggle(&EnvToggle::default())
    }

    /// Sets the subsystem.
    #[must_use]
    pub fn with_subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.subsystem = subsystem.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the verbosity tier.
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: ConsoleVerbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Selects stderr (`true`) or stdout (`false`).
    #[must_use]
    pub const fn with_stderr(mut self, use_stderr: bool) -> Self {
        self.stream = if use_stderr {
            ConsoleStream::Stderr
        } else {
            ConsoleStream::Stdout
        };
        self
    }

    /// Enables or disables ANSI colors.
    #[must_use]
    pub const fn with_colors(mut self, enable_colors: bool) -> Self {
        self.enable_colors = enable_colors;
        self
    }

    /// Sets the enablement flag directly.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Reads `toggle` now and stores the result as the enablement flag.
    #[must_use]
    pub fn with_env_toggle(self, toggle: &EnvToggle) -> Self {
        let enabled = toggle.enabled();
        self.with_enabled(enabled)
    }

    /// Returns `true` when a backend built from this configuration produces output.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.enabled && !self.verbosity.is_silent()
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            subsystem: DEFAULT_CONSOLE_SUBSYSTEM.to_owned(),
            category: String::new(),
            verbosity: ConsoleVerbosity::Detailed,
            stream: ConsoleStream::Stdout,
            enable_colors: true,
            enabled: true,
        }
    }
}
