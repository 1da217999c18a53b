//! crates/logging-sink/src/config.rs
//! Configuration for the platform log backend.

use logging::EnvToggle;

use crate::error::ConfigError;

/// Settings for a [`PlatformLogBackend`](crate::PlatformLogBackend).
///
/// Subsystem and category identify the emitting component to the native
/// transport and must both be non-empty after trimming whitespace; the check
/// happens in [`validate`](Self::validate), which the backend constructor
/// calls.
///
/// # Examples
///
/// ```
/// use logging_sink::PlatformLogConfig;
///
/// let config = PlatformLogConfig::new("com.example.app", "network")
///     .with_enhanced_warnings(true)
///     .with_verbose_metadata(false);
/// assert!(config.validate().is_ok());
/// assert!(PlatformLogConfig::new(" ", "network").validate().is_err());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformLogConfig {
    /// Emitting subsystem, usually a reverse-DNS application identifier.
    pub subsystem: String,
    /// Category within the subsystem.
    pub category: String,
    /// Map warnings to [`NativeSeverity::Fault`](crate::NativeSeverity::Fault)
    /// instead of `Default`.
    pub enhanced_warnings: bool,
    /// Append call-site metadata and keep debug events. Defaults to `true` in
    /// debug builds and `false` in release builds.
    pub verbose_metadata: bool,
    /// When `false` the backend never touches the transport.
    pub enabled: bool,
}

impl PlatformLogConfig {
    /// Creates a configuration with build-dependent defaults.
    pub fn new(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: category.into(),
            enhanced_warnings: false,
            verbose_metadata: cfg!(debug_assertions),
            enabled: true,
        }
    }

    /// Like [`new`](Self::new) with the enablement read from the default
    /// environment toggle.
    pub fn from_env(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self::new(subsystem, category).with_env_toggle(&EnvToggle::default())
    }

    /// Sets warning escalation.
    #[must_use]
    pub const fn with_enhanced_warnings(mut self, enhanced: bool) -> Self {
        self.enhanced_warnings = enhanced;
        self
    }

    /// Overrides the build-dependent metadata behavior.
    #[must_use]
    pub const fn with_verbose_metadata(mut self, verbose: bool) -> Self {
        self.verbose_metadata = verbose;
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

    /// Checks that subsystem and category are non-blank.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptySubsystem`] or [`ConfigError::EmptyCategory`],
    /// subsystem checked first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subsystem.trim().is_empty() {
            return Err(ConfigError::EmptySubsystem);
        }
        if self.category.trim().is_empty() {
            return Err(ConfigError::EmptyCategory);
        }
        Ok(())
    }
}
