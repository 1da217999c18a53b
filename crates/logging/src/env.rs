//! crates/logging/src/env.rs
//! Environment kill switch for backends.

/// Environment variable consulted when no other key is configured.
pub const DEFAULT_ENV_KEY: &str = "DisableLogger";

/// Reports whether `value` asks for logging to be disabled.
///
/// `true`, `1`, and `yes` disable logging; the comparison ignores ASCII case.
/// Every other value, including the empty string, leaves logging enabled.
#[must_use]
pub fn is_disable_value(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1" || value.eq_ignore_ascii_case("yes")
}

/// Environment toggle that disables a backend instance entirely.
///
/// The toggle only names the variable. Reading it is an explicit step taken
/// once by whoever builds the backend, and the resulting flag is passed to
/// the backend's configuration, so a backend never re-reads the environment
/// during its lifetime.
///
/// # Examples
///
/// ```
/// use logging::EnvToggle;
///
/// let toggle = EnvToggle::new("MY_APP_DISABLE_LOGS");
/// let enabled = toggle.enabled_with(|_| Some("YES".to_owned()));
/// assert!(!enabled);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnvToggle {
    key: String,
}

impl EnvToggle {
    /// Creates a toggle reading the given environment variable.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Name of the environment variable.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the process environment and returns `true` unless the variable
    /// holds a disabling value.
    ///
    /// Variables that are unset or not valid Unicode leave logging enabled.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled_with(|key| std::env::var(key).ok())
    }

    /// Same as [`enabled`](Self::enabled) with an injected lookup.
    #[must_use]
    pub fn enabled_with<F>(&self, lookup: F) -> bool
    where
        F: FnOnce(&str) -> Option<String>,
    {
        lookup(&self.key).is_none_or(|value| !is_disable_value(&value))
    }
}

impl Default for EnvToggle {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabling_values_ignore_case() {
        for value in ["true", "TRUE", "True", "1", "yes", "YES", "yEs"] {
            assert!(is_disable_value(value), "{value} should disable");
        }
    }

    #[test]
    fn other_values_keep_logging_enabled() {
        for value in ["", "false", "0", "no", "on", " true", "2", "y"] {
            assert!(!is_disable_value(value), "{value} should not disable");
        }
    }

    #[test]
    fn default_key_is_disable_logger() {
        assert_eq!(EnvToggle::default().key(), DEFAULT_ENV_KEY);
        assert_eq!(DEFAULT_ENV_KEY, "DisableLogger");
    }

    #[test]
    fn lookup_receives_configured_key() {
        let toggle = EnvToggle::new("CUSTOM_DISABLE");
        let enabled = toggle.enabled_with(|key| {
            assert_eq!(key, "CUSTOM_DISABLE");
            Some("1".to_owned())
        });
        assert!(!enabled);
    }

    #[test]
    fn missing_variable_means_enabled() {
        assert!(EnvToggle::new("X").enabled_with(|_| None));
        assert!(EnvToggle::new("LOGGING_TEST_VARIABLE_THAT_IS_NEVER_SET").enabled());
    }
}
