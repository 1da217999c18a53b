//! crates/logging-sink/src/compose.rs
//! Default backend selection for applications.

use logging::{ConsoleConfig, ConsoleVerbosity, LoggerManager};

use crate::config::PlatformLogConfig;
use crate::error::ConfigError;
#[cfg(unix)]
use crate::platform::PlatformLogBackend;

/// Builds the default logger for an application.
///
/// On Unix the events go to syslog through a
/// [`PlatformLogBackend`](crate::PlatformLogBackend); elsewhere
/// a console backend at [`ConsoleVerbosity::Standard`] is used. Either way the
/// `DisableLogger` environment toggle is read once, here.
///
/// # Errors
///
/// [`ConfigError`] when `subsystem` or `category` is blank. The console
/// fallback is validated the same way so behavior does not depend on the
/// platform.
pub fn default_logger(subsystem: &str, category: &str) -> Result<LoggerManager, ConfigError> {
    let config = PlatformLogConfig::from_env(subsystem, category);
    config.validate()?;

    #[cfg(unix)]
    {
        tracing::debug!(subsystem, category, "selected syslog backend");
        PlatformLogBackend::syslog(config).map(LoggerManager::new)
    }

    #[cfg(not(unix))]
    {
        tracing::debug!(subsystem, category, "selected console backend");
        Ok(LoggerManager::console(console_fallback(&config)))
    }
}

/// Console configuration mirroring a platform configuration.
#[must_use]
pub fn console_fallback(config: &PlatformLogConfig) -> ConsoleConfig {
    ConsoleConfig::default()
        .with_subsystem(config.subsystem.clone())
        .with_category(config.category.clone())
        .with_verbosity(ConsoleVerbosity::Standard)
        .with_enabled(config.enabled)
}
