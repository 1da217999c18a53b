//! crates/logging/src/manager.rs
//! Owned, cloneable handle over any backend.

use std::fmt;
use std::sync::Arc;

use crate::backend::LogBackend;
use crate::config::ConsoleConfig;
use crate::level::LogLevel;
use crate::metadata::Metadata;
use crate::sink::ConsoleBackend;

/// Cheaply cloneable logger handle wrapping a shared backend.
///
/// `LoggerManager` is itself a [`LogBackend`], so the
/// [`Logger`](crate::Logger) convenience calls and the
/// [`info_log!`](crate::info_log) family work on it directly. Components
/// that need logging can take a `LoggerManager` without caring which backend
/// sits behind it.
///
/// # Examples
///
/// ```
/// use logging::{ConsoleConfig, ConsoleVerbosity, LoggerManager, info_log};
///
/// let logger = LoggerManager::console(
///     ConsoleConfig::default().with_verbosity(ConsoleVerbosity::Standard),
/// );
/// info_log!(logger, "listening on port {}", 8080);
/// ```
#[derive(Clone)]
pub struct LoggerManager {
    backend: Arc<dyn LogBackend>,
}

impl LoggerManager {
    /// Wraps `backend`.
    pub fn new<B>(backend: B) -> Self
    where
        B: LogBackend + 'static,
    {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Wraps an already shared backend, keeping the caller's handle usable.
    ///
    /// Tests use this to keep a typed handle to a capture backend while the
    /// code under test logs through the manager.
    #[must_use]
    pub fn from_shared(backend: Arc<dyn LogBackend>) -> Self {
        Self { backend }
    }

    /// Creates a manager backed by a [`ConsoleBackend`].
    #[must_use]
    pub fn console(config: ConsoleConfig) -> Self {
        Self::new(ConsoleBackend::new(config))
    }

    /// Returns the shared backend.
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn LogBackend> {
        &self.backend
    }
}

impl LogBackend for LoggerManager {
    fn log(&self, level: LogLevel, message: &str, metadata: Option<&Metadata>) {
        self.backend.log(level, message, metadata);
    }
}

impl fmt::Debug for LoggerManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerManager").finish_non_exhaustive()
    }
}
