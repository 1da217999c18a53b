//! crates/logging/src/facade.rs
//! Convenience calls layered over [`LogBackend`].

use crate::backend::LogBackend;
use crate::level::LogLevel;
use crate::metadata::CallSite;

/// Leveled convenience calls available on every backend.
///
/// The trait is implemented for all [`LogBackend`] types, trait objects
/// included. Each call converts the [`CallSite`] into `function`, `file`, and
/// `line` metadata and delegates to [`LogBackend::log`]. The
/// [`debug_log!`](crate::debug_log) family of macros fills in the call site
/// automatically.
pub trait Logger: LogBackend {
    /// Logs a debug message.
    fn debug(&self, message: &str, site: CallSite) {
        self.log(LogLevel::Debug, message, Some(&site.to_metadata()));
    }

    /// Logs an info message.
    fn info(&self, message: &str, site: CallSite) {
        self.log(LogLevel::Info, message, Some(&site.to_metadata()));
    }

    /// Logs a warning message.
    fn warning(&self, message: &str, site: CallSite) {
        self.log(LogLevel::Warning, message, Some(&site.to_metadata()));
    }

    /// Logs an error message.
    fn error(&self, message: &str, site: CallSite) {
        self.log(LogLevel::Error, message, Some(&site.to_metadata()));
    }
}

impl<T> Logger for T where T: LogBackend + ?Sized {}
