//! crates/logging/src/backend.rs
//! The single capability every backend implements.

use std::sync::Arc;

use crate::level::LogLevel;
use crate::metadata::Metadata;

/// A concrete strategy for turning log events into output.
///
/// This is the only method a backend has to provide. The facade calls in
/// [`Logger`](crate::Logger) all funnel into it.
///
/// Implementations must be safe to call from any number of threads at once
/// and must never surface errors to the caller: logging is best effort.
pub trait LogBackend: Send + Sync {
    /// Logs one event.
    fn log(&self, level: LogLevel, message: &str, metadata: Option<&Metadata>);
}

impl<T> LogBackend for &T
where
    T: LogBackend + ?Sized,
{
    fn log(&self, level: LogLevel, message: &str, metadata: Option<&Metadata>) {
        (**self).log(level, message, metadata);
    }
}

impl<T> LogBackend for Box<T>
where
    T: LogBackend + ?Sized,
{
    fn log(&self, level: LogLevel, message: &str, metadata: Option<&Metadata>) {
        (**self).log(level, message, metadata);
    }
}

impl<T> LogBackend for Arc<T>
where
    T: LogBackend + ?Sized,
{
    fn log(&self, level: LogLevel, message: &str, metadata: Option<&Metadata>) {
        (**self).log(level, message, metadata);
    }
}
