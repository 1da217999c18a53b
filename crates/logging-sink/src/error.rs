//! crates/logging-sink/src/error.rs
//! Configuration errors raised when building a platform backend.

use thiserror::Error;

/// Reasons a [`PlatformLogConfig`](crate::PlatformLogConfig) is rejected.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// The subsystem is empty or only whitespace.
    #[error("platform log subsystem must not be empty")]
    EmptySubsystem,
    /// The category is empty or only whitespace.
    #[error("platform log category must not be empty")]
    EmptyCategory,
}
