//! crates/logging-sink/src/native.rs
//! Seam between the platform backend and the OS logging transport.

use std::fmt;
use std::sync::Arc;

/// Severity understood by native logging transports.
///
/// `Default` is the transport's ordinary "notice" level and `Fault` its most
/// prominent one; the platform backend uses them for warnings.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NativeSeverity {
    /// Developer diagnostics.
    Debug,
    /// Informational messages.
    Info,
    /// Notable but ordinary conditions.
    Default,
    /// Errors.
    Error,
    /// Conditions that need attention.
    Fault,
}

impl NativeSeverity {
    /// Lowercase name of the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Default => "default",
            Self::Error => "error",
            Self::Fault => "fault",
        }
    }
}

impl fmt::Display for NativeSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry handed to a [`NativeLog`] transport.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NativeRecord<'a> {
    /// Subsystem the backend was configured with.
    pub subsystem: &'a str,
    /// Category the backend was configured with.
    pub category: &'a str,
    /// Mapped severity.
    pub severity: NativeSeverity,
    /// Final text, already including any location suffix.
    pub text: &'a str,
}

/// A native log transport.
///
/// Implementations must not fail visibly; anything the transport cannot
/// deliver is dropped.
pub trait NativeLog: Send + Sync {
    /// Delivers one record.
    fn write(&self, record: &NativeRecord<'_>);
}

impl<T: NativeLog + ?Sized> NativeLog for Arc<T> {
    fn write(&self, record: &NativeRecord<'_>) {
        (**self).write(record);
    }
}

impl<T: NativeLog + ?Sized> NativeLog for Box<T> {
    fn write(&self, record: &NativeRecord<'_>) {
        (**self).write(record);
    }
}
