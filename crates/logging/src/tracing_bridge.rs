//! crates/logging/src/tracing_bridge.rs
//! Backend forwarding facade events into the tracing ecosystem.
//!
//! [`TracingBackend`] turns every facade call into a `tracing` event so that
//! applications already running a `tracing` subscriber can route facade
//! output through it. Levels map `Debug → DEBUG`, `Info → INFO`,
//! `Warning → WARN`, `Error → ERROR`; subsystem, category, and call-site
//! metadata travel as event fields.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{Logger, TracingBackend, call_site, init_tracing};
//!
//! init_tracing("info");
//! let backend = TracingBackend::new("svc", "http");
//! backend.info("request served", call_site!());
//! ```

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::backend::LogBackend;
use crate::level::LogLevel;
use crate::metadata::Metadata;

/// Forwards events to whichever `tracing` subscriber is active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TracingBackend {
    subsystem: String,
    category: String,
    enabled: bool,
}

impl TracingBackend {
    /// Creates an enabled backend tagging events with `subsystem` and `category`.
    pub fn new(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            category: category.into(),
            enabled: true,
        }
    }

    /// Sets the enablement flag, usually from an [`EnvToggle`](crate::EnvToggle).
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Tracing level an event at `level` is emitted with.
    #[must_use]
    pub const fn tracing_level(level: LogLevel) -> Level {
        match level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warning => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

macro_rules! forward_event {
    ($level:expr, $backend:expr, $message:expr, $function:expr, $file:expr, $line:expr) => {
        tracing::event!(
            $level,
            subsystem = %$backend.subsystem,
            category = %$backend.category,
            function = $function,
            file = $file,
            line = $line,
            "{}",
            $message
        )
    };
}

impl LogBackend for TracingBackend {
    fn log(&self, level: LogLevel, message: &str, metadata: Option<&Metadata>) {
        if !self.enabled {
            return;
        }
        let function = metadata.and_then(Metadata::function).unwrap_or_default();
        let file = metadata.and_then(Metadata::file).unwrap_or_default();
        let line = metadata.and_then(Metadata::line).unwrap_or_default();

        // `event!` needs a constant level, hence one arm per level.
        match level {
            LogLevel::Debug => forward_event!(Level::DEBUG, self, message, function, file, line),
            LogLevel::Info => forward_event!(Level::INFO, self, message, function, file, line),
            LogLevel::Warning => forward_event!(Level::WARN, self, message, function, file, line),
            LogLevel::Error => forward_event!(Level::ERROR, self, message, function, file, line),
        }
    }
}

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// When `RUST_LOG` is unset or invalid, `default_directive` (for example
/// `"info"` or `"my_app=debug"`) is used instead. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing(default_directive: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
