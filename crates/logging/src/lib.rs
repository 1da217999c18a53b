#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `logging` is a small logging facade: callers emit leveled events through a
//! stable interface while an interchangeable backend decides how, or whether,
//! those events become visible. The crate ships the facade itself together
//! with the backends that need nothing beyond the standard streams:
//!
//! - [`ConsoleBackend`] renders events to stdout, stderr, or any injected
//!   writer using one of four [`ConsoleVerbosity`] tiers and optional ANSI
//!   colors.
//! - `CaptureBackend` (feature `test-support`) records events in memory so
//!   tests can assert on them, including an asynchronous
//!   `wait_for_log` for code that logs from background tasks.
//! - `TracingBackend` (feature `tracing`) forwards events into the `tracing`
//!   ecosystem.
//!
//! The native platform adapter lives in the `logging-sink` crate.
//!
//! # Design
//!
//! Every backend implements [`LogBackend`], a capability with a single
//! required method. The [`Logger`] trait layers the `debug`/`info`/`warning`/
//! `error` convenience calls on top through a blanket implementation, so a
//! backend never re-implements the facade and callers can hold either a
//! concrete backend, a `Box<dyn LogBackend>`, or a [`LoggerManager`].
//!
//! # Invariants
//!
//! - A backend's enablement is decided once, when it is constructed. The
//!   environment lookup ([`EnvToggle`]) happens at the composition root and
//!   its result is passed in explicitly.
//! - Logging never reports failures back to the caller; write errors are
//!   swallowed by the backend.
//! - No process-wide logging state exists: whoever builds a backend owns it.
//!
//! # Examples
//!
//! ```
//! use logging::{ConsoleBackend, ConsoleConfig, ConsoleVerbosity, Logger, call_site};
//!
//! let backend = ConsoleBackend::with_writer(
//!     ConsoleConfig::default().with_verbosity(ConsoleVerbosity::Minimal),
//!     Vec::new(),
//! );
//! backend.info("service ready", call_site!());
//! ```

mod backend;
mod config;
mod env;
mod facade;
mod level;
mod macros;
mod manager;
mod metadata;
mod sink;
mod verbosity;

#[cfg(any(test, feature = "test-support"))]
mod capture;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use backend::LogBackend;
pub use config::{ConsoleConfig, ConsoleStream, DEFAULT_CONSOLE_SUBSYSTEM};
pub use env::{DEFAULT_ENV_KEY, EnvToggle, is_disable_value};
pub use facade::Logger;
pub use level::{LogLevel, ParseLevelError};
pub use manager::LoggerManager;
pub use metadata::{CallSite, FILE_KEY, FUNCTION_KEY, LINE_KEY, Metadata, trim_function_path};
pub use sink::{ConsoleBackend, colorize, format_timestamp};
pub use verbosity::{ConsoleVerbosity, ParseVerbosityError};

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub use capture::{CaptureBackend, CapturedLog, DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT};

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use tracing_bridge::{TracingBackend, init_tracing};
