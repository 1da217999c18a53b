#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` connects the `logging` facade to the operating system's
//! native log. [`PlatformLogBackend`] maps facade levels onto
//! [`NativeSeverity`] values and hands each event to a [`NativeLog`]
//! transport; on Unix the bundled transport is [`syslog::SyslogSink`].
//!
//! # Design
//!
//! The backend never calls the OS directly. It builds a [`NativeRecord`]
//! and passes it through the [`NativeLog`] seam, so tests can substitute a
//! recording transport and other platforms can supply their own. Validation
//! of subsystem and category happens once in [`PlatformLogBackend::new`];
//! an invalid configuration never yields a backend.
//!
//! # Invariants
//!
//! - Enablement is fixed when the backend is built.
//! - With `verbose_metadata` off, debug events never reach the transport.
//! - Text is forwarded verbatim; nothing is redacted.
//!
//! # Errors
//!
//! Construction returns [`ConfigError`] for blank subsystem or category.
//! Logging itself never fails; undeliverable syslog messages are dropped and
//! reported through `tracing`.
//!
//! # Examples
//!
//! ```no_run
//! use logging::{Logger, call_site};
//!
//! let logger = logging_sink::default_logger("com.example.app", "network")?;
//! logger.info("connected", call_site!());
//! # Ok::<(), logging_sink::ConfigError>(())
//! ```

mod compose;
mod config;
mod error;
mod native;
mod platform;

#[cfg(unix)]
#[allow(unsafe_code)]
pub mod syslog;

pub use compose::{console_fallback, default_logger};
pub use config::PlatformLogConfig;
pub use error::ConfigError;
pub use native::{NativeLog, NativeRecord, NativeSeverity};
pub use platform::PlatformLogBackend;
