//! crates/logging-sink/src/platform.rs
//! Backend adapting facade events to a native log transport.

use std::fmt;
use std::sync::Arc;

use logging::{LogBackend, LogLevel, Metadata};

use crate::config::PlatformLogConfig;
use crate::error::ConfigError;
use crate::native::{NativeLog, NativeRecord, NativeSeverity};

/// Forwards events to a [`NativeLog`] transport.
///
/// Levels map `Debug → Debug`, `Info → Info`, `Warning → Default` (or
/// `Fault` with [`enhanced_warnings`](PlatformLogConfig::enhanced_warnings)),
/// `Error → Error`. With [`verbose_metadata`](PlatformLogConfig::verbose_metadata)
/// every level is forwarded and a supplied metadata map adds the
/// `in FUNCTION at FILE:LINE` suffix; without it debug events are dropped and
/// the bare message is sent. Text is forwarded verbatim.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use logging::{Logger, call_site};
/// use logging_sink::{NativeLog, NativeRecord, PlatformLogBackend, PlatformLogConfig};
///
/// #[derive(Default)]
/// struct Lines(Mutex<Vec<String>>);
///
/// impl NativeLog for Lines {
///     fn write(&self, record: &NativeRecord<'_>) {
///         self.0.lock().unwrap().push(record.text.to_owned());
///     }
/// }
///
/// let lines = Arc::new(Lines::default());
/// let backend = PlatformLogBackend::new(
///     PlatformLogConfig::new("app", "net").with_verbose_metadata(false),
///     lines.clone(),
/// )?;
/// backend.error("socket closed", call_site!());
/// assert_eq!(*lines.0.lock().unwrap(), ["socket closed"]);
/// # Ok::<(), logging_sink::ConfigError>(())
/// ```
pub struct PlatformLogBackend {
    config: PlatformLogConfig,
    sink: Arc<dyn NativeLog>,
}

impl PlatformLogBackend {
    /// Builds a backend writing to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`PlatformLogConfig::validate`].
    pub fn new<S>(config: PlatformLogConfig, sink: S) -> Result<Self, ConfigError>
    where
        S: NativeLog + 'static,
    {
        Self::from_shared(config, Arc::new(sink))
    }

    /// Builds a backend writing to an already shared transport.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`PlatformLogConfig::validate`].
    pub fn from_shared(
        config: PlatformLogConfig,
        sink: Arc<dyn NativeLog>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, sink })
    }

    /// Builds a backend on the process syslog connection with the `user`
    /// facility, using the subsystem as the syslog ident.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`PlatformLogConfig::validate`].
    #[cfg(unix)]
    pub fn syslog(config: PlatformLogConfig) -> Result<Self, ConfigError> {
        Self::syslog_with_facility(config, crate::syslog::SyslogFacility::default())
    }

    /// Builds a backend on the process syslog connection, logging to
    /// `facility` when this backend opens the connection.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`PlatformLogConfig::validate`].
    #[cfg(unix)]
    pub fn syslog_with_facility(
        config: PlatformLogConfig,
        facility: crate::syslog::SyslogFacility,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let sink = crate::syslog::SyslogSink::open(&crate::syslog::SyslogConfig::new(
            facility,
            config.subsystem.clone(),
        ));
        Ok(Self {
            config,
            sink: Arc::new(sink),
        })
    }

    /// The validated configuration.
    #[must_use]
    pub const fn config(&self) -> &PlatformLogConfig {
        &self.config
    }

    /// Native severity an event at `level` is sent with.
    #[must_use]
    pub const fn severity_for(&self, level: LogLevel) -> NativeSeverity {
        match level {
            LogLevel::Debug => NativeSeverity::Debug,
            LogLevel::Info => NativeSeverity::Info,
            LogLevel::Warning if self.config.enhanced_warnings => NativeSeverity::Fault,
            LogLevel::Warning => NativeSeverity::Default,
            LogLevel::Error => NativeSeverity::Error,
        }
    }

    /// Text sent for an event, or `None` when the event is suppressed.
    fn text_for(
        &self,
        level: LogLevel,
        message: &str,
        metadata: Option<&Metadata>,
    ) -> Option<String> {
        if !self.config.verbose_metadata {
            return (level > LogLevel::Debug).then(|| message.to_owned());
        }
        Some(match metadata {
            Some(metadata) => format!("{message} {}", metadata.location_suffix()),
            None => message.to_owned(),
        })
    }
}

impl LogBackend for PlatformLogBackend {
    fn log(&self, level: LogLevel, message: &str, metadata: Option<&Metadata>) {
        if !self.config.enabled {
            return;
        }
        let Some(text) = self.text_for(level, message, metadata) else {
            return;
        };
        self.sink.write(&NativeRecord {
            subsystem: &self.config.subsystem,
            category: &self.config.category,
            severity: self.severity_for(level),
            text: &text,
        });
    }
}

impl fmt::Debug for PlatformLogBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformLogBackend")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
