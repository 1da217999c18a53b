//! crates/logging-sink/src/syslog.rs
//! syslog(3) transport for the platform backend.
//!
//! Uses libc `openlog`/`syslog`/`closelog` directly rather than pulling in a
//! dedicated syslog crate. Messages are always passed through a `"%s"`
//! format so `%` in user text is never interpreted.

use std::ffi::CString;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::native::{NativeLog, NativeRecord, NativeSeverity};

/// Syslog facility codes matching the POSIX syslog(3) constants.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogFacility {
    /// Kernel messages (LOG_KERN).
    Kern = libc::LOG_KERN,
    /// User-level messages (LOG_USER), the default for applications.
    #[default]
    User = libc::LOG_USER,
    /// Mail system (LOG_MAIL).
    Mail = libc::LOG_MAIL,
    /// System daemons (LOG_DAEMON).
    Daemon = libc::LOG_DAEMON,
    /// Security/authorization messages (LOG_AUTH).
    Auth = libc::LOG_AUTH,
    /// Messages generated internally by syslogd (LOG_SYSLOG).
    Syslog = libc::LOG_SYSLOG,
    /// Line printer subsystem (LOG_LPR).
    Lpr = libc::LOG_LPR,
    /// Network news subsystem (LOG_NEWS).
    News = libc::LOG_NEWS,
    /// UUCP subsystem (LOG_UUCP).
    Uucp = libc::LOG_UUCP,
    /// Clock daemon (LOG_CRON).
    Cron = libc::LOG_CRON,
    /// Reserved for local use (LOG_LOCAL0).
    Local0 = libc::LOG_LOCAL0,
    /// Reserved for local use (LOG_LOCAL1).
    Local1 = libc::LOG_LOCAL1,
    /// Reserved for local use (LOG_LOCAL2).
    Local2 = libc::LOG_LOCAL2,
    /// Reserved for local use (LOG_LOCAL3).
    Local3 = libc::LOG_LOCAL3,
    /// Reserved for local use (LOG_LOCAL4).
    Local4 = libc::LOG_LOCAL4,
    /// Reserved for local use (LOG_LOCAL5).
    Local5 = libc::LOG_LOCAL5,
    /// Reserved for local use (LOG_LOCAL6).
    Local6 = libc::LOG_LOCAL6,
    /// Reserved for local use (LOG_LOCAL7).
    Local7 = libc::LOG_LOCAL7,
}

impl SyslogFacility {
    /// Every facility, in `<syslog.h>` order.
    pub const ALL: [Self; 18] = [
        Self::Kern,
        Self::User,
        Self::Mail,
        Self::Daemon,
        Self::Auth,
        Self::Syslog,
        Self::Lpr,
        Self::News,
        Self::Uucp,
        Self::Cron,
        Self::Local0,
        Self::Local1,
        Self::Local2,
        Self::Local3,
        Self::Local4,
        Self::Local5,
        Self::Local6,
        Self::Local7,
    ];

    /// Parses a facility name, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)]
    /// # {
    /// use logging_sink::syslog::SyslogFacility;
    ///
    /// assert_eq!(SyslogFacility::from_name("LOCAL3"), Some(SyslogFacility::Local3));
    /// assert_eq!(SyslogFacility::from_name("unknown"), None);
    /// # }
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|facility| facility.as_str().eq_ignore_ascii_case(name))
    }

    /// Lowercase facility name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kern => "kern",
            Self::User => "user",
            Self::Mail => "mail",
            Self::Daemon => "daemon",
            Self::Auth => "auth",
            Self::Syslog => "syslog",
            Self::Lpr => "lpr",
            Self::News => "news",
            Self::Uucp => "uucp",
            Self::Cron => "cron",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facility and ident passed to `openlog(3)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyslogConfig {
    facility: SyslogFacility,
    tag: String,
}

impl SyslogConfig {
    /// Creates a configuration; nothing is opened until [`open`](Self::open).
    pub fn new(facility: SyslogFacility, tag: impl Into<String>) -> Self {
        Self {
            facility,
            tag: tag.into(),
        }
    }

    /// Configured facility.
    #[must_use]
    pub const fn facility(&self) -> SyslogFacility {
        self.facility
    }

    /// Configured ident.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Opens a handle on the process syslog connection.
    ///
    /// The connection is shared: the first handle issues `openlog(3)` and
    /// the last one dropped issues `closelog(3)`, so a handle going away
    /// never strips the ident from the others. While a connection is open,
    /// later configurations do not change its facility. syslog(3) keeps the
    /// ident pointer, so the first tag opened in the process is reused for
    /// every reopen. A tag containing NUL falls back to the program name.
    #[must_use]
    pub fn open(&self) -> SyslogGuard {
        static IDENT: OnceLock<CString> = OnceLock::new();
        let ident = IDENT.get_or_init(|| CString::new(self.tag.as_str()).unwrap_or_default());

        CONNECTION.acquire(|| {
            // SAFETY: the ident lives in a static for the rest of the process.
            unsafe {
                libc::openlog(ident.as_ptr(), libc::LOG_PID, self.facility as libc::c_int);
            }
            tracing::debug!(facility = %self.facility, tag = %self.tag, "opened syslog connection");
        });

        SyslogGuard { _private: () }
    }
}

/// Number of live [`SyslogGuard`]s; open and close run under the lock.
struct SharedConnection {
    handles: Mutex<usize>,
}

impl SharedConnection {
    const fn new() -> Self {
        Self {
            handles: Mutex::new(0),
        }
    }

    fn acquire(&self, open: impl FnOnce()) {
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
        if *handles == 0 {
            open();
        }
        *handles += 1;
    }

    fn release(&self, close: impl FnOnce()) {
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
        *handles = handles.saturating_sub(1);
        if *handles == 0 {
            close();
        }
    }

    fn handles(&self) -> usize {
        *self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

static CONNECTION: SharedConnection = SharedConnection::new();

/// Syslog severities used by [`SyslogSink`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogPriority {
    /// Critical conditions (LOG_CRIT).
    Critical = libc::LOG_CRIT,
    /// Error conditions (LOG_ERR).
    Error = libc::LOG_ERR,
    /// Normal but significant condition (LOG_NOTICE).
    Notice = libc::LOG_NOTICE,
    /// Informational messages (LOG_INFO).
    Info = libc::LOG_INFO,
    /// Debug-level messages (LOG_DEBUG).
    Debug = libc::LOG_DEBUG,
}

impl From<NativeSeverity> for SyslogPriority {
    fn from(severity: NativeSeverity) -> Self {
        match severity {
            NativeSeverity::Debug => Self::Debug,
            NativeSeverity::Info => Self::Info,
            NativeSeverity::Default => Self::Notice,
            NativeSeverity::Error => Self::Error,
            NativeSeverity::Fault => Self::Critical,
        }
    }
}

/// Sends `message` to syslog(3) at `priority`.
///
/// Returns `false` without sending when the message contains a NUL byte.
pub fn syslog_message(priority: SyslogPriority, message: &str) -> bool {
    let Ok(c_message) = CString::new(message) else {
        return false;
    };

    // SAFETY: both pointers are valid NUL-terminated strings for the call.
    unsafe {
        libc::syslog(priority as libc::c_int, c"%s".as_ptr(), c_message.as_ptr());
    }
    true
}

/// Handle on the shared syslog connection; the last one dropped closes it.
#[derive(Debug)]
pub struct SyslogGuard {
    _private: (),
}

impl SyslogGuard {
    /// Whether the process syslog connection is currently open.
    #[must_use]
    pub fn is_connected() -> bool {
        CONNECTION.handles() > 0
    }
}

impl Drop for SyslogGuard {
    fn drop(&mut self) {
        CONNECTION.release(|| {
            // SAFETY: closelog has no preconditions.
            unsafe {
                libc::closelog();
            }
            tracing::debug!("closed syslog connection");
        });
    }
}

/// [`NativeLog`] transport writing `subsystem[category] text` lines to syslog.
///
/// Clones share one connection, closed when the last clone is dropped.
#[derive(Clone, Debug)]
pub struct SyslogSink {
    _guard: Arc<SyslogGuard>,
}

impl SyslogSink {
    /// Opens the connection described by `config`.
    #[must_use]
    pub fn open(config: &SyslogConfig) -> Self {
        Self {
            _guard: Arc::new(config.open()),
        }
    }

    /// Line sent for `record`.
    #[must_use]
    pub fn format_line(record: &NativeRecord<'_>) -> String {
        format!("{}[{}] {}", record.subsystem, record.category, record.text)
    }
}

impl NativeLog for SyslogSink {
    fn write(&self, record: &NativeRecord<'_>) {
        let line = Self::format_line(record);
        if !syslog_message(record.severity.into(), &line) {
            tracing::warn!(
                subsystem = record.subsystem,
                category = record.category,
                "dropped syslog message containing a NUL byte"
            );
        }
    }
}
