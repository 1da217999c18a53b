//! crates/logging/src/capture.rs
//! In-memory capture backend for asserting on emitted logs.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::{Instant, sleep};

use crate::backend::LogBackend;
use crate::level::LogLevel;
use crate::metadata::Metadata;

/// Interval between checks performed by [`CaptureBackend::wait_for_log`].
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Timeout conventionally used with [`CaptureBackend::wait_for_log`].
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(1);

/// One captured event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedLog {
    /// Level the event was logged at.
    pub level: LogLevel,
    /// The message, exactly as passed to the backend.
    pub message: String,
}

/// Backend that records every event in memory.
///
/// Entries are kept in insertion order, duplicates included, until
/// [`clear_logs`](Self::clear_logs) is called. Metadata is accepted but not
/// stored. All reads and writes go through one mutex, so concurrent callers
/// always observe whole entries. Appends made by one thread keep their
/// relative order; the interleaving between threads is whatever order the
/// lock was acquired in.
///
/// # Examples
///
/// ```
/// use logging::{CaptureBackend, LogLevel, Logger, call_site};
///
/// let capture = CaptureBackend::new();
/// capture.info("user logged in", call_site!());
/// capture.error("quota exceeded", call_site!());
///
/// assert_eq!(capture.total_log_count(), 2);
/// assert!(capture.has_log(LogLevel::Info, "logged in"));
/// assert!(capture.verify_log_sequence(&[LogLevel::Info, LogLevel::Error]));
/// ```
#[derive(Debug, Default)]
pub struct CaptureBackend {
    entries: Mutex<Vec<CapturedLog>>,
}

impl CaptureBackend {
    /// Creates an empty capture backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedLog>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn with_entries<R>(&self, op: impl FnOnce(&[CapturedLog]) -> R) -> R {
        let guard = self.lock();
        op(guard.as_slice())
    }

    /// Snapshot of every captured entry, oldest first.
    #[must_use]
    pub fn log_calls(&self) -> Vec<CapturedLog> {
        self.with_entries(<[CapturedLog]>::to_vec)
    }

    /// Removes every captured entry.
    pub fn clear_logs(&self) {
        self.lock().clear();
    }

    /// Total number of captured entries.
    #[must_use]
    pub fn total_log_count(&self) -> usize {
        self.with_entries(<[CapturedLog]>::len)
    }

    /// Number of entries captured at `level`.
    #[must_use]
    pub fn log_count(&self, level: LogLevel) -> usize {
        self.with_entries(|entries| entries.iter().filter(|e| e.level == level).count())
    }

    /// Returns `true` if anything was captured at `level`.
    #[must_use]
    pub fn has_logs(&self, level: LogLevel) -> bool {
        self.with_entries(|entries| entries.iter().any(|e| e.level == level))
    }

    /// Returns `true` if any debug entry was captured.
    #[must_use]
    pub fn has_debug_logs(&self) -> bool {
        self.has_logs(LogLevel::Debug)
    }

    /// Returns `true` if any info entry was captured.
    #[must_use]
    pub fn has_info_logs(&self) -> bool {
        self.has_logs(LogLevel::Info)
    }

    /// Returns `true` if any warning entry was captured.
    #[must_use]
    pub fn has_warning_logs(&self) -> bool {
        self.has_logs(LogLevel::Warning)
    }

    /// Returns `true` if any error entry was captured.
    #[must_use]
    pub fn has_error_logs(&self) -> bool {
        self.has_logs(LogLevel::Error)
    }

    /// Returns `true` if an entry at `level` contains `substring`.
    #[must_use]
    pub fn has_log(&self, level: LogLevel, substring: &str) -> bool {
        self.has_log_matching(level, |message| message.contains(substring))
    }

    /// Returns `true` if an entry at `level` satisfies `predicate`.
    ///
    /// The predicate runs while the store is locked and must not log to this
    /// backend.
    pub fn has_log_matching<P>(&self, level: LogLevel, mut predicate: P) -> bool
    where
        P: FnMut(&str) -> bool,
    {
        self.with_entries(|entries| {
            entries
                .iter()
                .any(|e| e.level == level && predicate(&e.message))
        })
    }

    /// Messages captured at `level`, oldest first.
    #[must_use]
    pub fn log_messages(&self, level: LogLevel) -> Vec<String> {
        self.with_entries(|entries| {
            entries
                .iter()
                .filter(|e| e.level == level)
                .map(|e| e.message.clone())
                .collect()
        })
    }

    /// Every captured message regardless of level, oldest first.
    #[must_use]
    pub fn all_log_messages(&self) -> Vec<String> {
        self.with_entries(|entries| entries.iter().map(|e| e.message.clone()).collect())
    }

    /// The most recent entry, if any.
    #[must_use]
    pub fn last_log(&self) -> Option<CapturedLog> {
        self.with_entries(|entries| entries.last().cloned())
    }

    /// Returns `true` if the captured levels are exactly `expected`, in order.
    #[must_use]
    pub fn verify_log_sequence(&self, expected: &[LogLevel]) -> bool {
        self.with_entries(|entries| {
            entries.len() == expected.len()
                && entries.iter().zip(expected).all(|(e, level)| e.level == *level)
        })
    }

    /// Returns `true` if the last `expected.len()` captured levels equal
    /// `expected`.
    ///
    /// Fewer captured entries than expected levels yields `false`; an empty
    /// expectation always holds.
    #[must_use]
    pub fn verify_last_logs(&self, expected: &[LogLevel]) -> bool {
        self.with_entries(|entries| {
            let Some(start) = entries.len().checked_sub(expected.len()) else {
                return false;
            };
            entries[start..]
                .iter()
                .zip(expected)
                .all(|(e, level)| e.level == *level)
        })
    }

    /// Waits until an entry at `level` containing `substring` is captured.
    ///
    /// Polls every [`DEFAULT_POLL_INTERVAL`]. Returns `true` as soon as a
    /// match is seen and `false` once `timeout` has elapsed without one.
    /// The lock is released while sleeping, so other tasks and threads can
    /// keep logging. Must be awaited inside a Tokio runtime with the time
    /// driver enabled.
    pub async fn wait_for_log(&self, level: LogLevel, substring: &str, timeout: Duration) -> bool {
        self.wait_for_log_with_interval(level, substring, timeout, DEFAULT_POLL_INTERVAL)
            .await
    }

    /// [`wait_for_log`](Self::wait_for_log) with an explicit polling interval.
    ///
    /// A zero interval is treated as one millisecond so the task still yields
    /// between checks.
    pub async fn wait_for_log_with_interval(
        &self,
        level: LogLevel,
        substring: &str,
        timeout: Duration,
        interval: Duration,
    ) -> bool {
        let interval = interval.max(Duration::from_millis(1));
        // An unrepresentable deadline means waiting without limit.
        let deadline = Instant::now().checked_add(timeout);

        loop {
            if self.has_log(level, substring) {
                return true;
            }
            let remaining = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return false;
                    }
                    deadline - now
                }
                None => interval,
            };
            sleep(interval.min(remaining)).await;
        }
    }
}

impl LogBackend for CaptureBackend {
    fn log(&self, level: LogLevel, message: &str, _metadata: Option<&Metadata>) {
        self.lock().push(CapturedLog {
            level,
            message: message.to_owned(),
        });
    }
}
