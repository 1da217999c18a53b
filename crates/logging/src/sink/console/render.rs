use std::fmt::Write as _;

use time::OffsetDateTime;
use time::macros::format_description;

use super::ConsoleBackend;
use crate::level::LogLevel;
use crate::metadata::Metadata;
use crate::verbosity::ConsoleVerbosity;

/// Formats `at` as `yyyy-MM-dd HH:mm:ss`.
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[year]-[month padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
    ))
    .unwrap_or_default()
}

/// Local wall-clock time, or UTC when the local offset is unavailable.
fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

impl ConsoleBackend {
    /// Renders the line this backend would write, without color or newline.
    ///
    /// Returns `None` when the backend is disabled or silent, in which case
    /// [`log`](crate::LogBackend::log) writes nothing.
    #[must_use]
    pub fn render(
        &self,
        level: LogLevel,
        message: &str,
        metadata: Option<&Metadata>,
    ) -> Option<String> {
        if !self.config.is_active() {
            return None;
        }
        Some(self.render_at(now(), level, message, metadata))
    }

    pub(super) fn render_at(
        &self,
        at: OffsetDateTime,
        level: LogLevel,
        message: &str,
        metadata: Option<&Metadata>,
    ) -> String {
        match self.config.verbosity {
            ConsoleVerbosity::Silent => String::new(),
            ConsoleVerbosity::Minimal => message.to_owned(),
            ConsoleVerbosity::Standard => {
                format!("{} [{}] {}", format_timestamp(at), level.label(), message)
            }
            ConsoleVerbosity::Detailed => {
                let mut line = format!(
                    "{} [{}] {}",
                    format_timestamp(at),
                    level.label(),
                    self.config.subsystem
                );
                if !self.config.category.is_empty() {
                    let _ = write!(line, "[{}]", self.config.category);
                }
                let suffix = metadata.map_or_else(
                    || Metadata::new().location_suffix(),
                    Metadata::location_suffix,
                );
                let _ = write!(line, " {message} {suffix}");
                line
            }
        }
    }
}
