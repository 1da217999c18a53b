//! crates/logging/src/sink/console/mod.rs
//! Console backend with verbosity tiers and optional ANSI colors.

mod constructors;
mod render;
mod writing;

#[cfg(test)]
mod tests;

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

use crate::config::{ConsoleConfig, ConsoleStream};

pub use render::format_timestamp;

/// Backend that renders each event as one line of text.
///
/// Output goes to stdout or stderr according to
/// [`ConsoleConfig::stream`], or to a writer supplied through
/// [`with_writer`](Self::with_writer). Every call renders its own timestamp,
/// writes the line followed by `\n`, and flushes the destination before
/// returning. Write and flush failures are ignored.
///
/// Concurrent calls against the process streams are not serialised by the
/// backend; lines from different threads may interleave if the platform
/// splits large writes.
///
/// # Examples
///
/// ```
/// use logging::{ConsoleBackend, ConsoleConfig, ConsoleVerbosity, LogBackend, LogLevel};
///
/// let backend = ConsoleBackend::new(
///     ConsoleConfig::default()
///         .with_verbosity(ConsoleVerbosity::Standard)
///         .with_stderr(true),
/// );
/// backend.log(LogLevel::Info, "cache warmed", None);
/// ```
pub struct ConsoleBackend {
    config: ConsoleConfig,
    output: Output,
}

enum Output {
    Stream(ConsoleStream),
    Writer(Mutex<Box<dyn Write + Send>>),
}

impl fmt::Debug for ConsoleBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = match &self.output {
            Output::Stream(ConsoleStream::Stdout) => "stdout",
            Output::Stream(ConsoleStream::Stderr) => "stderr",
            Output::Writer(_) => "writer",
        };
        f.debug_struct("ConsoleBackend")
            .field("config", &self.config)
            .field("output", &output)
            .finish()
    }
}
