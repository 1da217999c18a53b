use std::io::Write;
use std::sync::Mutex;

use super::{ConsoleBackend, Output};
use crate::config::ConsoleConfig;
use crate::verbosity::ConsoleVerbosity;

impl ConsoleBackend {
    /// Creates a backend writing to the stream selected by `config`.
    #[must_use]
    pub fn new(config: ConsoleConfig) -> Self {
        let output = Output::Stream(config.stream);
        Self { config, output }
    }

    /// Creates a backend writing to `writer` instead of a process stream.
    ///
    /// The writer is never treated as a terminal, so output is not colored.
    /// [`ConsoleConfig::stream`] is ignored.
    #[must_use]
    pub fn with_writer<W>(config: ConsoleConfig, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            config,
            output: Output::Writer(Mutex::new(Box::new(writer))),
        }
    }

    /// Returns the configuration the backend was built with.
    #[must_use]
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Subsystem printed in detailed output.
    #[must_use]
    pub fn subsystem(&self) -> &str {
        &self.config.subsystem
    }

    /// Category printed in detailed output.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.config.category
    }

    /// Rendering tier.
    #[must_use]
    pub const fn verbosity(&self) -> ConsoleVerbosity {
        self.config.verbosity
    }

    /// Whether the backend was enabled at construction.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.config.enabled
    }
}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}
