use std::io::{self, Write};
use std::sync::PoisonError;

use is_terminal::IsTerminal;

use super::{ConsoleBackend, Output};
use crate::backend::LogBackend;
use crate::config::ConsoleStream;
use crate::level::LogLevel;
use crate::metadata::Metadata;
use crate::sink::color::colorize;

impl Output {
    /// Stdout or stderr attached to a terminal counts for either stream.
    fn is_terminal(&self) -> bool {
        match self {
            Self::Stream(_) => io::stdout().is_terminal() || io::stderr().is_terminal(),
            Self::Writer(_) => false,
        }
    }

    fn write_line(&self, bytes: &[u8]) {
        match self {
            Self::Stream(ConsoleStream::Stdout) => {
                let mut out = io::stdout().lock();
                let _ = out.write_all(bytes);
                let _ = out.flush();
            }
            Self::Stream(ConsoleStream::Stderr) => {
                let mut err = io::stderr().lock();
                let _ = err.write_all(bytes);
                let _ = err.flush();
            }
            Self::Writer(writer) => {
                let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
                let _ = writer.write_all(bytes);
                let _ = writer.flush();
            }
        }
    }
}

impl LogBackend for ConsoleBackend {
    fn log(&self, level: LogLevel, message: &str, metadata: Option<&Metadata>) {
        let Some(line) = self.render(level, message, metadata) else {
            return;
        };

        let mut bytes = if self.config.enable_colors && self.output.is_terminal() {
            colorize(&line).into_owned().into_bytes()
        } else {
            line.into_bytes()
        };
        bytes.push(b'\n');

        self.output.write_line(&bytes);
    }
}
