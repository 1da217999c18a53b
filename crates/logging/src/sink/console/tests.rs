use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use time::macros::datetime;

use super::*;
use crate::backend::LogBackend;
use crate::level::LogLevel;
use crate::metadata::{CallSite, Metadata};
use crate::verbosity::ConsoleVerbosity;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).expect("utf-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("disk full"))
    }
}

fn backend_with(config: ConsoleConfig) -> (ConsoleBackend, SharedBuffer) {
    let buffer = SharedBuffer::default();
    (ConsoleBackend::with_writer(config, buffer.clone()), buffer)
}

fn connect_metadata() -> Metadata {
    CallSite::new("net.go", "connect", 42).to_metadata()
}

#[test]
fn format_timestamp_zero_pads_fields() {
    assert_eq!(
        format_timestamp(datetime!(2024-03-07 04:05:06 UTC)),
        "2024-03-07 04:05:06"
    );
}

#[test]
fn minimal_renders_message_only() {
    let (backend, _) =
        backend_with(ConsoleConfig::default().with_verbosity(ConsoleVerbosity::Minimal));
    let line = backend.render_at(
        datetime!(2024-10-28 12:00:00 UTC),
        LogLevel::Warning,
        "hello",
        Some(&connect_metadata()),
    );
    assert_eq!(line, "hello");
}

#[test]
fn standard_renders_timestamp_and_label() {
    let (backend, _) =
        backend_with(ConsoleConfig::default().with_verbosity(ConsoleVerbosity::Standard));
    let line = backend.render_at(
        datetime!(2024-10-28 12:34:56 UTC),
        LogLevel::Info,
        "ready",
        None,
    );
    assert_eq!(line, "2024-10-28 12:34:56 [INFO] ready");
}

#[test]
fn detailed_renders_subsystem_category_and_location() {
    let (backend, _) = backend_with(
        ConsoleConfig::default()
            .with_subsystem("svc")
            .with_category("db"),
    );
    let line = backend.render_at(
        datetime!(2024-10-28 12:34:56 UTC),
        LogLevel::Error,
        "conn failed",
        Some(&connect_metadata()),
    );
    assert_eq!(
        line,
        "2024-10-28 12:34:56 [ERROR] svc[db] conn failed in connect at net.go:42"
    );
}

#[test]
fn detailed_omits_empty_category_and_defaults_missing_metadata() {
    let (backend, _) = backend_with(ConsoleConfig::default().with_subsystem("svc"));
    let line = backend.render_at(
        datetime!(2024-10-28 12:34:56 UTC),
        LogLevel::Debug,
        "probe",
        None,
    );
    assert_eq!(line, "2024-10-28 12:34:56 [DEBUG] svc probe in  at :");
}

#[test]
fn render_returns_none_when_inactive() {
    let (silent, _) =
        backend_with(ConsoleConfig::default().with_verbosity(ConsoleVerbosity::Silent));
    assert_eq!(silent.render(LogLevel::Error, "x", None), None);

    let (disabled, _) = backend_with(ConsoleConfig::default().with_enabled(false));
    assert_eq!(disabled.render(LogLevel::Error, "x", None), None);
}

#[test]
fn log_writes_newline_terminated_line_without_color() {
    let (backend, buffer) = backend_with(
        ConsoleConfig::default()
            .with_verbosity(ConsoleVerbosity::Minimal)
            .with_colors(true),
    );
    backend.log(LogLevel::Error, "first", None);
    backend.log(LogLevel::Info, "second", None);
    assert_eq!(buffer.contents(), "first\nsecond\n");
}

#[test]
fn log_is_noop_when_disabled_at_every_tier() {
    for verbosity in [
        ConsoleVerbosity::Silent,
        ConsoleVerbosity::Minimal,
        ConsoleVerbosity::Standard,
        ConsoleVerbosity::Detailed,
    ] {
        let (backend, buffer) = backend_with(
            ConsoleConfig::default()
                .with_verbosity(verbosity)
                .with_enabled(false),
        );
        backend.log(LogLevel::Error, "hidden", Some(&connect_metadata()));
        assert!(buffer.contents().is_empty(), "{verbosity} wrote output");
    }
}

#[test]
fn write_failures_are_swallowed() {
    let backend = ConsoleBackend::with_writer(
        ConsoleConfig::default().with_verbosity(ConsoleVerbosity::Minimal),
        FailingWriter,
    );
    backend.log(LogLevel::Error, "lost", None);
}

#[test]
fn accessors_reflect_configuration() {
    let backend = ConsoleBackend::new(
        ConsoleConfig::default()
            .with_subsystem("svc")
            .with_category("cache")
            .with_verbosity(ConsoleVerbosity::Standard)
            .with_stderr(true),
    );
    assert_eq!(backend.subsystem(), "svc");
    assert_eq!(backend.category(), "cache");
    assert_eq!(backend.verbosity(), ConsoleVerbosity::Standard);
    assert!(backend.is_enabled());
    assert!(format!("{backend:?}").contains("stderr"));
}

#[test]
fn backend_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConsoleBackend>();
}
