//! crates/logging/src/sink/mod.rs
//! Backends that write rendered lines to byte streams.

mod color;
mod console;

pub use color::colorize;
pub use console::{ConsoleBackend, format_timestamp};
