//! crates/logging/src/macros.rs
//! Call-site capturing macros for the logging facade.

/// Captures the [`CallSite`](crate::CallSite) of the invocation.
///
/// The function path is recovered from the type name of a nested helper
/// function, so it names the enclosing function rather than the module.
///
/// # Example
/// ```
/// let site = logging::call_site!();
/// assert!(site.file().ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::CallSite::new(
            file!(),
            $crate::trim_function_path(__type_name_of(__f)),
            line!(),
        )
    }};
}

/// Emit a debug event through any [`Logger`](crate::Logger).
///
/// # Example
/// ```ignore
/// debug_log!(logger, "cache miss for {}", key);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Logger::debug(&$logger, &::std::format!($($arg)*), $crate::call_site!())
    };
}

/// Emit an info event through any [`Logger`](crate::Logger).
///
/// # Example
/// ```ignore
/// info_log!(logger, "listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info_log {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Logger::info(&$logger, &::std::format!($($arg)*), $crate::call_site!())
    };
}

/// Emit a warning event through any [`Logger`](crate::Logger).
///
/// # Example
/// ```ignore
/// warning_log!(logger, "retrying in {:?}", delay);
/// ```
#[macro_export]
macro_rules! warning_log {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Logger::warning(&$logger, &::std::format!($($arg)*), $crate::call_site!())
    };
}

/// Emit an error event through any [`Logger`](crate::Logger).
///
/// # Example
/// ```ignore
/// error_log!(logger, "connection failed: {}", err);
/// ```
#[macro_export]
macro_rules! error_log {
    ($logger:expr, $($arg:tt)*) => {
        $crate::Logger::error(&$logger, &::std::format!($($arg)*), $crate::call_site!())
    };
}
