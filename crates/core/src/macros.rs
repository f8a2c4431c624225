// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Logging macros for convenient usage

/// Feed a logger's callable form.
///
/// Arguments are converted to payload values; when more than one is given
/// and the first matches a level name, it selects the level, otherwise
/// everything is payload at the default level.
#[macro_export]
macro_rules! log {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.call(&[$($crate::value(&$arg)),*])
    };
}

/// Error level logging with format-string semantics
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&[$crate::Value::String(format!($($arg)*))])
    };
}

/// Warning level logging with format-string semantics
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&[$crate::Value::String(format!($($arg)*))])
    };
}

/// Info level logging with format-string semantics
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&[$crate::Value::String(format!($($arg)*))])
    };
}

/// Debug level logging with format-string semantics
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&[$crate::Value::String(format!($($arg)*))])
    };
}

/// Trace level logging with format-string semantics
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(&[$crate::Value::String(format!($($arg)*))])
    };
}

// Tests that exercise these macros through `omnilog-testing`'s capture sink
// live in `crates/core/tests/macros.rs` as integration tests: the testing
// crate depends on `omnilog-core`, so an inline `#[cfg(test)]` module would
// pull a second, incompatible copy of this crate into the test binary.
