//! Optional diagnostic logging for the DOI client.
//!
//! The client never requires a logger. It always holds some [`DoiLogger`]:
//! either one supplied by the caller or [`NoopLogger`], which drops every
//! message. [`TracingLogger`] forwards messages to the `tracing` ecosystem.
//!
//! # Examples
//!
//! ```
//! use datacite_mds_client::logger::{DoiLogger, LogLevel, NoopLogger, TracingLogger};
//!
//! let silent = NoopLogger;
//! silent.err("never shown");
//!
//! let tracing_logger = TracingLogger;
//! tracing_logger.log(LogLevel::Debug, "DataCite response status code (expected 201): 201");
//! ```

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Response details of every call
    Debug,
    /// Informational messages
    Info,
    /// Recoverable oddities
    Warn,
    /// Failures reported to the caller
    Err,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Err => "err",
        };
        f.write_str(name)
    }
}

/// A sink for leveled diagnostic messages.
///
/// Implementors only need [`DoiLogger::log`]; the per-level methods forward to it.
/// Logging must never fail or panic.
pub trait DoiLogger: Send + Sync {
    /// Emit `message` at `level`.
    fn log(&self, level: LogLevel, message: &str);

    /// Emit a debug message
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Emit an informational message
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Emit a warning
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Emit an error message
    fn err(&self, message: &str) {
        self.log(LogLevel::Err, message);
    }
}

/// Logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl DoiLogger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}
}

/// Logger that emits `tracing` events with target `datacite_mds_client`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl DoiLogger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "datacite_mds_client", "{}", message),
            LogLevel::Info => tracing::info!(target: "datacite_mds_client", "{}", message),
            LogLevel::Warn => tracing::warn!(target: "datacite_mds_client", "{}", message),
            LogLevel::Err => tracing::error!(target: "datacite_mds_client", "{}", message),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{DoiLogger, LogLevel};
    use std::sync::Mutex;

    /// Keeps every message in memory for assertions.
    #[derive(Default)]
    pub(crate) struct RecordingLogger {
        entries: Mutex<Vec<(LogLevel, String)>>,
    }

    impl RecordingLogger {
        pub(crate) fn entries(&self) -> Vec<(LogLevel, String)> {
            self.entries.lock().unwrap().clone()
        }

        pub(crate) fn at(&self, level: LogLevel) -> Vec<String> {
            self.entries()
                .into_iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, m)| m)
                .collect()
        }
    }

    impl DoiLogger for RecordingLogger {
        fn log(&self, level: LogLevel, message: &str) {
            self.entries.lock().unwrap().push((level, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingLogger;
    use super::*;

    #[test]
    fn test_level_methods_forward_to_log() {
        let logger = RecordingLogger::default();
        logger.debug("a");
        logger.info("b");
        logger.warn("c");
        logger.err("d");

        assert_eq!(
            logger.entries(),
            vec![
                (LogLevel::Debug, "a".to_string()),
                (LogLevel::Info, "b".to_string()),
                (LogLevel::Warn, "c".to_string()),
                (LogLevel::Err, "d".to_string()),
            ]
        );
    }

    #[test]
    fn test_noop_logger_is_silent() {
        let logger = NoopLogger;
        logger.debug("ignored");
        logger.err("ignored");
    }

    #[test]
    fn test_tracing_logger_without_subscriber() {
        TracingLogger.err("no subscriber installed");
    }

    #[test]
    fn test_level_display() {
        assert_eq!(LogLevel::Err.to_string(), "err");
        assert_eq!(LogLevel::Debug.to_string(), "debug");
    }
}
