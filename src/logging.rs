//! Structured logging seam.
//!
//! The document core never owns a logger. Whoever starts the process builds
//! a [`LogSink`] and hands it to the collaborators that need one (see
//! [`DocumentFactory`](crate::DocumentFactory)). [`TracingSink`] forwards to
//! the `tracing` ecosystem; [`NullSink`] drops everything.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use jsonapi_document::logging::{log_request, RequestSummary, TracingSink};
//!
//! let sink = TracingSink::new();
//! log_request(&sink, &RequestSummary::new("GET", "/users", 200, Duration::from_millis(12)));
//! ```

use std::fmt;
use std::time::Duration;

use serde_json::{Map, Value};

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Fine-grained diagnostics.
    Trace,
    /// Developer diagnostics.
    Debug,
    /// Routine events.
    Info,
    /// Something unexpected that did not fail the request.
    Warn,
    /// A failure.
    Error,
}

impl LogLevel {
    /// Returns the lowercase level name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key/value pair attached to a log record.
#[derive(Debug, Clone, PartialEq)]
pub struct LogField {
    /// The field name.
    pub key: &'static str,
    /// The field value.
    pub value: Value,
}

impl LogField {
    /// Creates a field.
    #[must_use]
    pub fn new(key: &'static str, value: impl Into<Value>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// A destination for structured log records.
pub trait LogSink: Send + Sync {
    /// Records one message with its fields.
    fn record(&self, level: LogLevel, message: &str, fields: &[LogField]);
}

/// Forwards records to `tracing` events.
///
/// Fields are rendered as a JSON object in a single `fields` value so that
/// arbitrary keys survive `tracing`'s static field sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates a sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn record(&self, level: LogLevel, message: &str, fields: &[LogField]) {
        let fields = render_fields(fields);
        match level {
            LogLevel::Trace => tracing::trace!(fields = %fields, "{message}"),
            LogLevel::Debug => tracing::debug!(fields = %fields, "{message}"),
            LogLevel::Info => tracing::info!(fields = %fields, "{message}"),
            LogLevel::Warn => tracing::warn!(fields = %fields, "{message}"),
            LogLevel::Error => tracing::error!(fields = %fields, "{message}"),
        }
    }
}

/// Discards every record.
///
/// ```rust
/// use std::time::Duration;
/// use jsonapi_document::logging::{log_request, NullSink, RequestSummary};
///
/// log_request(&NullSink, &RequestSummary::new("GET", "/", 204, Duration::ZERO));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn record(&self, _level: LogLevel, _message: &str, _fields: &[LogField]) {}
}

fn render_fields(fields: &[LogField]) -> Value {
    Value::Object(
        fields
            .iter()
            .map(|field| (field.key.to_string(), field.value.clone()))
            .collect::<Map<String, Value>>(),
    )
}

/// The outcome of one handled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSummary {
    /// The HTTP method.
    pub method: String,
    /// The request path.
    pub path: String,
    /// The response status code.
    pub status: u16,
    /// Time spent handling the request.
    pub duration: Duration,
}

impl RequestSummary {
    /// Creates a summary.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        status: u16,
        duration: Duration,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            status,
            duration,
        }
    }

    /// Returns the fields recorded for this summary.
    #[must_use]
    pub fn fields(&self) -> Vec<LogField> {
        let elapsed_ms = u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX);
        vec![
            LogField::new("method", self.method.clone()),
            LogField::new("path", self.path.clone()),
            LogField::new("status_code", self.status),
            LogField::new("elapsed_ms", elapsed_ms),
        ]
    }
}

/// Records a handled request: `info` below 500, `error` otherwise.
pub fn log_request(sink: &dyn LogSink, summary: &RequestSummary) {
    let level = if summary.status >= 500 {
        LogLevel::Error
    } else {
        LogLevel::Info
    };
    sink.record(level, "handled request", &summary.fields());
}
