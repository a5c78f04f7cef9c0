//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → JSON lines
//! ```
//!
//! The `trace_level` plugin option (`trace`, `debug`, `info`, …; default
//! `info`) accepts any `EnvFilter` directive, e.g. `cardealer::app=trace,info`. The
//! trace file rotates at 5 MB and keeps three numbered backups.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: provider and file exporter
//! - `span_formatter`: OTLP/JSON encoding
//! - `file_writer`: rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
