//! OpenTelemetry tracing exported to a local OTLP/JSON file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter
//!                                                               │
//!                       /host/.local/share/zellij/emoji-catalog/emoji-catalog-otlp.json
//! ```
//!
//! The file rotates at 10 MB and keeps three timestamped backups. The filter
//! comes from the `trace_level` plugin option (default `info`).

mod exporter;
mod init;
mod otlp;
mod rotating_file;

pub use init::{init_tracing, TRACE_FILE};
