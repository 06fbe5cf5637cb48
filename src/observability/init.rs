//! Subscriber setup: `tracing` → `tracing-opentelemetry` → file exporter.

use super::exporter::file_tracer_provider;
use super::otlp::SCOPE;
use crate::infrastructure::paths::get_data_dir;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace log inside the data directory.
pub const TRACE_FILE: &str = "emoji-catalog-otlp.json";

/// Installs the global subscriber filtered by `level` (an `EnvFilter` directive).
///
/// Returns `false` when tracing could not be set up: the data directory is
/// not writable, or a subscriber is already installed. The plugin runs
/// normally either way.
pub fn init_tracing(level: &str) -> bool {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return false;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let layer = OpenTelemetryLayer::new(provider.tracer(SCOPE));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok()
}
