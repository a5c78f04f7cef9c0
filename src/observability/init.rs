//! Subscriber setup: `tracing` → `EnvFilter` → OpenTelemetry → trace file.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "CarDealer";

/// File name of the trace log inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "cardealer-otlp.json";

/// Installs the global subscriber at `trace_level` (default `info`).
///
/// Spans land in `~/.local/share/zellij/cardealer/cardealer-otlp.json`. The
/// call does nothing if the data directory cannot be created or a subscriber
/// is already installed, so it is safe to call on every plugin load.
///
/// ```rust,no_run
/// use cardealer::observability::init_tracing;
/// use cardealer::Config;
///
/// init_tracing(&Config::default());
/// tracing::info!("plugin loaded");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider =
        tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
