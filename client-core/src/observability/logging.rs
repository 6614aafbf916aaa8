use crate::config::TelemetrySettings;
use crate::error::CoreError;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, runtime, trace as sdktrace};
use tracing::Subscriber;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. When an OTLP endpoint is set,
/// spans are also exported through a batch pipeline on the tokio runtime,
/// so this must then be called from within one.
pub fn init_tracing(settings: &TelemetrySettings) -> Result<(), CoreError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let telemetry = match settings.otlp_endpoint.as_deref() {
        Some(endpoint) => Some(otlp_layer(&settings.service_name, endpoint)?),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(telemetry)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init()
        .map_err(|e| CoreError::Telemetry(e.to_string()))
}

fn otlp_layer<S>(
    service_name: &str,
    endpoint: &str,
) -> Result<OpenTelemetryLayer<S, sdktrace::Tracer>, CoreError>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint);

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
        ])))
        .install_batch(runtime::Tokio)
        .map_err(|e| {
            CoreError::Telemetry(format!(
                "Failed to initialize OTLP tracer at '{}': {}",
                endpoint, e
            ))
        })?;

    Ok(tracing_opentelemetry::layer().with_tracer(tracer))
}
