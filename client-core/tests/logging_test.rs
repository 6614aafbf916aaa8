//! Installs the process-global subscriber, so it lives in its own test binary.
use client_core::config::TelemetrySettings;
use client_core::error::CoreError;
use client_core::observability::init_tracing;

#[test]
fn subscriber_installs_once_without_collector() {
    let settings = TelemetrySettings {
        log_level: "warn".to_string(),
        ..Default::default()
    };

    assert!(init_tracing(&settings).is_ok());
    tracing::warn!(service = %settings.service_name, "subscriber installed");

    let second = init_tracing(&settings);
    assert!(matches!(second, Err(CoreError::Telemetry(_))));
}
