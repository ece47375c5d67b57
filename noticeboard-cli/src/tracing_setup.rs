//! Log output for the noticeboard binary
//!
//! `RUST_LOG` wins when set; otherwise `--debug` picks the fallback level.
//! With the `telemetry` feature, `--otel` also exports spans over OTLP
//! (`OTEL_EXPORTER_OTLP_ENDPOINT`, `OTEL_SERVICE_NAME`).

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "telemetry")]
const SERVICE_NAME: &str = "noticeboard";

fn fallback_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

fn env_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level(debug)))
}

/// Install the global subscriber. Call once, before any command runs.
pub fn init(debug: bool, otel: bool) -> Result<()> {
    #[cfg(feature = "telemetry")]
    if otel {
        return init_with_otlp(debug);
    }

    #[cfg(not(feature = "telemetry"))]
    if otel {
        eprintln!("--otel ignored: built without the telemetry feature");
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(feature = "telemetry")]
fn init_with_otlp(debug: bool) -> Result<()> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());
    let service = std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.to_string());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint)
        .build()
        .map_err(|e| anyhow!("OTLP exporter for {endpoint}: {e}"))?;
    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(opentelemetry_sdk::Resource::new(vec![KeyValue::new(
            "service.name",
            service.clone(),
        )]))
        .build();
    let tracer = provider.tracer(SERVICE_NAME);
    // the global provider keeps the batch exporter alive until `shutdown`
    let _ = opentelemetry::global::set_tracer_provider(provider);

    tracing_subscriber::registry()
        .with(env_filter(debug))
        .with(tracing_subscriber::fmt::layer().with_target(debug).compact())
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .try_init()
        .map_err(|err| anyhow!(err))?;

    tracing::info!(%endpoint, %service, "Exporting spans over OTLP");
    Ok(())
}

/// Flush pending spans before exit.
pub fn shutdown() {
    #[cfg(feature = "telemetry")]
    opentelemetry::global::shutdown_tracer_provider();
}
