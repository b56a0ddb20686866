//! Registrar Observability
//!
//! - Console and JSON-file logging via `tracing-subscriber`
//! - Optional OpenTelemetry export when `OTEL_EXPORTER_OTLP_ENDPOINT` is set
//! - Prometheus metrics, switched off with `OBSERVABILITY_ENABLED=false`
//! - HTTP request/response logging and metrics middleware
//!
//! # Examples
//!
//! ```no_run
//! use registrar_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracer().await;
//! }
//! ```

pub mod logging;
pub mod metrics;

pub use metrics_exporter_prometheus::PrometheusHandle;

pub use logging::{init_tracing, logging_middleware, shutdown_tracer};
pub use metrics::{
    init_metrics, is_observability_enabled, metrics_middleware, track_lecturer_delete_blocked,
    track_lecturer_deleted, track_student_created, track_student_updated,
};
