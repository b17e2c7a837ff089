//! Prometheus middleware construction.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};

/// Build the request metrics middleware serving `/metrics`.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the metric families cannot be registered.
pub fn build_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("policy_api")
        .endpoint("/metrics")
        .build()
        .map_err(|err| std::io::Error::other(format!("configure Prometheus metrics: {err}")))
}
