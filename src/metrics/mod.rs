//! Metrics for the normalization pipeline
//!
//! Each pipeline phase owns its metric names in a dedicated submodule. The
//! CLI installs an in-process Prometheus recorder and renders a text
//! snapshot at exit; library callers that never install a recorder pay only
//! for no-op handles.

pub mod dataset;
pub mod normalize;
pub mod registry;

pub use dataset::DatasetMetrics;
pub use normalize::NormalizeMetrics;

use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::{Once, OnceLock};
use tracing::{info, warn};

static INIT: Once = Once::new();
static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder and register every phase's metrics.
///
/// Idempotent. No HTTP listener is started; use [`render`] to read a snapshot.
pub fn init_metrics() {
    INIT.call_once(|| {
        match metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                if HANDLE.set(handle).is_err() {
                    warn!("Metrics handle was already set");
                }
                registry::register_all_metrics();
                info!("📈 Prometheus recorder installed");
            }
            Err(e) => {
                warn!("Failed to install Prometheus recorder: {}", e);
            }
        }
    });
}

/// Render the current metrics in Prometheus text format, if a recorder is installed.
pub fn render() -> Option<String> {
    HANDLE.get().map(|handle| handle.render())
}

/// Trait for phase-specific metrics collections
pub trait PhaseMetrics {
    /// Pre-register all metrics for this phase
    fn register_metrics();

    /// Phase name used in metric prefixes
    fn phase_name() -> &'static str;

    /// Documentation for every metric in this phase
    fn metrics_documentation() -> Vec<MetricDoc>;
}

/// Documentation for a single metric
#[derive(Debug, Clone)]
pub struct MetricDoc {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub help: &'static str,
    pub labels: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricType {
    Counter,
    Histogram,
    Gauge,
}

/// Builds metric names following `wn_{phase}_{name}[_total]`.
macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("wn_", $phase, "_", $name, "_total")
    };
    (histogram, $phase:literal, $name:literal) => {
        concat!("wn_", $phase, "_", $name)
    };
    (gauge, $phase:literal, $name:literal) => {
        concat!("wn_", $phase, "_", $name)
    };
}

pub(crate) use phase_metric;
