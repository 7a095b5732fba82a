//! Normalize phase metrics
//!
//! Per-stage value counts and field faults, labelled by output column.

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

pub struct NormalizeMetrics;

impl NormalizeMetrics {
    /// Non-absent values a stage produced for one output column
    pub fn record_values_produced(column: &str, count: usize) {
        ::metrics::counter!(
            phase_metric!(counter, "normalize", "values_produced"),
            "column" => column.to_string()
        )
        .increment(count as u64);
    }

    /// Cells turned into absence because their transform faulted
    pub fn record_field_faults(column: &str, count: usize) {
        if count == 0 {
            return;
        }
        ::metrics::counter!(
            phase_metric!(counter, "normalize", "field_faults"),
            "column" => column.to_string()
        )
        .increment(count as u64);
    }

    pub fn record_stage_skipped() {
        ::metrics::counter!(phase_metric!(counter, "normalize", "stages_skipped")).increment(1);
    }

    /// A completed run over `records` rows
    pub fn record_run(records: usize, duration_secs: f64) {
        ::metrics::counter!(phase_metric!(counter, "normalize", "records_processed"))
            .increment(records as u64);
        ::metrics::histogram!(phase_metric!(histogram, "normalize", "run_duration_seconds"))
            .record(duration_secs);
    }
}

impl PhaseMetrics for NormalizeMetrics {
    fn register_metrics() {
        use metrics::{counter, histogram};

        let _ = counter!(phase_metric!(counter, "normalize", "stages_skipped"));
        let _ = counter!(phase_metric!(counter, "normalize", "records_processed"));
        let _ = histogram!(phase_metric!(histogram, "normalize", "run_duration_seconds"));
    }

    fn phase_name() -> &'static str {
        "normalize"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "normalize", "values_produced"),
                metric_type: MetricType::Counter,
                help: "Non-absent values produced per output column",
                labels: vec!["column"],
            },
            MetricDoc {
                name: phase_metric!(counter, "normalize", "field_faults"),
                metric_type: MetricType::Counter,
                help: "Cells converted to absence after a transform fault",
                labels: vec!["column"],
            },
            MetricDoc {
                name: phase_metric!(counter, "normalize", "stages_skipped"),
                metric_type: MetricType::Counter,
                help: "Stages skipped because their outputs already exist",
                labels: vec![],
            },
            MetricDoc {
                name: phase_metric!(counter, "normalize", "records_processed"),
                metric_type: MetricType::Counter,
                help: "Records passed through a full normalization run",
                labels: vec![],
            },
            MetricDoc {
                name: phase_metric!(histogram, "normalize", "run_duration_seconds"),
                metric_type: MetricType::Histogram,
                help: "Wall time of one normalization run in seconds",
                labels: vec![],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_metrics_registration() {
        NormalizeMetrics::register_metrics();
        NormalizeMetrics::record_values_produced("height_cm", 3);
        NormalizeMetrics::record_field_faults("height_cm", 0);
    }

    #[test]
    fn test_metrics_documentation() {
        let docs = NormalizeMetrics::metrics_documentation();
        assert_eq!(docs.len(), 5);
        for doc in docs {
            assert!(doc.name.starts_with("wn_normalize_"));
        }
    }
}
