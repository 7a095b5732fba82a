//! Dataset phase metrics: records read from and written to disk.

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

pub struct DatasetMetrics;

impl DatasetMetrics {
    pub fn record_loaded(records: usize) {
        ::metrics::counter!(phase_metric!(counter, "dataset", "records_loaded"))
            .increment(records as u64);
    }

    pub fn record_schema_violation() {
        ::metrics::counter!(phase_metric!(counter, "dataset", "schema_violations")).increment(1);
    }

    pub fn record_written(format: &str, records: usize, bytes: usize) {
        ::metrics::counter!(
            phase_metric!(counter, "dataset", "records_written"),
            "format" => format.to_string()
        )
        .increment(records as u64);
        ::metrics::histogram!(phase_metric!(histogram, "dataset", "output_bytes"))
            .record(bytes as f64);
    }
}

impl PhaseMetrics for DatasetMetrics {
    fn register_metrics() {
        use metrics::{counter, histogram};

        let _ = counter!(phase_metric!(counter, "dataset", "records_loaded"));
        let _ = counter!(phase_metric!(counter, "dataset", "schema_violations"));
        let _ = histogram!(phase_metric!(histogram, "dataset", "output_bytes"));
    }

    fn phase_name() -> &'static str {
        "dataset"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "dataset", "records_loaded"),
                metric_type: MetricType::Counter,
                help: "Raw records loaded from input files",
                labels: vec![],
            },
            MetricDoc {
                name: phase_metric!(counter, "dataset", "schema_violations"),
                metric_type: MetricType::Counter,
                help: "Input files rejected by the raw record schema",
                labels: vec![],
            },
            MetricDoc {
                name: phase_metric!(counter, "dataset", "records_written"),
                metric_type: MetricType::Counter,
                help: "Normalized records written, by output format",
                labels: vec!["format"],
            },
            MetricDoc {
                name: phase_metric!(histogram, "dataset", "output_bytes"),
                metric_type: MetricType::Histogram,
                help: "Size of each written output file in bytes",
                labels: vec![],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_documentation() {
        let docs = DatasetMetrics::metrics_documentation();
        assert_eq!(docs.len(), 4);
        assert!(docs.iter().all(|d| d.name.starts_with("wn_dataset_")));
    }
}
