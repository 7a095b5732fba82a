pub mod config;
pub mod constants;
pub mod dataset;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod types;

pub use config::NormalizerConfig;
pub use error::{NormalizerError, Result};
pub use pipeline::{NormalizationRun, PipelineOrchestrator, RunReport};
pub use types::{CellValue, NormalizedRecord, RawRecord, RecordSet};
