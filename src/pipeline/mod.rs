// Normalization pipeline: registry-driven processing and the orchestrator that runs it

pub mod orchestrator;
pub mod processing;

pub use orchestrator::{NormalizationRun, PipelineOrchestrator, RunReport, StageReport};
