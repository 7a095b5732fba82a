use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use wanted_normalizer::dataset::{self, OutputFormat};
use wanted_normalizer::logging;
use wanted_normalizer::metrics;
use wanted_normalizer::types::ColumnType;
use wanted_normalizer::{NormalizerConfig, PipelineOrchestrator};

#[derive(Parser)]
#[command(name = "wanted_normalizer")]
#[command(about = "Normalize free-text wanted-person records into a typed dataset")]
#[command(version = "0.1.0")]
struct Cli {
    /// Also write daily-rotated JSON logs to this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a JSON array of raw records
    Normalize {
        /// Raw records (JSON array)
        #[arg(long)]
        input: PathBuf,
        /// Destination file for the normalized records
        #[arg(long)]
        output: PathBuf,
        /// Output format; inferred from the output extension when omitted
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// TOML configuration replacing the built-in tables
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write a Prometheus text snapshot of run metrics here
        #[arg(long)]
        metrics_file: Option<PathBuf>,
    },
    /// Print the final column order
    Columns {
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    CheckConfig {
        #[arg(long)]
        config: PathBuf,
    },
}

fn load_config(path: Option<&Path>) -> Result<NormalizerConfig> {
    match path {
        Some(path) => NormalizerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(NormalizerConfig::default()),
    }
}

fn run_normalize(
    input: &Path,
    output: &Path,
    format: Option<OutputFormat>,
    config: Option<&Path>,
    metrics_file: Option<&Path>,
) -> Result<()> {
    metrics::init_metrics();

    let orchestrator = PipelineOrchestrator::with_config(load_config(config)?)?;
    let records = dataset::load_raw_records(input)
        .with_context(|| format!("Failed to load raw records from {}", input.display()))?;
    let run = orchestrator.normalize(&records)?;

    for (column, column_type) in run.records.column_types() {
        if column_type == ColumnType::Mixed {
            warn!("⚠️  {:30} : {:?}", column, column_type);
        } else {
            info!("✅ {:30} : {:?}", column, column_type);
        }
    }

    let format = format.unwrap_or_else(|| OutputFormat::from_path(output));
    dataset::write_records(output, &run.records, format)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let report = &run.report;
    println!("\n📊 Normalization results:");
    println!("   Records: {} in, {} out", report.records_in, report.records_out);
    println!("   Columns: {}", report.columns.len());
    println!("   Field faults: {}", report.total_faults);
    println!("   With marks: {}", report.records_with_marks);
    println!("   With caution amount: {}", report.records_with_caution);
    for (category, count) in &report.top_occupations {
        println!("   {:24} {}", category, count);
    }
    println!("   Output: {} ({})", output.display(), format.as_str());
    println!("   SHA-256: {}", report.digest);

    if let Some(path) = metrics_file {
        match metrics::render() {
            Some(snapshot) => fs::write(path, snapshot)
                .with_context(|| format!("Failed to write metrics to {}", path.display()))?,
            None => warn!("Metrics recorder unavailable; {} not written", path.display()),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let _guard = logging::init_logging(cli.log_dir.as_deref());

    match cli.command {
        Commands::Normalize {
            input,
            output,
            format,
            config,
            metrics_file,
        } => {
            info!("🚀 wanted_normalizer starting");
            run_normalize(
                &input,
                &output,
                format,
                config.as_deref(),
                metrics_file.as_deref(),
            )?;
        }
        Commands::Columns { config } => {
            let orchestrator = PipelineOrchestrator::with_config(load_config(config.as_deref())?)?;
            for column in orchestrator.output_columns() {
                println!("{}", column);
            }
        }
        Commands::CheckConfig { config } => {
            let config = load_config(Some(config.as_path()))?;
            println!("✅ Configuration is valid");
            println!("   Reference date: {}", config.reference_date);
            println!("   Occupation categories: {}", config.occupations.len());
            println!("   Birthplaces: {}", config.birthplaces.len());
            println!("   Ordered columns: {}", config.column_order.len());
        }
    }

    Ok(())
}
