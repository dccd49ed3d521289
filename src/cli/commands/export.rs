//! The export command: flat per-animal CSV output

use std::fs::File;
use std::path::PathBuf;
use tracing::info;

use crate::app::services::analyzer::GrowthAnalyzer;
use crate::app::services::exporter::{export_filename, write_csv};
use crate::app::services::ingest;
use crate::cli::args::ExportArgs;
use crate::config::AnalysisConfig;
use crate::{Error, Result};

/// Execute the export command
pub async fn run(args: ExportArgs) -> Result<()> {
    let criteria = args.criteria()?;
    let rows = ingest::read_rows(&args.input).await?;

    let (analyzer, pipeline) = GrowthAnalyzer::from_rows(rows, AnalysisConfig::default(), None);
    info!("{}", pipeline.normalization.summary());

    let records = analyzer.export_records(&criteria);
    if records.is_empty() {
        println!("No animals match the active filters; nothing to export");
        return Ok(());
    }

    match args.output.as_deref() {
        Some(path) if path.as_os_str() == "-" => {
            write_csv(&records, std::io::stdout().lock())?;
        }
        Some(path) => {
            write_to_file(&records, path.to_path_buf())?;
            println!("Exported {} animals to {}", records.len(), path.display());
        }
        None => {
            let path = PathBuf::from(export_filename(&criteria));
            write_to_file(&records, path.clone())?;
            println!("Exported {} animals to {}", records.len(), path.display());
        }
    }

    Ok(())
}

/// Create the output file and write the records
fn write_to_file(
    records: &[crate::app::services::exporter::ExportRecord],
    path: PathBuf,
) -> Result<()> {
    let file = File::create(&path)
        .map_err(|e| Error::io(format!("Failed to create '{}'", path.display()), e))?;
    write_csv(records, file)
}
