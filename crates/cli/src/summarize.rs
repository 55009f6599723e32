use std::path::Path;
use structscope_core::config::{OutputFormat, SummaryConfig};
use structscope_java::JavaSummarizer;
use tracing::info;

pub fn run(path: &Path, config: &SummaryConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!("Summarizing {}...", path.display());
    let source = crate::read_source(path)?;

    let summary = JavaSummarizer::new().summarize(&source)?;
    info!("Built {} contexts", summary.len());

    match config.format {
        OutputFormat::Text => print!("{}", summary.format()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary.outline())?),
    }
    Ok(())
}
