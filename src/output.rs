// WHY: stdout carries only couplets so the output can be piped; run statistics go to a
// separate JSON file

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use crate::couplet::Couplet;
use crate::pipeline::RunStats;
use crate::rhyme::RhymeStrength;

/// How couplets are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// First sentence, then a tab-indented second sentence and a blank line
    #[default]
    Text,
    /// A JSON array of couplet objects
    Json,
}

/// Write couplets in the requested format
pub fn write_couplets<W: Write>(writer: &mut W, couplets: &[Couplet], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for couplet in couplets {
                write!(writer, "{}\n\t{}\n\n", couplet.first, couplet.second)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, couplets)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Run summary written by `--stats-out`
#[derive(Serialize, Debug, Clone)]
pub struct RunReport {
    pub input_path: String,
    pub rhyme_strength: RhymeStrength,
    /// Size of the input file in bytes
    pub bytes_read: u64,
    pub load_time_ms: u64,
    #[serde(flatten)]
    pub stats: RunStats,
}

/// Write the run summary as pretty JSON
pub fn write_stats(path: &Path, report: &RunReport) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create stats file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("Failed to write stats file {}", path.display()))?;
    writer.flush()?;
    info!("Stats written to {}", path.display());
    Ok(())
}
