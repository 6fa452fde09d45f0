use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

use couplets::output::{self, OutputFormat, RunReport};
use couplets::reader::{self, ReaderConfig};
use couplets::sentence_detector::SentenceBoundaryRules;
use couplets::{CmuDict, CoupletFinder, FinderConfig, RhymeStrength, SentenceDetector};

#[derive(Parser, Debug)]
#[command(name = "couplets")]
#[command(about = "Finds pairs of sentences whose last words rhyme")]
#[command(version)]
struct Args {
    /// Text file to search for couplets
    #[arg(default_value = "paradise_lost.txt")]
    file: PathBuf,

    /// Number of trailing phonemes that must match
    #[arg(default_value_t = RhymeStrength::default())]
    strength: RhymeStrength,

    /// Pronunciation dictionary in CMU format
    #[arg(long, default_value = "cmudict.dict")]
    dict: PathBuf,

    /// Output format for couplets
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Use memory-mapped I/O for the input text
    #[arg(long)]
    use_mmap: bool,

    /// Treat blank lines as sentence boundaries
    #[arg(long)]
    paragraph_breaks: bool,

    /// Suppress the dictionary loading spinner
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<()> {
    // WHY: logs go to stderr as JSON so stdout stays clean couplet output
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let load_start = Instant::now();

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")?);
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    };
    progress.set_message(format!("Loading dictionary {}", args.dict.display()));
    let dictionary = CmuDict::load(&args.dict);
    progress.finish_and_clear();
    let dictionary = dictionary.context("Could not load the pronunciation dictionary")?;

    let reader_config = ReaderConfig {
        use_mmap: args.use_mmap,
    };
    let (text, read_stats) = reader::read_text(&args.file, &reader_config)?;
    let load_time_ms = load_start.elapsed().as_millis() as u64;

    let detector = SentenceDetector::new(SentenceBoundaryRules {
        paragraph_breaks: args.paragraph_breaks,
        ..SentenceBoundaryRules::default()
    })?;
    let finder = CoupletFinder::new(
        &detector,
        &dictionary,
        FinderConfig {
            strength: args.strength,
        },
    );
    let report = finder.find(text.as_str())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    output::write_couplets(&mut out, &report.couplets, args.format)?;

    if let Some(stats_path) = &args.stats_out {
        let run_report = RunReport {
            input_path: args.file.display().to_string(),
            rhyme_strength: args.strength,
            bytes_read: read_stats.bytes_read,
            load_time_ms,
            stats: report.stats,
        };
        output::write_stats(stats_path, &run_report)?;
    }

    info!("Done");
    Ok(())
}
