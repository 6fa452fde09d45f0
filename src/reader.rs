use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Configuration for file loading behavior
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Memory-map the file instead of copying it into a String
    pub use_mmap: bool,
}

/// Statistics for one file load
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Whole-file text, either owned or memory-mapped
pub enum LoadedText {
    Owned(String),
    Mapped(Mmap),
}

impl LoadedText {
    pub fn as_str(&self) -> &str {
        match self {
            LoadedText::Owned(text) => text,
            // SAFETY: the mapping was checked with str::from_utf8 in `read_text`
            LoadedText::Mapped(mmap) => unsafe { std::str::from_utf8_unchecked(mmap) },
        }
    }
}

/// Load the full contents of a UTF-8 text file
pub fn read_text<P: AsRef<Path>>(file_path: P, config: &ReaderConfig) -> Result<(LoadedText, ReadStats)> {
    let path = file_path.as_ref();
    let start_time = Instant::now();
    debug!(use_mmap = config.use_mmap, "Loading {}", path.display());

    let mut file = File::open(path).with_context(|| format!("Failed to open input file {}", path.display()))?;
    let file_len = file
        .metadata()
        .with_context(|| format!("Failed to stat input file {}", path.display()))?
        .len();

    // WHY: zero-length mappings are rejected on some platforms
    let text = if config.use_mmap && file_len > 0 {
        // SAFETY: the map is read-only and lives as long as the returned LoadedText
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to memory-map input file {}", path.display()))?;
        std::str::from_utf8(&mmap)
            .with_context(|| format!("Input file {} is not valid UTF-8", path.display()))?;
        LoadedText::Mapped(mmap)
    } else {
        let mut bytes = Vec::with_capacity(file_len as usize);
        file.read_to_end(&mut bytes)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        let text =
            String::from_utf8(bytes).with_context(|| format!("Input file {} is not valid UTF-8", path.display()))?;
        LoadedText::Owned(text)
    };

    let stats = ReadStats {
        file_path: path.display().to_string(),
        bytes_read: text.as_str().len() as u64,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };
    info!(
        "Loaded {}: {} bytes in {}ms",
        stats.file_path, stats.bytes_read, stats.duration_ms
    );

    Ok((text, stats))
}
