//! # Processing Module
//!
//! The two batch stages and their supporting pieces.
//!
//! - `comprehensive` - Raw play-by-play files -> comprehensive records, freshness-gated
//! - `weeks` - Season week calendar and date-to-week resolution
//! - `stats` - Per-game statistic line-item extraction
//! - `weekly` - Comprehensive records -> weekly rollups and the aggregation summary

pub mod comprehensive;
pub mod stats;
pub mod weekly;
pub mod weeks;

pub use comprehensive::{ComprehensiveProcessor, ProcessOutcome};
pub use stats::extract_player_stats;
pub use weekly::WeeklyAggregator;
pub use weeks::{WeekRange, WeekTable};

use std::io;
use std::path::{Path, PathBuf};

/// Enumerate `dir` entries whose file name ends with `suffix`, ascending by
/// file name. Filenames are date-prefixed, so this order is chronological;
/// weekly output determinism depends on it.
pub(crate) fn sorted_files_with_suffix(dir: &Path, suffix: &str) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(suffix))
        })
        .collect();

    files.sort();
    Ok(files)
}
