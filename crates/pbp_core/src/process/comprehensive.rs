//! Raw play-by-play files -> comprehensive records.
//!
//! Batch loop over a source directory with a modification-time freshness
//! gate: a file whose comprehensive output is already newer is skipped, so
//! repeated full-directory passes are cheap after the first run. Processing
//! one file to completion before the next; there is no cross-file ordering
//! requirement at this stage.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::Result;
use crate::events::build_comprehensive;
use crate::models::raw::RawGame;

use super::sorted_files_with_suffix;

const SOURCE_SUFFIX: &str = "_play_by_play.json";

/// Batch counts, returned by value so a single processor can be reused
/// across calls and the counting logic tested in isolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub processed: u32,
    pub failed: u32,
    pub total: u32,
}

pub struct ComprehensiveProcessor {
    source_dir: PathBuf,
    output_dir: PathBuf,
}

impl ComprehensiveProcessor {
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Process every `*_play_by_play.json` under the source directory, in
    /// ascending filename order.
    ///
    /// `date_prefix` restricts the pass to files whose name starts with the
    /// given prefix. `force` disables the freshness gate. A failure on one
    /// file is logged and counted; the batch always continues.
    pub fn run(&self, date_prefix: Option<&str>, force: bool) -> Result<ProcessOutcome> {
        log::info!("Processing play-by-play files to comprehensive format");

        let files: Vec<PathBuf> = sorted_files_with_suffix(&self.source_dir, SOURCE_SUFFIX)?
            .into_iter()
            .filter(|path| match date_prefix {
                Some(prefix) => path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(prefix)),
                None => true,
            })
            .collect();

        log::info!("Found {} play-by-play files to process", files.len());

        let mut outcome = ProcessOutcome {
            total: files.len() as u32,
            ..ProcessOutcome::default()
        };

        for path in &files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let output_path = self.output_path_for(path);

            if !force && output_is_current(path, &output_path) {
                log::info!("Skipping {} - comprehensive file is newer", name);
                continue;
            }

            log::info!("Processing {}", name);
            match self.process_file(path, &output_path) {
                Ok(()) => {
                    outcome.processed += 1;
                    log::info!(
                        "Created {}",
                        output_path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default()
                    );
                }
                Err(e) => {
                    outcome.failed += 1;
                    log::error!("Error processing {}: {}", name, e);
                }
            }
        }

        Ok(outcome)
    }

    /// `<date>_<gameid>_play_by_play.json` -> `<date>_<gameid>_complete.json`
    fn output_path_for(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let base = stem.strip_suffix("_play_by_play").unwrap_or(stem);
        self.output_dir.join(format!("{base}_complete.json"))
    }

    fn process_file(&self, source: &Path, output: &Path) -> Result<()> {
        let raw: RawGame = serde_json::from_str(&fs::read_to_string(source)?)?;

        if raw.game_info.game_id.is_empty() {
            log::warn!("No game id found in {}", source.display());
        }

        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let comprehensive = build_comprehensive(&raw, stem)?;

        fs::create_dir_all(&self.output_dir)?;
        fs::write(output, serde_json::to_string_pretty(&comprehensive)?)?;
        Ok(())
    }
}

/// Freshness gate: the output is current when it exists and its mtime is
/// strictly newer than the source's. Unreadable mtimes fail open (reprocess).
fn output_is_current(source: &Path, output: &Path) -> bool {
    match (mtime(source), mtime(output)) {
        (Some(source_mtime), Some(output_mtime)) => skip_by_mtime(source_mtime, output_mtime),
        _ => false,
    }
}

fn mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Pure gate decision: skip only when the output is strictly newer.
fn skip_by_mtime(source_mtime: SystemTime, output_mtime: SystemTime) -> bool {
    output_mtime > source_mtime
}
