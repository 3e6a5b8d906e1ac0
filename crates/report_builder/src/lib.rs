//! Report Builder Library
//!
//! Orchestrates the two pipeline stages over the on-disk data layout:
//! raw play-by-play in `preseason/play_by_play/`, comprehensive records in
//! `preseason/comprehensive/`, weekly rollups and the aggregation summary at
//! the data-directory root, where the reporting API reads them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pbp_core::{
    AggregationSummary, ComprehensiveProcessor, ProcessOutcome, WeekTable, WeeklyAggregator,
};

/// Directory layout rooted at the data directory.
#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn play_by_play_dir(&self) -> PathBuf {
        self.root.join("preseason").join("play_by_play")
    }

    pub fn comprehensive_dir(&self) -> PathBuf {
        self.root.join("preseason").join("comprehensive")
    }

    /// Weekly rollups and the aggregation summary live at the root.
    pub fn output_dir(&self) -> &Path {
        &self.root
    }
}

/// Run the event extraction stage over every matching play-by-play file.
pub fn run_extraction(
    layout: &DataLayout,
    date_prefix: Option<&str>,
    force: bool,
) -> Result<ProcessOutcome> {
    let processor =
        ComprehensiveProcessor::new(layout.play_by_play_dir(), layout.comprehensive_dir());
    processor.run(date_prefix, force).with_context(|| {
        format!(
            "Failed to scan play-by-play directory: {}",
            layout.play_by_play_dir().display()
        )
    })
}

/// Run the weekly aggregation stage and, when at least one weekly file was
/// written, the summary pass. Returns the number of weekly files written and
/// the summary (absent when aggregation produced nothing).
pub fn run_aggregation(layout: &DataLayout) -> Result<(usize, Option<AggregationSummary>)> {
    let aggregator = WeeklyAggregator::new(
        layout.comprehensive_dir(),
        layout.output_dir(),
        WeekTable::preseason_2025(),
    );

    let saved = aggregator.aggregate().context("Weekly aggregation failed")?;
    if saved == 0 {
        return Ok((0, None));
    }

    let summary = aggregator
        .write_summary()
        .context("Failed to write aggregation summary")?;
    Ok((saved, Some(summary)))
}
