//! # pbp_core - Preseason Play-by-Play Processing Pipeline
//!
//! Two-stage batch pipeline behind the reporting API:
//!
//! 1. **Event extraction**: raw per-game play-by-play JSON is classified by
//!    event category (scoring play, touchdown, interception, fumble) via
//!    text-pattern matching, player names are inferred from the free-form
//!    play text, and a comprehensive per-game record (synthesized box score
//!    + enriched play log) is written.
//! 2. **Weekly aggregation**: comprehensive records are bucketed by calendar
//!    week and merged into per-week rollups of game summaries and per-event
//!    player statistic line items, plus an operational summary file.
//!
//! Data flows strictly one direction: raw -> comprehensive -> weekly. Both
//! stages are re-runnable; extraction is freshness-gated on file mtimes and
//! aggregation is a full overwrite every pass. Parsing is best-effort: a
//! play whose text defeats every pattern keeps its place in the record,
//! just without a player attribution.

pub mod error;
pub mod events;
pub mod models;
pub mod process;

pub use error::{PipelineError, Result};
pub use events::{extract_passer, extract_player, extract_yards, EventKind};
pub use models::{AggregationSummary, ComprehensiveGame, GameSummary, RawGame, WeeklyRollup};
pub use process::{
    ComprehensiveProcessor, ProcessOutcome, WeekRange, WeekTable, WeeklyAggregator,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
