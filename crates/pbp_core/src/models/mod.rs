//! # Data Model
//!
//! On-disk record shapes for every pipeline stage.
//!
//! - `raw` - Provider play-by-play input (immutable, tolerant of missing fields)
//! - `comprehensive` - Derived per-game record (box score + enriched play log)
//! - `weekly` - Weekly rollups, statistic line items and the aggregation summary

pub mod comprehensive;
pub mod raw;
pub mod weekly;

pub use comprehensive::{
    AnnotatedPlay, BoxGameInfo, BoxScore, ComprehensiveGame, PlayByPlay, TeamStat,
};
pub use raw::{GameInfo, Play, RawGame, TeamInfo};
pub use weekly::{
    AggregationSummary, CategoryCounts, DefensiveLine, GameSummary, PassingLine, PlayerStatLines,
    ReceivingLine, RushingLine, SummaryTotals, TeamSide, WeekSummary, WeeklyRollup,
};
