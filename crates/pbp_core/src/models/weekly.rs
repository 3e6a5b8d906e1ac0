//! Weekly rollups and per-event statistic line items.
//!
//! A line item is one statistical contribution from a single detected event,
//! never a per-player cumulative total. Consumers sum across line items that
//! share a player identity; the aggregator itself performs no cross-event
//! merge, and introducing one would be a breaking schema change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One rollup per (season, week) pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyRollup {
    #[serde(default)]
    pub week: u32,
    #[serde(default)]
    pub season: u32,
    #[serde(default)]
    pub games: Vec<GameSummary>,
    #[serde(default)]
    pub player_stats: PlayerStatLines,
}

impl WeeklyRollup {
    pub fn empty(week: u32, season: u32) -> Self {
        Self {
            week,
            season,
            ..Self::default()
        }
    }
}

/// The four statistic categories, each an unordered list of line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStatLines {
    #[serde(default)]
    pub passing: Vec<PassingLine>,
    #[serde(default)]
    pub rushing: Vec<RushingLine>,
    #[serde(default)]
    pub receiving: Vec<ReceivingLine>,
    #[serde(default)]
    pub defensive: Vec<DefensiveLine>,
}

impl PlayerStatLines {
    /// Concatenate another game's line items onto this week's lists.
    pub fn extend(&mut self, other: PlayerStatLines) {
        self.passing.extend(other.passing);
        self.rushing.extend(other.rushing);
        self.receiving.extend(other.receiving);
        self.defensive.extend(other.defensive);
    }

    /// Total line items across all four categories.
    pub fn total(&self) -> usize {
        self.passing.len() + self.rushing.len() + self.receiving.len() + self.defensive.len()
    }
}

/// Synthesize the deterministic per-rendering player identifier.
///
/// Not a stable cross-game identity: two raw-text renderings of the same
/// player's name produce different identifiers.
pub fn player_id(name: &str) -> String {
    format!("player_{}", name.replace(' ', "_"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PassingLine {
    pub player_id: String,
    pub name: String,
    pub team: String,
    pub team_abbrev: String,
    pub completions: u32,
    pub attempts: u32,
    pub yards: u32,
    pub touchdowns: u32,
    pub interceptions: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RushingLine {
    pub player_id: String,
    pub name: String,
    pub team: String,
    pub team_abbrev: String,
    pub carries: u32,
    pub yards: u32,
    pub touchdowns: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceivingLine {
    pub player_id: String,
    pub name: String,
    pub team: String,
    pub team_abbrev: String,
    pub receptions: u32,
    pub yards: u32,
    pub touchdowns: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefensiveLine {
    pub player_id: String,
    pub name: String,
    pub team: String,
    pub team_abbrev: String,
    pub interceptions: u32,
    pub tackles: u32,
    pub sacks: u32,
}

/// Lightweight per-game summary carried in the weekly game list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSummary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub home_team: TeamSide,
    #[serde(default)]
    pub away_team: TeamSide,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamSide {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub home_away: String,
}

/// Operational summary read back from the written weekly files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregationSummary {
    pub created_at: String,
    #[serde(default)]
    pub weeks: BTreeMap<u32, WeekSummary>,
    #[serde(default)]
    pub totals: SummaryTotals,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekSummary {
    pub games: usize,
    pub player_performances: usize,
    pub categories: CategoryCounts,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub passing: usize,
    pub rushing: usize,
    pub receiving: usize,
    pub defensive: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub total_weeks: usize,
    pub total_games: usize,
    pub total_player_performances: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_replaces_spaces() {
        assert_eq!(player_id("J. Smith"), "player_J._Smith");
        assert_eq!(player_id("T. Van Dyke"), "player_T._Van_Dyke");
    }

    #[test]
    fn test_stat_lines_extend_and_total() {
        let mut week = PlayerStatLines::default();
        let mut game = PlayerStatLines::default();
        game.rushing.push(RushingLine {
            player_id: player_id("B. Hall"),
            name: "B. Hall".to_string(),
            carries: 1,
            yards: 3,
            touchdowns: 1,
            ..RushingLine::default()
        });
        game.defensive.push(DefensiveLine {
            player_id: player_id("D. Square"),
            name: "D. Square".to_string(),
            interceptions: 1,
            ..DefensiveLine::default()
        });

        week.extend(game);
        assert_eq!(week.total(), 2);
        assert_eq!(week.rushing.len(), 1);
        assert_eq!(week.defensive.len(), 1);
    }

    #[test]
    fn test_summary_weeks_serialize_as_object_keys() {
        let mut summary = AggregationSummary {
            created_at: "2025-08-31T00:00:00Z".to_string(),
            ..AggregationSummary::default()
        };
        summary.weeks.insert(1, WeekSummary::default());

        let value = serde_json::to_value(&summary).unwrap();
        assert!(value["weeks"].get("1").is_some());
    }
}
