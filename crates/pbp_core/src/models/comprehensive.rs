//! Comprehensive per-game records.
//!
//! The enriched intermediate format: a synthesized box score plus the full
//! play log with four derived event lists. Written by the event extractor,
//! read back by the weekly aggregator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::raw::{GameInfo, Play};

/// Derived record for one game, keyed by game id and date.
///
/// Invariant: a comprehensive record is a pure function of the raw record it
/// was derived from (plus the source filename, which supplies the date), so
/// re-deriving it is always safe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComprehensiveGame {
    #[serde(default)]
    pub game_id: String,
    /// Date from the source filename prefix (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub box_score: BoxScore,
    #[serde(default)]
    pub play_by_play: PlayByPlay,
    #[serde(default)]
    pub processing_timestamp: String,
}

/// Box score synthesized from the raw team list only, never from the play log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoxScore {
    #[serde(default)]
    pub game_info: BoxGameInfo,
    #[serde(default)]
    pub team_stats: BTreeMap<String, TeamStat>,
    /// Placeholder, always empty; the reporting API expects the key.
    #[serde(default)]
    pub player_stats: Map<String, Value>,
    /// Placeholder, always empty.
    #[serde(default)]
    pub scoring_summary: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoxGameInfo {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub venue: Value,
    #[serde(default)]
    pub attendance: u32,
}

/// Per-team box score entry. The record is a fixed preseason placeholder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamStat {
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub record: String,
    #[serde(default)]
    pub home_away: String,
}

/// Full play log plus the derived event lists.
///
/// Invariant: each derived list is a subset of `plays` with all original
/// fields preserved; the only addition is the optional `player` attribution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayByPlay {
    #[serde(default)]
    pub game_info: GameInfo,
    #[serde(default)]
    pub drives: Vec<Value>,
    #[serde(default)]
    pub plays: Vec<Play>,
    #[serde(default)]
    pub scoring_plays: Vec<Play>,
    #[serde(default)]
    pub touchdowns: Vec<AnnotatedPlay>,
    #[serde(default)]
    pub interceptions: Vec<AnnotatedPlay>,
    #[serde(default)]
    pub fumbles: Vec<AnnotatedPlay>,
}

/// A play copied into an event list, with the inferred player display name
/// attached where inference succeeded. `player` is omitted, not null, when
/// no pattern matched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotatedPlay {
    #[serde(flatten)]
    pub play: Play,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_annotated_play_flattens_original_fields() {
        let play: Play = serde_json::from_value(json!({
            "text": "B. Hall 3 yard run for touchdown",
            "scoring_play": true,
            "quarter": 2
        }))
        .unwrap();

        let annotated = AnnotatedPlay {
            play,
            player: Some("B. Hall".to_string()),
        };

        let value = serde_json::to_value(&annotated).unwrap();
        assert_eq!(value["text"], json!("B. Hall 3 yard run for touchdown"));
        assert_eq!(value["quarter"], json!(2));
        assert_eq!(value["player"], json!("B. Hall"));
    }

    #[test]
    fn test_player_field_omitted_when_absent() {
        let annotated = AnnotatedPlay {
            play: Play {
                text: "pass incomplete".to_string(),
                ..Play::default()
            },
            player: None,
        };

        let value = serde_json::to_value(&annotated).unwrap();
        assert!(value.get("player").is_none());
    }

    #[test]
    fn test_comprehensive_round_trip() {
        let mut game = ComprehensiveGame {
            game_id: "401547001".to_string(),
            date: "2025-08-09".to_string(),
            ..ComprehensiveGame::default()
        };
        game.box_score.team_stats.insert(
            "SF".to_string(),
            TeamStat {
                score: 17,
                record: "0-0".to_string(),
                home_away: "home".to_string(),
            },
        );

        let text = serde_json::to_string_pretty(&game).unwrap();
        let back: ComprehensiveGame = serde_json::from_str(&text).unwrap();
        assert_eq!(back.game_id, "401547001");
        assert_eq!(back.box_score.team_stats["SF"].score, 17);
    }
}
