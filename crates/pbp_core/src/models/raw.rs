//! Raw provider play-by-play records.
//!
//! Input is messy: fields come and go between games, scores arrive as numbers
//! or numeric strings, and plays carry arbitrary provider fields. Everything
//! except `game_id` is tolerated missing, and unrecognized fields are kept in
//! flattened maps so derived records can round-trip them unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One raw per-game record as received from the upstream source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawGame {
    #[serde(default)]
    pub game_info: GameInfo,
    #[serde(default)]
    pub drives: Vec<Value>,
    #[serde(default)]
    pub plays: Vec<Play>,
}

/// Game metadata block. `status` and `venue` are provider JSON carried verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameInfo {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub venue: Value,
    #[serde(default)]
    pub teams: Vec<TeamInfo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One team descriptor from the raw team list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamInfo {
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub score: Value,
    #[serde(default)]
    pub home_away: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TeamInfo {
    /// Score as an integer; providers send numbers or numeric strings.
    pub fn score_value(&self) -> i64 {
        match &self.score {
            Value::Number(n) => n.as_i64().unwrap_or(0),
            Value::String(s) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }
}

/// One entry in a game's play sequence. No structured player or stat fields
/// are guaranteed present; they are inferred from `text` downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Play {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub scoring_play: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_value_coercion() {
        let numeric: TeamInfo = serde_json::from_value(json!({"score": 21})).unwrap();
        assert_eq!(numeric.score_value(), 21);

        let stringy: TeamInfo = serde_json::from_value(json!({"score": "14"})).unwrap();
        assert_eq!(stringy.score_value(), 14);

        let missing: TeamInfo = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.score_value(), 0);

        let garbage: TeamInfo = serde_json::from_value(json!({"score": "n/a"})).unwrap();
        assert_eq!(garbage.score_value(), 0);
    }

    #[test]
    fn test_play_preserves_provider_fields() {
        let play: Play = serde_json::from_value(json!({
            "text": "J. Smith 5 yard run",
            "scoring_play": false,
            "clock": "12:41",
            "drive_number": 3
        }))
        .unwrap();

        assert_eq!(play.extra.get("clock"), Some(&json!("12:41")));
        assert_eq!(play.extra.get("drive_number"), Some(&json!(3)));

        let round_trip = serde_json::to_value(&play).unwrap();
        assert_eq!(round_trip["clock"], json!("12:41"));
        assert_eq!(round_trip["drive_number"], json!(3));
    }

    #[test]
    fn test_raw_game_tolerates_missing_fields() {
        let game: RawGame = serde_json::from_value(json!({
            "game_info": {"game_id": "401547001"}
        }))
        .unwrap();

        assert_eq!(game.game_info.game_id, "401547001");
        assert!(game.plays.is_empty());
        assert!(game.drives.is_empty());
        assert!(game.game_info.teams.is_empty());
    }
}
