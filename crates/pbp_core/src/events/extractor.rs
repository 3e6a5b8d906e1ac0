//! Comprehensive-record derivation.
//!
//! Classifies each play by event category, attaches inferred player names,
//! and combines a synthesized box score with the enriched play log. The
//! output is a pure function of the raw record and the source filename stem,
//! so re-deriving an existing record is always safe.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::error::{PipelineError, Result};
use crate::models::comprehensive::{
    AnnotatedPlay, BoxGameInfo, BoxScore, ComprehensiveGame, PlayByPlay, TeamStat,
};
use crate::models::raw::{GameInfo, Play, RawGame};

use super::patterns::{extract_player, EventKind};

/// Build the comprehensive record for one game.
///
/// `source_name` is the raw file's stem (`<date>_<anything>_play_by_play`);
/// its date prefix becomes the record's date. A raw record without a game id
/// cannot be keyed and is rejected.
pub fn build_comprehensive(raw: &RawGame, source_name: &str) -> Result<ComprehensiveGame> {
    if raw.game_info.game_id.is_empty() {
        return Err(PipelineError::MissingGameId {
            path: source_name.to_string(),
        });
    }

    let date = source_name.split('_').next().unwrap_or_default().to_string();

    Ok(ComprehensiveGame {
        game_id: raw.game_info.game_id.clone(),
        date,
        box_score: synthesize_box_score(&raw.game_info),
        play_by_play: PlayByPlay {
            game_info: raw.game_info.clone(),
            drives: raw.drives.clone(),
            plays: raw.plays.clone(),
            scoring_plays: extract_scoring_plays(&raw.plays),
            touchdowns: extract_category(&raw.plays, EventKind::Touchdown),
            interceptions: extract_category(&raw.plays, EventKind::Interception),
            fumbles: extract_category(&raw.plays, EventKind::Fumble),
        },
        processing_timestamp: Utc::now().to_rfc3339(),
    })
}

/// Box score from the raw team list only; nothing is derived from the play log.
fn synthesize_box_score(info: &GameInfo) -> BoxScore {
    BoxScore {
        game_info: BoxGameInfo {
            game_id: info.game_id.clone(),
            date: info.date.clone(),
            status: info.status.clone(),
            venue: info.venue.clone(),
            attendance: 0,
        },
        team_stats: synthesize_team_stats(info),
        ..BoxScore::default()
    }
}

fn synthesize_team_stats(info: &GameInfo) -> BTreeMap<String, TeamStat> {
    let mut team_stats = BTreeMap::new();

    for team in &info.teams {
        let abbreviation = if team.abbreviation.is_empty() {
            "UNK".to_string()
        } else {
            team.abbreviation.clone()
        };
        let home_away = if team.home_away.is_empty() {
            "unknown".to_string()
        } else {
            team.home_away.clone()
        };

        team_stats.insert(
            abbreviation,
            TeamStat {
                score: team.score_value(),
                // Preseason record placeholder
                record: "0-0".to_string(),
                home_away,
            },
        );
    }

    team_stats
}

/// Scoring-play membership is solely the provider flag, independent of text.
fn extract_scoring_plays(plays: &[Play]) -> Vec<Play> {
    plays.iter().filter(|p| p.scoring_play).cloned().collect()
}

/// Plays whose lower-cased text contains the category keyword, each with the
/// inferred player attached where inference succeeded. Order and fields of
/// the original plays are preserved.
fn extract_category(plays: &[Play], kind: EventKind) -> Vec<AnnotatedPlay> {
    plays
        .iter()
        .filter(|p| p.text.to_lowercase().contains(kind.keyword()))
        .map(|p| AnnotatedPlay {
            player: extract_player(&p.text, kind),
            play: p.clone(),
        })
        .collect()
}
