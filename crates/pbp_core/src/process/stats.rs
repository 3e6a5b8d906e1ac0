//! Per-game statistic line-item extraction.
//!
//! Converts a comprehensive record's touchdown and interception events into
//! passing/rushing/receiving/defensive line items. Fumble events never
//! produce line items. One event yields one line item per involved player;
//! nothing here merges across events.

use std::collections::HashSet;

use crate::events::patterns::{extract_passer, extract_yards};
use crate::models::comprehensive::ComprehensiveGame;
use crate::models::weekly::{
    player_id, DefensiveLine, PassingLine, PlayerStatLines, ReceivingLine, RushingLine,
};

/// Extract all statistic line items for one game.
///
/// Touchdowns with an attached player are consumed at most once per
/// extraction pass: after a name has been seen, later touchdowns attached to
/// the same name emit nothing, whether or not the first occurrence produced
/// a line item. Interceptions are never deduplicated.
pub fn extract_player_stats(game: &ComprehensiveGame) -> PlayerStatLines {
    let mut lines = PlayerStatLines::default();
    let mut consumed: HashSet<&str> = HashSet::new();

    let team = attribute_team(game);
    let team_abbrev = short_abbrev(&team);

    for touchdown in &game.play_by_play.touchdowns {
        let Some(name) = touchdown.player.as_deref() else {
            continue;
        };
        if !consumed.insert(name) {
            continue;
        }

        let text = &touchdown.play.text;
        let text_lower = text.to_lowercase();

        if text_lower.contains("pass") && text_lower.contains("to") {
            // Passing touchdown: split into passer and receiver contributions.
            // The passer comes from the original-cased text; the attached
            // player is the receiver. The receiver line is emitted even when
            // the passer pattern fails.
            if let Some(passer) = extract_passer(text) {
                lines.passing.push(PassingLine {
                    player_id: player_id(&passer),
                    name: passer,
                    team: team.clone(),
                    team_abbrev: team_abbrev.clone(),
                    completions: 1,
                    attempts: 1,
                    yards: extract_yards(text),
                    touchdowns: 1,
                    interceptions: 0,
                });
            }

            lines.receiving.push(ReceivingLine {
                player_id: player_id(name),
                name: name.to_string(),
                team: team.clone(),
                team_abbrev: team_abbrev.clone(),
                receptions: 1,
                yards: extract_yards(text),
                touchdowns: 1,
            });
        } else if text_lower.contains("run") || text_lower.contains("rush") {
            lines.rushing.push(RushingLine {
                player_id: player_id(name),
                name: name.to_string(),
                team: team.clone(),
                team_abbrev: team_abbrev.clone(),
                carries: 1,
                yards: extract_yards(text),
                touchdowns: 1,
            });
        }
    }

    for interception in &game.play_by_play.interceptions {
        let Some(name) = interception.player.as_deref() else {
            continue;
        };

        lines.defensive.push(DefensiveLine {
            player_id: player_id(name),
            name: name.to_string(),
            team: team.clone(),
            team_abbrev: team_abbrev.clone(),
            interceptions: 1,
            tackles: 0,
            sacks: 0,
        });
    }

    lines
}

/// Team attribution heuristic: with at least two teams in the box score,
/// every event is attributed to the first team in the raw descriptor list
/// (its name, falling back to the first team-stats key). This does NOT
/// determine which team the player actually belongs to; downstream
/// consumers compensate, so the behavior is preserved as-is.
fn attribute_team(game: &ComprehensiveGame) -> String {
    let team_stats = &game.box_score.team_stats;
    if team_stats.len() < 2 {
        return "Unknown Team".to_string();
    }

    game.play_by_play
        .game_info
        .teams
        .first()
        .and_then(|t| t.name.clone())
        .or_else(|| team_stats.keys().next().cloned())
        .unwrap_or_else(|| "Unknown Team".to_string())
}

fn short_abbrev(team: &str) -> String {
    team.chars().take(3).collect::<String>().to_uppercase()
}
