//! Weekly aggregation.
//!
//! Full re-scan of the comprehensive directory on every invocation: each
//! game is bucketed by the week containing its filename date, its summary
//! and statistic line items are concatenated onto that week's rollup in
//! ascending filename order, and every non-empty week is written out as a
//! full overwrite. A second pass re-reads the written files to produce the
//! operational summary.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::Value;

use crate::error::Result;
use crate::models::comprehensive::ComprehensiveGame;
use crate::models::weekly::{
    AggregationSummary, CategoryCounts, GameSummary, TeamSide, WeekSummary, WeeklyRollup,
};

use super::stats::extract_player_stats;
use super::weeks::WeekTable;
use super::sorted_files_with_suffix;

pub struct WeeklyAggregator {
    comprehensive_dir: PathBuf,
    output_dir: PathBuf,
    table: WeekTable,
}

impl WeeklyAggregator {
    pub fn new(
        comprehensive_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        table: WeekTable,
    ) -> Self {
        Self {
            comprehensive_dir: comprehensive_dir.into(),
            output_dir: output_dir.into(),
            table,
        }
    }

    /// Scan every comprehensive file, bucket by week and write one rollup
    /// file per non-empty week. Returns the number of files written.
    ///
    /// No per-game or per-week failure aborts the pass: unreadable games are
    /// logged and skipped, a failed week write loses that week only.
    pub fn aggregate(&self) -> Result<usize> {
        log::info!(
            "Scanning comprehensive directory: {}",
            self.comprehensive_dir.display()
        );

        if !self.comprehensive_dir.exists() {
            log::error!(
                "Comprehensive directory not found: {}",
                self.comprehensive_dir.display()
            );
            return Ok(0);
        }

        let files = sorted_files_with_suffix(&self.comprehensive_dir, "_complete.json")?;
        log::info!("Found {} comprehensive files", files.len());

        let mut rollups: BTreeMap<u32, WeeklyRollup> = BTreeMap::new();
        for path in &files {
            if let Err(e) = self.accumulate(path, &mut rollups) {
                log::error!("Error processing {}: {}", path.display(), e);
            }
        }

        let mut saved = 0;
        for (week, rollup) in &rollups {
            match self.write_week(*week, rollup) {
                Ok(path) => {
                    log::info!(
                        "Saved {}: {} games, {} player stats",
                        path.display(),
                        rollup.games.len(),
                        rollup.player_stats.total()
                    );
                    saved += 1;
                }
                Err(e) => log::error!("Error saving week {}: {}", week, e),
            }
        }

        log::info!("Successfully created {} weekly aggregation files", saved);
        Ok(saved)
    }

    fn accumulate(&self, path: &Path, rollups: &mut BTreeMap<u32, WeeklyRollup>) -> Result<()> {
        let game: ComprehensiveGame = serde_json::from_str(&fs::read_to_string(path)?)?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let date_str = filename.split('_').next().unwrap_or_default();

        let Some(week) = self.table.week_for_str(date_str)? else {
            log::warn!("Could not determine week for {}, skipping", filename);
            return Ok(());
        };

        let rollup = rollups
            .entry(week)
            .or_insert_with(|| WeeklyRollup::empty(week, self.table.season()));

        rollup.games.push(game_summary(&game, &filename));
        rollup.player_stats.extend(extract_player_stats(&game));

        log::info!("Processed {} -> Week {}", filename, week);
        Ok(())
    }

    fn week_path(&self, week: u32) -> PathBuf {
        self.output_dir
            .join(format!("week_{:02}_{}.json", week, self.table.season()))
    }

    fn write_week(&self, week: u32, rollup: &WeeklyRollup) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.week_path(week);
        fs::write(&path, serde_json::to_string_pretty(rollup)?)?;
        Ok(path)
    }

    /// Re-read each configured week's file from disk and write the
    /// operational summary. Counts come from what was actually written, not
    /// from the in-memory aggregation.
    pub fn write_summary(&self) -> Result<AggregationSummary> {
        let mut summary = AggregationSummary {
            created_at: Utc::now().to_rfc3339(),
            ..AggregationSummary::default()
        };

        for week in self.table.weeks() {
            let path = self.week_path(week);
            if !path.exists() {
                continue;
            }

            let rollup = match read_rollup(&path) {
                Ok(rollup) => rollup,
                Err(e) => {
                    log::error!("Error reading week {} summary: {}", week, e);
                    continue;
                }
            };

            let games = rollup.games.len();
            let performances = rollup.player_stats.total();

            summary.weeks.insert(
                week,
                WeekSummary {
                    games,
                    player_performances: performances,
                    categories: CategoryCounts {
                        passing: rollup.player_stats.passing.len(),
                        rushing: rollup.player_stats.rushing.len(),
                        receiving: rollup.player_stats.receiving.len(),
                        defensive: rollup.player_stats.defensive.len(),
                    },
                },
            );

            summary.totals.total_weeks += 1;
            summary.totals.total_games += games;
            summary.totals.total_player_performances += performances;
        }

        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join("aggregation_summary.json");
        fs::write(&path, serde_json::to_string_pretty(&summary)?)?;
        log::info!("Created aggregation summary: {}", path.display());

        Ok(summary)
    }
}

fn read_rollup(path: &Path) -> Result<WeeklyRollup> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Build the lightweight game summary carried in the weekly game list.
///
/// Falls back to filename-derived id and date when the record lacks them.
/// Home/away selection honors the `home_away` flag with a positional
/// fallback to the first/second team in map order; when flags are absent
/// the fallback can mis-assign sides, which downstream consumers tolerate.
pub fn game_summary(game: &ComprehensiveGame, filename: &str) -> GameSummary {
    let teams: Vec<TeamSide> = game
        .box_score
        .team_stats
        .iter()
        .map(|(abbreviation, stat)| TeamSide {
            // Abbreviation doubles as the display name for now
            name: abbreviation.clone(),
            abbreviation: abbreviation.clone(),
            score: stat.score,
            home_away: stat.home_away.clone(),
        })
        .collect();

    let (status, completed) = decode_status(&game.box_score.game_info.status);

    let name = if teams.len() >= 2 {
        let away = teams.iter().find(|t| t.home_away == "away").unwrap_or(&teams[0]);
        let home = teams.iter().find(|t| t.home_away == "home").unwrap_or(&teams[1]);

        if completed && (away.score > 0 || home.score > 0) {
            format!(
                "{} {}, {} {}",
                away.abbreviation, away.score, home.abbreviation, home.score
            )
        } else {
            format!("{} @ {}", away.abbreviation, home.abbreviation)
        }
    } else {
        "Unknown Game".to_string()
    };

    let id = if game.game_id.is_empty() {
        filename.split('_').nth(1).unwrap_or_default().to_string()
    } else {
        game.game_id.clone()
    };
    let date = if game.date.is_empty() {
        filename.split('_').next().unwrap_or_default().to_string()
    } else {
        game.date.clone()
    };

    let home_team = teams
        .iter()
        .find(|t| t.home_away == "home")
        .or_else(|| teams.first())
        .cloned()
        .unwrap_or_default();
    let away_team = teams
        .iter()
        .find(|t| t.home_away == "away")
        .or_else(|| teams.get(1))
        .cloned()
        .unwrap_or_default();

    GameSummary {
        id,
        date,
        name,
        status,
        completed,
        home_team,
        away_team,
    }
}

/// Decode the carried provider status into a (description, completed) pair.
///
/// Providers send either `{type: {description, completed}}`, a flat
/// `{description}` with a non-object `type`, or a bare string. An object
/// without a usable `type` reads its nested defaults ("Final", not
/// completed); non-object statuses are assumed completed.
fn decode_status(status: &Value) -> (String, bool) {
    match status {
        Value::Object(obj) => match obj.get("type") {
            None | Some(Value::Object(_)) => {
                let ty = obj.get("type").and_then(Value::as_object);
                let description = ty
                    .and_then(|t| t.get("description"))
                    .and_then(Value::as_str)
                    .unwrap_or("Final")
                    .to_string();
                let completed = ty
                    .and_then(|t| t.get("completed"))
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                (description, completed)
            }
            Some(_) => (
                obj.get("description")
                    .and_then(Value::as_str)
                    .unwrap_or("Final")
                    .to_string(),
                true,
            ),
        },
        // Absent status deserializes to null and behaves like an empty object
        Value::Null => ("Final".to_string(), false),
        Value::String(s) => (s.clone(), true),
        other => (other.to_string(), true),
    }
}
