//! Season week calendar.
//!
//! A small ordered table maps week numbers to inclusive calendar ranges.
//! Ranges are non-overlapping by construction; resolution returns the first
//! containing range, so an overlapping table would silently favor the
//! earlier entry and is not guarded at runtime.

use chrono::NaiveDate;

use crate::error::{PipelineError, Result};

/// One week's inclusive `[start, end]` date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub week: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Ordered week table for one season.
#[derive(Debug, Clone)]
pub struct WeekTable {
    season: u32,
    ranges: Vec<WeekRange>,
}

impl WeekTable {
    pub fn new(season: u32, ranges: Vec<WeekRange>) -> Self {
        Self { season, ranges }
    }

    /// The 2025 preseason: four weeks spanning August.
    pub fn preseason_2025() -> Self {
        Self::new(
            2025,
            vec![
                week_range(1, (2025, 8, 1), (2025, 8, 11)),
                week_range(2, (2025, 8, 12), (2025, 8, 18)),
                week_range(3, (2025, 8, 19), (2025, 8, 25)),
                week_range(4, (2025, 8, 26), (2025, 8, 31)),
            ],
        )
    }

    pub fn season(&self) -> u32 {
        self.season
    }

    /// Configured week numbers, in table order.
    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranges.iter().map(|r| r.week)
    }

    /// First week whose range contains `date`, if any.
    pub fn week_for(&self, date: NaiveDate) -> Option<u32> {
        self.ranges.iter().find(|r| r.contains(date)).map(|r| r.week)
    }

    /// Resolve a `YYYY-MM-DD` date string to a week number. An unparseable
    /// string is a per-file error; a date outside every range is `Ok(None)`
    /// (the caller drops the game with a warning).
    pub fn week_for_str(&self, date: &str) -> Result<Option<u32>> {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            PipelineError::InvalidDate {
                value: date.to_string(),
            }
        })?;
        Ok(self.week_for(parsed))
    }
}

impl Default for WeekTable {
    fn default() -> Self {
        Self::preseason_2025()
    }
}

fn week_range(week: u32, start: (i32, u32, u32), end: (i32, u32, u32)) -> WeekRange {
    WeekRange {
        week,
        start: NaiveDate::from_ymd_opt(start.0, start.1, start.2).expect("valid calendar date"),
        end: NaiveDate::from_ymd_opt(end.0, end.1, end.2).expect("valid calendar date"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_dates_resolve_to_their_own_week() {
        let table = WeekTable::preseason_2025();

        assert_eq!(table.week_for_str("2025-08-01").unwrap(), Some(1));
        assert_eq!(table.week_for_str("2025-08-11").unwrap(), Some(1));
        assert_eq!(table.week_for_str("2025-08-12").unwrap(), Some(2));
        assert_eq!(table.week_for_str("2025-08-25").unwrap(), Some(3));
        assert_eq!(table.week_for_str("2025-08-26").unwrap(), Some(4));
        assert_eq!(table.week_for_str("2025-08-31").unwrap(), Some(4));
    }

    #[test]
    fn test_date_outside_every_range_is_dropped() {
        let table = WeekTable::preseason_2025();

        assert_eq!(table.week_for_str("2025-07-31").unwrap(), None);
        assert_eq!(table.week_for_str("2025-09-01").unwrap(), None);
    }

    #[test]
    fn test_unparseable_date_is_an_error() {
        let table = WeekTable::preseason_2025();

        assert!(matches!(
            table.week_for_str("not-a-date"),
            Err(PipelineError::InvalidDate { .. })
        ));
        assert!(table.week_for_str("2025-13-01").is_err());
    }

    #[test]
    fn test_first_matching_range_wins() {
        // Deliberately overlapping table: resolution must take the first.
        let table = WeekTable::new(
            2025,
            vec![
                week_range(1, (2025, 8, 1), (2025, 8, 15)),
                week_range(2, (2025, 8, 10), (2025, 8, 20)),
            ],
        );

        assert_eq!(table.week_for_str("2025-08-12").unwrap(), Some(1));
    }

    #[test]
    fn test_season_and_weeks_accessors() {
        let table = WeekTable::preseason_2025();
        assert_eq!(table.season(), 2025);
        assert_eq!(table.weeks().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
