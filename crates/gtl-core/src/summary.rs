//! Per-week totals and over/under time.

use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

use crate::week::Week;

/// Length of the standard workday.
pub const DEFAULT_WORKDAY: TimeDelta = TimeDelta::hours(7);

/// Worked time on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub worked: TimeDelta,
}

/// Which side of the expected total a week landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Balance {
    Over,
    Under,
}

/// Computed figures for one finished week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSummary {
    pub year: i32,
    pub week: u32,
    pub days: Vec<DaySummary>,
    pub worked: TimeDelta,
    pub expected: TimeDelta,
    /// Truncated to whole nanoseconds.
    pub daily_average: TimeDelta,
    /// `worked - expected`; negative when under.
    pub overtime: TimeDelta,
}

impl WeekSummary {
    /// Summarizes a week, expecting `workday` for every day present.
    ///
    /// Returns `None` for a week without days.
    pub fn new(week: &Week, workday: TimeDelta) -> Option<Self> {
        if week.days.is_empty() {
            return None;
        }

        let days: Vec<DaySummary> = week
            .days
            .iter()
            .map(|day| DaySummary {
                date: day.date(),
                worked: day.worked(),
            })
            .collect();

        let count = i32::try_from(days.len()).unwrap_or(i32::MAX);
        let worked = days
            .iter()
            .fold(TimeDelta::zero(), |acc, day| acc + day.worked);
        let expected = workday * count;

        Some(Self {
            year: week.year(),
            week: week.week(),
            days,
            worked,
            expected,
            daily_average: worked / count,
            overtime: worked - expected,
        })
    }

    pub fn balance(&self) -> Balance {
        if self.overtime > TimeDelta::zero() {
            Balance::Over
        } else {
            Balance::Under
        }
    }

    /// Magnitude of the over/under figure.
    pub fn balance_amount(&self) -> TimeDelta {
        self.overtime.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Datelike, IsoWeek, NaiveDateTime, Weekday};

    use crate::week::{Day, Span};

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn iso_week(date: &str) -> IsoWeek {
        ts(&format!("{date} 00:00")).iso_week()
    }

    fn day(start: &str, ends: &[(&str, bool)]) -> Day {
        let start = ts(start);
        Day {
            weekday: start.weekday(),
            start,
            spans: ends
                .iter()
                .map(|&(end, is_work)| Span {
                    end: ts(end),
                    is_work,
                })
                .collect(),
        }
    }

    #[test]
    fn empty_week_has_no_summary() {
        let week = Week {
            iso_week: iso_week("2024-06-03"),
            days: vec![],
        };
        assert!(WeekSummary::new(&week, DEFAULT_WORKDAY).is_none());
    }

    #[test]
    fn single_day_without_spans_is_a_full_day_under() {
        let week = Week {
            iso_week: iso_week("2024-06-03"),
            days: vec![day("2024-06-03 09:00", &[])],
        };
        let summary = WeekSummary::new(&week, DEFAULT_WORKDAY).unwrap();

        assert_eq!(summary.worked, TimeDelta::zero());
        assert_eq!(summary.expected, TimeDelta::hours(7));
        assert_eq!(summary.balance(), Balance::Under);
        assert_eq!(summary.balance_amount(), TimeDelta::hours(7));
    }

    #[test]
    fn totals_across_days() {
        let week = Week {
            iso_week: iso_week("2024-06-03"),
            days: vec![
                day("2024-06-03 09:00", &[("2024-06-03 17:30", true)]),
                day(
                    "2024-06-04 08:00",
                    &[
                        ("2024-06-04 12:00", true),
                        ("2024-06-04 13:00", false),
                        ("2024-06-04 17:00", true),
                    ],
                ),
            ],
        };
        let summary = WeekSummary::new(&week, DEFAULT_WORKDAY).unwrap();

        assert_eq!((summary.year, summary.week), (2024, 23));
        assert_eq!(summary.days[0].worked, TimeDelta::minutes(8 * 60 + 30));
        assert_eq!(summary.days[1].worked, TimeDelta::hours(8));
        assert_eq!(summary.days[1].date.weekday(), Weekday::Tue);
        assert_eq!(summary.worked, TimeDelta::minutes(16 * 60 + 30));
        assert_eq!(summary.expected, TimeDelta::hours(14));
        assert_eq!(summary.daily_average, TimeDelta::minutes(8 * 60 + 15));
        assert_eq!(summary.overtime, TimeDelta::minutes(150));
        assert_eq!(summary.balance(), Balance::Over);
    }

    #[test]
    fn exactly_expected_counts_as_under() {
        let week = Week {
            iso_week: iso_week("2024-06-03"),
            days: vec![day("2024-06-03 09:00", &[("2024-06-03 16:00", true)])],
        };
        let summary = WeekSummary::new(&week, DEFAULT_WORKDAY).unwrap();

        assert_eq!(summary.overtime, TimeDelta::zero());
        assert_eq!(summary.balance(), Balance::Under);
        assert_eq!(summary.balance_amount(), TimeDelta::zero());
    }

    #[test]
    fn daily_average_truncates() {
        let week = Week {
            iso_week: iso_week("2024-06-03"),
            days: vec![
                day("2024-06-03 09:00", &[("2024-06-03 09:01", true)]),
                day("2024-06-04 09:00", &[]),
                day("2024-06-05 09:00", &[]),
            ],
        };
        let summary = WeekSummary::new(&week, DEFAULT_WORKDAY).unwrap();

        assert_eq!(summary.daily_average, TimeDelta::seconds(20));

        let week = Week {
            iso_week: iso_week("2024-06-03"),
            days: vec![
                day("2024-06-03 09:00", &[("2024-06-03 10:00", true)]),
                day("2024-06-04 09:00", &[]),
                day("2024-06-05 09:00", &[]),
                day("2024-06-06 09:00", &[]),
                day("2024-06-07 09:00", &[]),
                day("2024-06-08 09:00", &[]),
                day("2024-06-09 09:00", &[]),
            ],
        };
        let summary = WeekSummary::new(&week, DEFAULT_WORKDAY).unwrap();
        assert_eq!(summary.daily_average, TimeDelta::nanoseconds(514_285_714_285));
    }

    #[test]
    fn custom_workday_scales_expected() {
        let week = Week {
            iso_week: iso_week("2024-06-03"),
            days: vec![
                day("2024-06-03 09:00", &[("2024-06-03 17:00", true)]),
                day("2024-06-04 09:00", &[("2024-06-04 17:00", true)]),
            ],
        };
        let summary = WeekSummary::new(&week, TimeDelta::hours(8)).unwrap();

        assert_eq!(summary.expected, TimeDelta::hours(16));
        assert_eq!(summary.overtime, TimeDelta::zero());
        assert_eq!(summary.balance(), Balance::Under);
    }
}
