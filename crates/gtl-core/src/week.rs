//! Week and day groups built from a chronological entry stream.

use chrono::{Datelike, IsoWeek, NaiveDate, NaiveDateTime, TimeDelta, Weekday};

use crate::entry::Entry;

/// Interval ending at `end`; it starts where the previous span (or the day) ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub end: NaiveDateTime,
    pub is_work: bool,
}

/// Entries sharing a weekday within one ISO week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub weekday: Weekday,
    /// Timestamp of the entry that opened the day.
    pub start: NaiveDateTime,
    pub spans: Vec<Span>,
}

impl Day {
    /// Opens a day at the given entry. The entry itself contributes no span.
    pub fn open(entry: &Entry) -> Self {
        Self {
            weekday: entry.timestamp.weekday(),
            start: entry.timestamp,
            spans: Vec::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Total of work spans, each measured from the end of the span before it.
    ///
    /// Non-work spans still move the cursor forward.
    pub fn worked(&self) -> TimeDelta {
        let mut cursor = self.start;
        let mut worked = TimeDelta::zero();
        for span in &self.spans {
            if span.is_work {
                worked += span.end - cursor;
            }
            cursor = span.end;
        }
        worked
    }
}

/// Days belonging to one ISO (year, week) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub iso_week: IsoWeek,
    pub days: Vec<Day>,
}

impl Week {
    /// Opens a week whose first day starts at `entry`.
    pub fn open(entry: &Entry) -> Self {
        Self {
            iso_week: entry.timestamp.iso_week(),
            days: vec![Day::open(entry)],
        }
    }

    pub fn year(&self) -> i32 {
        self.iso_week.year()
    }

    pub fn week(&self) -> u32 {
        self.iso_week.week()
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        timestamp.iso_week() == self.iso_week
    }

    /// Adds a same-week entry.
    ///
    /// Same weekday as the last day appends a span to it; any other weekday
    /// opens a new day instead. Only the weekday is compared, never the date.
    pub fn append(&mut self, entry: &Entry) {
        match self.days.last_mut() {
            Some(day) if day.weekday == entry.timestamp.weekday() => day.spans.push(Span {
                end: entry.timestamp,
                is_work: entry.is_work(),
            }),
            _ => self.days.push(Day::open(entry)),
        }
    }
}
