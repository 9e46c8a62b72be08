//! Streaming week/day grouping.

use chrono::NaiveDateTime;

use crate::entry::Entry;
use crate::week::Week;

/// Groups entries into weeks, holding only the week currently in progress.
///
/// Entries are expected in chronological order. Out-of-order timestamps are
/// grouped exactly as they arrive; they are only reported through a warning.
#[derive(Debug, Default)]
pub struct WeekAggregator {
    current: Option<Week>,
    last_seen: Option<NaiveDateTime>,
}

impl WeekAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The week currently being filled, if any entry has been seen.
    pub const fn current(&self) -> Option<&Week> {
        self.current.as_ref()
    }

    /// Whether `timestamp` is earlier than the last entry observed.
    pub fn is_out_of_order(&self, timestamp: NaiveDateTime) -> bool {
        self.last_seen.is_some_and(|last| timestamp < last)
    }

    /// Feeds one entry.
    ///
    /// Returns the previous week once an entry from a different ISO week
    /// arrives; that week is final and will not change again.
    pub fn observe(&mut self, entry: &Entry) -> Option<Week> {
        if self.is_out_of_order(entry.timestamp) {
            tracing::warn!(
                timestamp = %entry.timestamp,
                previous = ?self.last_seen,
                "entry is out of order; grouping it as it appears"
            );
        }
        self.last_seen = Some(entry.timestamp);

        if let Some(week) = self
            .current
            .as_mut()
            .filter(|week| week.contains(entry.timestamp))
        {
            week.append(entry);
            return None;
        }

        let finished = self.current.replace(Week::open(entry));
        if let Some(week) = &finished {
            tracing::debug!(
                year = week.year(),
                week = week.week(),
                days = week.days.len(),
                "week finalized"
            );
        }
        finished.filter(|week| !week.days.is_empty())
    }

    /// Ends the stream and hands back the week in progress.
    pub fn flush(&mut self) -> Option<Week> {
        self.last_seen = None;
        self.current.take().filter(|week| !week.days.is_empty())
    }
}
