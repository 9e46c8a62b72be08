//! Core logic for the gtimelog weekly summary.
//!
//! This crate turns a plain-text timelog into weekly figures:
//! - Entry parsing: recognizing `YYYY-MM-DD HH:MM: label` lines
//! - Aggregation: grouping entries into ISO weeks and weekdays
//! - Summaries: worked, expected and over/under time per week

mod aggregate;
pub mod entry;
mod reader;
pub mod summary;
pub mod week;

pub use aggregate::WeekAggregator;
pub use entry::{Entry, ParseError, ParsedLine, parse_line};
pub use reader::{ReadError, WeekReader};
pub use summary::{Balance, DEFAULT_WORKDAY, DaySummary, WeekSummary};
pub use week::{Day, Span, Week};
