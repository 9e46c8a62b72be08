//! Report command printing one block per ISO week of the timelog.
//!
//! Weeks are written as soon as they are complete, so a damaged line late in
//! the log still leaves every earlier week on the output.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::TimeDelta;
use serde::Serialize;

use gtl_core::{Balance, WeekReader, WeekSummary};

/// Report settings resolved from CLI flags and configuration.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub workday: TimeDelta,
    pub json: bool,
}

// ========== Duration Formatting ==========

/// Formats a duration as `XhYmZs`, dropping leading zero units.
/// Sub-second parts are truncated.
pub fn format_duration(delta: TimeDelta) -> String {
    let total_seconds = delta.num_seconds();
    if total_seconds == 0 {
        return "0s".to_string();
    }
    let sign = if total_seconds < 0 { "-" } else { "" };
    let total_seconds = total_seconds.abs();
    let hours = total_seconds / 3600;
    let minutes = total_seconds % 3600 / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{sign}{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{seconds}s")
    } else {
        format!("{sign}{seconds}s")
    }
}

// ========== Text Output ==========

/// Formats the human-readable block for one week, blank line included.
pub fn format_week(summary: &WeekSummary) -> String {
    let mut output = String::new();

    writeln!(output, "{:04} week {:02}:", summary.year, summary.week).unwrap();
    for day in &summary.days {
        writeln!(
            output,
            "  {}: {}",
            day.date.format("%Y-%m-%d"),
            format_duration(day.worked)
        )
        .unwrap();
    }

    writeln!(output, "   daily: {}", format_duration(summary.daily_average)).unwrap();
    writeln!(output, "  worked: {}", format_duration(summary.worked)).unwrap();
    writeln!(output, "  expect: {}", format_duration(summary.expected)).unwrap();
    let amount = format_duration(summary.balance_amount());
    match summary.balance() {
        Balance::Over => writeln!(output, "    over: {amount}").unwrap(),
        Balance::Under => writeln!(output, "   under: {amount}").unwrap(),
    }
    writeln!(output).unwrap();

    output
}

// ========== JSON Output ==========

/// JSON week structure.
#[derive(Debug, Serialize)]
pub struct JsonWeek {
    pub year: i32,
    pub week: u32,
    pub days: Vec<JsonDay>,
    pub daily_average_ms: i64,
    pub worked_ms: i64,
    pub expected_ms: i64,
    pub overtime_ms: i64,
    pub balance: Balance,
}

#[derive(Debug, Serialize)]
pub struct JsonDay {
    pub date: String,
    pub worked_ms: i64,
}

/// Formats one week as a single-line JSON object.
pub fn format_week_json(summary: &WeekSummary) -> Result<String> {
    let week = JsonWeek {
        year: summary.year,
        week: summary.week,
        days: summary
            .days
            .iter()
            .map(|day| JsonDay {
                date: day.date.format("%Y-%m-%d").to_string(),
                worked_ms: day.worked.num_milliseconds(),
            })
            .collect(),
        daily_average_ms: summary.daily_average.num_milliseconds(),
        worked_ms: summary.worked.num_milliseconds(),
        expected_ms: summary.expected.num_milliseconds(),
        overtime_ms: summary.overtime.num_milliseconds(),
        balance: summary.balance(),
    };

    Ok(serde_json::to_string(&week)?)
}

// ========== Public Interface ==========

/// Runs the report over a timelog, writing each week as soon as it is complete.
///
/// Returns the number of weeks written.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: ReportOptions,
) -> Result<usize> {
    let mut written = 0;

    for week in WeekReader::new(reader) {
        let week = week.context("failed to read timelog")?;
        let Some(summary) = WeekSummary::new(&week, options.workday) else {
            continue;
        };

        if options.json {
            writeln!(writer, "{}", format_week_json(&summary)?)?;
        } else {
            write!(writer, "{}", format_week(&summary))?;
        }
        writer.flush()?;
        written += 1;
    }

    tracing::debug!(weeks = written, "report complete");
    Ok(written)
}
