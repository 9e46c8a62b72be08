//! Lazily turns a line-oriented timelog into finished weeks.

use std::io::BufRead;

use thiserror::Error;

use crate::aggregate::WeekAggregator;
use crate::entry::{ParseError, ParsedLine, parse_line};
use crate::week::Week;

/// Fatal errors while reading a timelog.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// Iterator over the weeks of a timelog, in input order.
///
/// Lines are pulled one at a time; a week is yielded as soon as the first
/// entry of the following week has been read. Bytes that aren't valid UTF-8
/// are replaced rather than rejected, so a stray comment can't end the run.
/// The first error ends the iteration.
pub struct WeekReader<R> {
    lines: std::io::Split<R>,
    line_no: usize,
    aggregator: WeekAggregator,
    done: bool,
}

impl<R: BufRead> WeekReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
            line_no: 0,
            aggregator: WeekAggregator::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for WeekReader<R> {
    type Item = Result<Week, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            self.line_no += 1;
            let line_no = self.line_no;

            let mut line = match line {
                Ok(line) => line,
                Err(source) => {
                    self.done = true;
                    return Some(Err(ReadError::Io {
                        line: line_no,
                        source,
                    }));
                }
            };

            if line.last() == Some(&b'\r') {
                line.pop();
            }

            match parse_line(&String::from_utf8_lossy(&line)) {
                Ok(ParsedLine::Entry(entry)) => {
                    if let Some(week) = self.aggregator.observe(&entry) {
                        return Some(Ok(week));
                    }
                }
                Ok(ParsedLine::Skip) => {
                    tracing::trace!(line = line_no, "skipping non-entry line");
                }
                Err(source) => {
                    self.done = true;
                    return Some(Err(ReadError::Parse {
                        line: line_no,
                        source,
                    }));
                }
            }
        }

        self.done = true;
        self.aggregator.flush().map(Ok)
    }
}

impl<R: BufRead> std::iter::FusedIterator for WeekReader<R> {}
