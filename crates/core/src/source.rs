//! Line-split source text and span slicing.

use crate::error::{Result, SummaryError};
use serde::{Deserialize, Serialize};

/// A zero-based (row, column) point. Columns are byte offsets within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Source text split into rows the same way tree-sitter counts them.
///
/// Only `\n` starts a new row; a trailing `\r` is stripped from each row so
/// CRLF input slices the same as LF input. A trailing newline yields a final
/// empty row, which keeps end positions of the root node in bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLines {
    lines: Vec<String>,
}

impl SourceLines {
    pub fn from_source(source: &str) -> Self {
        let lines = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Returns the exact text covered by `span`.
    ///
    /// Rows of a multi-row span are concatenated without separators: the tail
    /// of the first row, every intermediate row, then the head of the last row.
    pub fn slice(&self, span: Span) -> Result<String> {
        if span.is_empty() {
            return Ok(String::new());
        }
        if span.end < span.start {
            return Err(SummaryError::InvalidSpan);
        }

        let Span { start, end } = span;
        if start.row == end.row {
            let line = self.row(start.row)?;
            return slice_range(line, start, end.column).map(str::to_string);
        }

        let mut result = String::new();
        for row in start.row..=end.row {
            let line = self.row(row)?;
            let part = if row == start.row {
                slice_range(line, start, line.len())?
            } else if row == end.row {
                slice_range(line, Position::new(row, 0), end.column)?
            } else {
                line
            };
            result.push_str(part);
        }
        Ok(result)
    }

    fn row(&self, row: usize) -> Result<&str> {
        self.line(row).ok_or(SummaryError::OutOfBounds { row, column: 0 })
    }
}

fn slice_range(line: &str, from: Position, to: usize) -> Result<&str> {
    let out_of_bounds = SummaryError::OutOfBounds {
        row: from.row,
        column: to.max(from.column),
    };
    if to > line.len() || from.column > line.len() {
        return Err(out_of_bounds);
    }
    if from.column > to {
        return Err(SummaryError::InvalidSpan);
    }
    // Columns that split a multi-byte character are treated as out of bounds.
    line.get(from.column..to).ok_or(out_of_bounds)
}
