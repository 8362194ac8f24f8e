//! Finds where each table starts and ends

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CodecError, Result};
use crate::model::TableIdentifier;

static TABLE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^TABLE:\s*"(?P<name>[^"]*)""#).expect("invalid regex"));

/// The lines of one table, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpan {
    /// Table named by the header
    pub identifier: TableIdentifier,
    /// 0-based index of the `TABLE:` line
    pub header: usize,
    /// 0-based indices of the data lines, strictly between header and terminator
    pub data: Range<usize>,
}

impl TableSpan {
    /// 1-based line number of the header
    pub fn header_line(&self) -> usize {
        self.header + 1
    }

    /// 1-based line number of the first data line
    pub fn first_line(&self) -> usize {
        self.data.start + 1
    }

    /// 1-based line number of the last data line; equals `header_line` for an empty table
    pub fn last_line(&self) -> usize {
        self.data.end
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

enum State {
    Outside,
    InsideTable(TableIdentifier, usize),
}

/// Name inside a `TABLE:  "NAME"` header, if the line is one
pub fn header_name(line: &str) -> Option<&str> {
    TABLE_HEADER
        .captures(line)
        .and_then(|c| c.name("name"))
        .map(|m| m.as_str())
}

/// A line whose trimmed length is at most one character ends a table
pub fn is_table_terminator(line: &str) -> bool {
    line.trim().chars().nth(1).is_none()
}

/// Scan the lines and return every table span in file order.
///
/// Lines outside a table that are not headers are ignored, including the
/// trailing `END TABLE DATA` sentinel.
pub fn locate<S: AsRef<str>>(lines: &[S]) -> Result<Vec<TableSpan>> {
    let mut spans = Vec::new();
    let mut state = State::Outside;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        state = match state {
            State::Outside => match header_name(line) {
                Some(name) => {
                    let identifier =
                        TableIdentifier::from_display_name(name).map_err(|e| e.at(index + 1))?;
                    State::InsideTable(identifier, index)
                }
                None => State::Outside,
            },
            State::InsideTable(identifier, start) => {
                if is_table_terminator(line) {
                    spans.push(TableSpan {
                        identifier,
                        header: start,
                        data: start + 1..index,
                    });
                    State::Outside
                } else {
                    State::InsideTable(identifier, start)
                }
            }
        };
    }

    if let State::InsideTable(identifier, start) = state {
        return Err(CodecError::UnterminatedTable {
            table: identifier.to_string(),
            line: start + 1,
        });
    }

    Ok(spans)
}
