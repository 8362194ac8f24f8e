//! Joins physically wrapped lines into logical records

use crate::error::{CodecError, Result};
use crate::model::TableIdentifier;

/// Trailing marker meaning "this record continues on the next line"
pub const CONTINUATION_MARKER: char = '_';

/// One data record after continuation lines have been joined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalRecord {
    /// 1-based line number of the record's first physical line
    pub line: usize,
    pub text: String,
}

/// Join the data lines of one table.
///
/// `first_line` is the 1-based line number of `lines[0]`. A line ending in the
/// continuation marker loses the marker and has the next line appended with no
/// separator. A table whose last line still carries the marker is malformed.
pub fn reassemble<S: AsRef<str>>(
    table: &TableIdentifier,
    lines: &[S],
    first_line: usize,
) -> Result<Vec<LogicalRecord>> {
    let mut records = Vec::new();
    let mut pending: Option<LogicalRecord> = None;

    for (offset, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let record = pending.get_or_insert_with(|| LogicalRecord {
            line: first_line + offset,
            text: String::new(),
        });

        match line.strip_suffix(CONTINUATION_MARKER) {
            Some(head) => record.text.push_str(head),
            None => {
                record.text.push_str(line);
                records.extend(pending.take());
            }
        }
    }

    if let Some(record) = pending {
        return Err(CodecError::MalformedRecord {
            table: table.to_string(),
            line: record.line,
            reason: "continuation marker on the last line of the table",
            fragment: super::fragment(&record.text),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TableIdentifier {
        TableIdentifier::parse("joint-coordinates").unwrap()
    }

    #[test]
    fn test_single_lines_pass_through() {
        let lines = ["   Joint=\"1\"", "   Joint=\"2\""];
        let records = reassemble(&table(), &lines, 10).unwrap();
        assert_eq!(
            records,
            vec![
                LogicalRecord {
                    line: 10,
                    text: "   Joint=\"1\"".into()
                },
                LogicalRecord {
                    line: 11,
                    text: "   Joint=\"2\"".into()
                },
            ]
        );
    }

    #[test]
    fn test_continuation_inside_quoted_value() {
        let lines = ["Field1=1 Field2=\"ab_", "c\""];
        let records = reassemble(&table(), &lines, 3).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "Field1=1 Field2=\"abc\"");
        assert_eq!(records[0].line, 3);
    }

    #[test]
    fn test_multiple_continuations() {
        let lines = ["A=1 _", "   B=2 _", "   C=3", "D=4"];
        let records = reassemble(&table(), &lines, 1).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "A=1    B=2    C=3");
        assert_eq!(records[1].line, 4);
    }

    #[test]
    fn test_dangling_marker() {
        let lines = ["A=1", "B=2 _"];
        let err = reassemble(&table(), &lines, 5).unwrap_err();
        assert!(matches!(err, CodecError::MalformedRecord { line: 6, .. }));
    }
}
