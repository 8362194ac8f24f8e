//! Error types for the S2K codec

use thiserror::Error;

use crate::model::ColumnType;

/// Result alias used throughout the codec
pub type Result<T> = std::result::Result<T, CodecError>;

/// Every failure the codec can report.
///
/// Line numbers are 1-based and refer to physical lines of the source text.
/// Errors raised while building rows programmatically carry no line number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("table '{table}' is not registered{}", at_line(.line))]
    UnknownTable { table: String, line: Option<usize> },

    #[error("schema for '{table}' has no columns")]
    EmptySchema { table: String },

    #[error("schema for '{table}' declares column '{column}' more than once")]
    DuplicateColumn { table: String, column: String },

    #[error("table '{table}' is already registered")]
    DuplicateRegistration { table: String },

    #[error("table '{table}' appears more than once in the dataset{}", at_line(.line))]
    DuplicateTable { table: String, line: Option<usize> },

    #[error("unrecognized table name \"{name}\"{}", at_line(.line))]
    UnrecognizedTableName { name: String, line: Option<usize> },

    #[error("table '{table}' starting at line {line} is never terminated by a blank line")]
    UnterminatedTable { table: String, line: usize },

    #[error("malformed record in table '{table}' at line {line}: {reason} near `{fragment}`")]
    MalformedRecord {
        table: String,
        line: usize,
        reason: &'static str,
        fragment: String,
    },

    #[error("table '{table}' has no column '{column}'{}", at_line(.line))]
    UnknownColumn {
        table: String,
        column: String,
        line: Option<usize>,
    },

    #[error("cannot read `{raw}` as {expected} for column '{column}' of table '{table}'{}", at_line(.line))]
    TypeCoercion {
        table: String,
        column: String,
        line: Option<usize>,
        raw: String,
        expected: ColumnType,
    },

    #[error("value of column '{column}' in table '{table}' cannot be written: {reason}")]
    UnencodableValue {
        table: String,
        column: String,
        reason: &'static str,
    },

    #[error("a row of table '{table}' has no values; it would be written as a blank line")]
    EmptyRow { table: String },

    #[error("invalid schema configuration: {0}")]
    SchemaConfig(String),
}

fn at_line(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" (line {})", line),
        None => String::new(),
    }
}

impl CodecError {
    /// The 1-based source line the error points at, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            CodecError::UnknownTable { line, .. }
            | CodecError::DuplicateTable { line, .. }
            | CodecError::UnrecognizedTableName { line, .. }
            | CodecError::UnknownColumn { line, .. }
            | CodecError::TypeCoercion { line, .. } => *line,
            CodecError::UnterminatedTable { line, .. } | CodecError::MalformedRecord { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }

    /// Attach a source line to errors that were raised without one
    pub(crate) fn at(self, source_line: usize) -> Self {
        match self {
            CodecError::UnknownTable { table, line: None } => CodecError::UnknownTable {
                table,
                line: Some(source_line),
            },
            CodecError::UnrecognizedTableName { name, line: None } => {
                CodecError::UnrecognizedTableName {
                    name,
                    line: Some(source_line),
                }
            }
            CodecError::DuplicateTable { table, line: None } => CodecError::DuplicateTable {
                table,
                line: Some(source_line),
            },
            other => other,
        }
    }
}
