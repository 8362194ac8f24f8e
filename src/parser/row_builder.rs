//! Turns tokens into a typed row

use super::tokenizer::Token;
use crate::error::{CodecError, Result};
use crate::model::{CellValue, ColumnType, Row, TableIdentifier, TableSchema};

/// Build a row from the tokens of one record.
///
/// Every token must name a schema column. Columns without a token stay absent.
pub fn build_row(
    table: &TableIdentifier,
    schema: &TableSchema,
    line: usize,
    tokens: &[Token<'_>],
) -> Result<Row> {
    let mut row = Row::new();

    for token in tokens {
        let column = schema.column(token.name).ok_or_else(|| CodecError::UnknownColumn {
            table: table.to_string(),
            column: token.name.to_string(),
            line: Some(line),
        })?;

        let value = coerce(token.value, column.column_type).ok_or_else(|| CodecError::TypeCoercion {
            table: table.to_string(),
            column: column.name.clone(),
            line: Some(line),
            raw: token.value.to_string(),
            expected: column.column_type,
        })?;

        row.set(column.name.as_str(), value);
    }

    Ok(row)
}

/// Convert a raw value to the column's type; quoting does not change the result
pub fn coerce(raw: &str, column_type: ColumnType) -> Option<CellValue> {
    match column_type {
        // Some exports leave text unquoted; take it verbatim
        ColumnType::Text => Some(CellValue::Text(raw.to_string())),
        ColumnType::Number => parse_number(raw).map(CellValue::Number),
        ColumnType::YesNo => parse_yes_no(raw).map(CellValue::YesNo),
    }
}

/// Parse a number with `.` as the decimal point, regardless of locale
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Parse `Yes`/`No`, also accepting `True`/`False`
pub fn parse_yes_no(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("yes") || raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("no") || raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
