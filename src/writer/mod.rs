//! Writer for S2K table text

mod control;

use crate::error::{CodecError, Result};
use crate::model::{CellValue, Dataset, Table, TableIdentifier, TableSchema};
use crate::registry::SchemaRegistry;

pub use control::{units_from_code, ProgramControlInfo};

const LOG_TARGET: &str = "s2kio::writer";

/// Last line of every file
pub const END_TABLE_DATA: &str = "END TABLE DATA";

const ROW_INDENT: &str = "   ";
const FIELD_SEPARATOR: &str = "   ";
/// A single space, which readers take as the end of a table
const TABLE_TERMINATOR: &str = " ";

/// Serialize a dataset into lines, without line terminators.
///
/// A `PROGRAM CONTROL` table built from `control` is written first when the
/// dataset has none. Every table must be registered; columns are written in the
/// registered order and absent values are skipped.
pub fn serialize(
    dataset: &Dataset,
    registry: &SchemaRegistry,
    control: &ProgramControlInfo,
) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    if !dataset.contains(&TableIdentifier::program_control()) {
        log::debug!(target: LOG_TARGET, "Dataset has no control table, writing one");
        let table = control.to_table(registry)?;
        write_table(&table, table.schema(), &mut lines)?;
    }

    for table in dataset.tables() {
        let schema = registry.resolve(table.identifier())?;
        write_table(table, &schema, &mut lines)?;
    }

    lines.push(END_TABLE_DATA.to_string());
    log::debug!(
        target: LOG_TARGET,
        "Wrote {} tables, {} rows in {} lines",
        dataset.table_count(),
        dataset.row_count(),
        lines.len()
    );
    Ok(lines)
}

/// Serialize into one string with `\n` after every line
pub fn serialize_to_string(
    dataset: &Dataset,
    registry: &SchemaRegistry,
    control: &ProgramControlInfo,
) -> Result<String> {
    let lines = serialize(dataset, registry, control)?;
    let mut text = lines.join("\n");
    text.push('\n');
    Ok(text)
}

fn write_table(table: &Table, schema: &TableSchema, lines: &mut Vec<String>) -> Result<()> {
    lines.push(format!("TABLE:  \"{}\"", table.identifier().header_name()));

    for row in table.rows() {
        // Unknown columns would otherwise be dropped silently
        if let Some((column, _)) = row.iter().find(|(name, _)| schema.column(name).is_none()) {
            return Err(CodecError::UnknownColumn {
                table: table.identifier().to_string(),
                column: column.to_string(),
                line: None,
            });
        }

        let mut fields = Vec::with_capacity(row.len());
        for column in schema.columns() {
            if let Some(value) = row.get(&column.name) {
                fields.push(format_field(table.identifier(), &column.name, value)?);
            }
        }

        lines.push(format!("{}{}", ROW_INDENT, fields.join(FIELD_SEPARATOR)));
    }

    lines.push(TABLE_TERMINATOR.to_string());
    Ok(())
}

fn format_field(table: &TableIdentifier, column: &str, value: &CellValue) -> Result<String> {
    match value {
        CellValue::Text(text) => {
            let reason = if text.contains('"') {
                Some("text contains a double quote")
            } else if text.contains(['\n', '\r']) {
                Some("text contains a line break")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(CodecError::UnencodableValue {
                    table: table.to_string(),
                    column: column.to_string(),
                    reason,
                });
            }
            Ok(format!("{}=\"{}\"", column, text))
        }
        CellValue::Number(_) | CellValue::YesNo(_) => Ok(format!("{}={}", column, value.display())),
    }
}
