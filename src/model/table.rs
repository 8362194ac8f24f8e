//! Dataset, Table, Row, and Cell data structures

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::identifier::TableIdentifier;
use super::schema::{ColumnType, TableSchema};
use crate::error::{CodecError, Result};

/// A typed cell value
#[derive(Debug, Clone)]
pub enum CellValue {
    Text(String),
    Number(f64),
    YesNo(bool),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a == b,
            (CellValue::Number(a), CellValue::Number(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::YesNo(a), CellValue::YesNo(b)) => a == b,
            _ => false,
        }
    }
}

impl CellValue {
    /// The column type this value belongs in
    pub fn column_type(&self) -> ColumnType {
        match self {
            CellValue::Text(_) => ColumnType::Text,
            CellValue::Number(_) => ColumnType::Number,
            CellValue::YesNo(_) => ColumnType::YesNo,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_yes_no(&self) -> Option<bool> {
        match self {
            CellValue::YesNo(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert to a display string, without quotes
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
            CellValue::Number(n) => Cow::Owned(n.to_string()),
            CellValue::YesNo(true) => Cow::Borrowed("Yes"),
            CellValue::YesNo(false) => Cow::Borrowed("No"),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::YesNo(b) => serializer.serialize_bool(*b),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Number(f)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Number(f64::from(i))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::YesNo(b)
    }
}

/// One record of a table.
///
/// Only populated columns are stored; a column that is missing from the map is
/// absent, which is different from an empty string or zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    values: IndexMap<String, CellValue>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, builder style
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.set(column, value);
        self
    }

    /// Set a value, returning the previous one
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Option<CellValue> {
        self.values.insert(column.into(), value.into())
    }

    /// Get a cell value by column name; `None` means absent
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.values.get(column)
    }

    /// Make a column absent again
    pub fn remove(&mut self, column: &str) -> Option<CellValue> {
        self.values.shift_remove(column)
    }

    pub fn is_present(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Populated columns, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of populated columns
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A table: identifier, schema, and rows in file order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    identifier: TableIdentifier,
    schema: TableSchema,
    rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table
    pub fn new(identifier: TableIdentifier, schema: TableSchema) -> Self {
        Self {
            identifier,
            schema,
            rows: Vec::new(),
        }
    }

    /// Add a row, checking it against the schema.
    ///
    /// A row must hold at least one value, since an empty data line ends a table.
    pub fn add_row(&mut self, row: Row) -> Result<()> {
        self.check_row(&row)?;
        self.rows.push(row);
        Ok(())
    }

    /// Rows produced by the row builder are already known to fit the schema
    pub(crate) fn push_checked_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    fn check_row(&self, row: &Row) -> Result<()> {
        if row.is_empty() {
            return Err(CodecError::EmptyRow {
                table: self.identifier.to_string(),
            });
        }

        for (name, value) in row.iter() {
            let column = self.schema.column(name).ok_or_else(|| CodecError::UnknownColumn {
                table: self.identifier.to_string(),
                column: name.to_string(),
                line: None,
            })?;

            if column.column_type != value.column_type() {
                return Err(CodecError::TypeCoercion {
                    table: self.identifier.to_string(),
                    column: name.to_string(),
                    line: None,
                    raw: value.display().into_owned(),
                    expected: column.column_type,
                });
            }
        }
        Ok(())
    }

    pub fn identifier(&self) -> &TableIdentifier {
        &self.identifier
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Ordered collection of tables with unique identifiers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    tables: Vec<Table>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a table; identifiers must be unique
    pub fn add_table(&mut self, table: Table) -> Result<()> {
        if self.contains(&table.identifier) {
            return Err(CodecError::DuplicateTable {
                table: table.identifier.to_string(),
                line: None,
            });
        }
        self.tables.push(table);
        Ok(())
    }

    /// Append a row to an existing table
    pub fn add_row(&mut self, identifier: &TableIdentifier, row: Row) -> Result<()> {
        let table = self
            .tables
            .iter_mut()
            .find(|t| &t.identifier == identifier)
            .ok_or_else(|| CodecError::UnknownTable {
                table: identifier.to_string(),
                line: None,
            })?;
        table.add_row(row)
    }

    /// Look up a table by identifier
    pub fn table(&self, identifier: &TableIdentifier) -> Option<&Table> {
        self.tables.iter().find(|t| &t.identifier == identifier)
    }

    pub fn contains(&self, identifier: &TableIdentifier) -> bool {
        self.table(identifier).is_some()
    }

    /// Tables in insertion order
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Number of tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Total rows across all tables
    pub fn row_count(&self) -> usize {
        self.tables.iter().map(Table::row_count).sum()
    }
}
