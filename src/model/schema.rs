//! Column metadata and table schemas

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Declared type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Written double-quoted
    Text,
    /// Written bare, `f64`
    Number,
    /// Written bare as `Yes` or `No`
    #[serde(alias = "bool", alias = "yes_no")]
    YesNo,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Text => write!(f, "text"),
            ColumnType::Number => write!(f, "number"),
            ColumnType::YesNo => write!(f, "yes/no"),
        }
    }
}

/// Column definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Field name as it appears in `Name=Value` pairs
    pub name: String,
    /// Column type
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Column index (0-based position), which drives write order
    #[serde(skip)]
    pub ordinal: usize,
}

impl ColumnSpec {
    /// Create a column; the ordinal is assigned when the schema is built
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            ordinal: 0,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::Number)
    }

    pub fn yes_no(name: impl Into<String>) -> Self {
        Self::new(name, ColumnType::YesNo)
    }
}

/// Ordered, non-empty list of columns with unique names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    columns: Vec<ColumnSpec>,
}

impl TableSchema {
    /// Build a schema, numbering the columns in the order given.
    ///
    /// `table` only names the schema in error messages.
    pub fn new(table: &str, columns: Vec<ColumnSpec>) -> Result<Self> {
        if columns.is_empty() {
            return Err(CodecError::EmptySchema {
                table: table.to_string(),
            });
        }

        let mut columns = columns;
        for (index, column) in columns.iter_mut().enumerate() {
            column.ordinal = index;
        }

        for (index, column) in columns.iter().enumerate() {
            if columns[..index].iter().any(|c| c.name == column.name) {
                return Err(CodecError::DuplicateColumn {
                    table: table.to_string(),
                    column: column.name.clone(),
                });
            }
        }

        Ok(Self { columns })
    }

    /// Columns in write order
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        let schema = TableSchema::new(
            "joint-coordinates",
            vec![
                ColumnSpec::text("Joint"),
                ColumnSpec::number("X"),
                ColumnSpec::number("Y"),
            ],
        )
        .unwrap();

        let ordinals: Vec<_> = schema.columns().iter().map(|c| c.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2]);
        assert_eq!(schema.column_index("Y"), Some(2));
        assert_eq!(schema.column("X").map(|c| c.column_type), Some(ColumnType::Number));
        assert!(schema.column("Z").is_none());
    }

    #[test]
    fn test_empty_schema_is_rejected() {
        let err = TableSchema::new("empty", Vec::new()).unwrap_err();
        assert_eq!(
            err,
            CodecError::EmptySchema {
                table: "empty".into()
            }
        );
    }

    #[test]
    fn test_duplicate_column_is_rejected() {
        let err = TableSchema::new("dup", vec![ColumnSpec::text("A"), ColumnSpec::number("A")])
            .unwrap_err();
        assert!(matches!(err, CodecError::DuplicateColumn { column, .. } if column == "A"));
    }

    #[test]
    fn test_column_type_names() {
        assert_eq!(ColumnType::Text.to_string(), "text");
        assert_eq!(ColumnType::YesNo.to_string(), "yes/no");
        let parsed: ColumnType = serde_json::from_str("\"bool\"").unwrap();
        assert_eq!(parsed, ColumnType::YesNo);
    }
}
