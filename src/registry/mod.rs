//! Schema registry: which tables exist and what their columns are
//!
//! The registry is plain read-only data once populated. Callers that register
//! schemas while other threads parse must provide their own synchronization.

mod builtin;

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{CodecError, Result};
use crate::model::{ColumnSpec, TableIdentifier, TableSchema};

const LOG_TARGET: &str = "s2kio::registry";

/// Mapping from table identifier to schema, in registration order
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: IndexMap<TableIdentifier, TableSchema>,
}

/// Shape of a JSON schema file
#[derive(Debug, Deserialize)]
struct SchemaFile {
    tables: Vec<SchemaFileTable>,
}

#[derive(Debug, Deserialize)]
struct SchemaFileTable {
    name: String,
    columns: Vec<ColumnSpec>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in table format
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for (name, columns) in builtin::TABLES {
            let columns = columns
                .iter()
                .map(|&(column, column_type)| ColumnSpec::new(column, column_type))
                .collect();
            let (identifier, schema) = Self::make(name, columns)?;
            registry.register_unique(identifier, schema)?;
        }
        log::debug!(target: LOG_TARGET, "Registered {} built-in tables", registry.len());
        Ok(registry)
    }

    fn make(name: &str, columns: Vec<ColumnSpec>) -> Result<(TableIdentifier, TableSchema)> {
        let identifier = TableIdentifier::from_display_name(name)?;
        let schema = TableSchema::new(identifier.as_str(), columns)?;
        Ok((identifier, schema))
    }

    /// Insert or replace a schema, returning the one it replaced
    pub fn register(&mut self, identifier: TableIdentifier, schema: TableSchema) -> Option<TableSchema> {
        log::trace!(target: LOG_TARGET, "Registering '{}' ({} columns)", identifier, schema.column_count());
        self.schemas.insert(identifier, schema)
    }

    /// Insert a schema, failing if the identifier is already taken
    pub fn register_unique(&mut self, identifier: TableIdentifier, schema: TableSchema) -> Result<()> {
        if self.schemas.contains_key(&identifier) {
            return Err(CodecError::DuplicateRegistration {
                table: identifier.to_string(),
            });
        }
        self.register(identifier, schema);
        Ok(())
    }

    /// Register a table by its display name
    pub fn register_table(&mut self, name: &str, columns: Vec<ColumnSpec>) -> Result<TableIdentifier> {
        let (identifier, schema) = Self::make(name, columns)?;
        self.register(identifier.clone(), schema);
        Ok(identifier)
    }

    /// Get the schema of a table
    pub fn lookup(&self, identifier: &TableIdentifier) -> Result<&TableSchema> {
        self.schemas
            .get(identifier)
            .ok_or_else(|| CodecError::UnknownTable {
                table: identifier.to_string(),
                line: None,
            })
    }

    /// Schema used to read or write a table.
    ///
    /// Same as [`lookup`](Self::lookup), except that an unregistered
    /// `PROGRAM CONTROL` table gets [`program_control_fallback`](Self::program_control_fallback).
    pub fn resolve(&self, identifier: &TableIdentifier) -> Result<Cow<'_, TableSchema>> {
        match self.schemas.get(identifier) {
            Some(schema) => Ok(Cow::Borrowed(schema)),
            None if *identifier == TableIdentifier::program_control() => {
                Ok(Cow::Owned(Self::program_control_fallback()?))
            }
            None => self.lookup(identifier).map(Cow::Borrowed),
        }
    }

    /// The three `PROGRAM CONTROL` columns every file carries
    pub fn program_control_fallback() -> Result<TableSchema> {
        TableSchema::new(
            TableIdentifier::program_control().as_str(),
            vec![
                ColumnSpec::text("ProgramName"),
                ColumnSpec::text("Version"),
                ColumnSpec::text("CurrUnits"),
            ],
        )
    }

    pub fn contains(&self, identifier: &TableIdentifier) -> bool {
        self.schemas.contains_key(identifier)
    }

    /// Registered tables, in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&TableIdentifier, &TableSchema)> {
        self.schemas.iter()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Merge schemas from a JSON document, replacing tables that already exist.
    ///
    /// Returns the number of tables read.
    pub fn load_json(&mut self, json: &str) -> Result<usize> {
        let file: SchemaFile =
            serde_json::from_str(json).map_err(|e| CodecError::SchemaConfig(e.to_string()))?;

        // Validate everything before touching the registry
        let tables = file
            .tables
            .into_iter()
            .map(|t| Self::make(&t.name, t.columns))
            .collect::<Result<Vec<_>>>()?;

        let count = tables.len();
        for (identifier, schema) in tables {
            if let Some(previous) = self.register(identifier.clone(), schema) {
                log::debug!(
                    target: LOG_TARGET,
                    "Replaced schema of '{}' (previously {} columns)",
                    identifier,
                    previous.column_count()
                );
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColumnType;

    fn id(name: &str) -> TableIdentifier {
        TableIdentifier::from_display_name(name).unwrap()
    }

    #[test]
    fn test_builtin_catalog_is_complete() {
        let registry = SchemaRegistry::builtin().unwrap();
        assert_eq!(registry.len(), builtin::TABLES.len());

        let joints = registry.lookup(&id("JOINT COORDINATES")).unwrap();
        assert_eq!(joints.columns()[0].name, "Joint");
        assert_eq!(joints.column("SpecialJt").unwrap().column_type, ColumnType::YesNo);

        let control = registry.lookup(&TableIdentifier::program_control()).unwrap();
        for column in ["ProgramName", "Version", "CurrUnits"] {
            assert_eq!(control.column(column).unwrap().column_type, ColumnType::Text);
        }

        assert!(registry.contains(&id("STEEL DESIGN 9 - DECISION PARAMETERS - AISC 360-16")));
    }

    #[test]
    fn test_builtin_names_round_trip() {
        for (name, _) in builtin::TABLES {
            assert_eq!(id(name).header_name(), *name);
        }
        assert_eq!(id(builtin::PROGRAM_CONTROL), TableIdentifier::program_control());
    }

    #[test]
    fn test_resolve_falls_back_for_program_control() {
        let registry = SchemaRegistry::new();
        let control = registry.resolve(&TableIdentifier::program_control()).unwrap();
        assert_eq!(control.column_names().collect::<Vec<_>>(), ["ProgramName", "Version", "CurrUnits"]);
        assert!(registry.resolve(&id("JOINT COORDINATES")).is_err());

        let builtin = SchemaRegistry::builtin().unwrap();
        let control = builtin.resolve(&TableIdentifier::program_control()).unwrap();
        assert_eq!(control.column_count(), 13);
    }

    #[test]
    fn test_lookup_unknown_table() {
        let registry = SchemaRegistry::new();
        let err = registry.lookup(&id("JOINT COORDINATES")).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownTable {
                table: "joint-coordinates".into(),
                line: None
            }
        );
    }

    #[test]
    fn test_register_overwrites_but_register_unique_refuses() {
        let mut registry = SchemaRegistry::new();
        let table = id("GRID LINES");
        let one = TableSchema::new("grid-lines", vec![ColumnSpec::text("GridID")]).unwrap();
        let two = TableSchema::new(
            "grid-lines",
            vec![ColumnSpec::text("GridID"), ColumnSpec::number("XRYZCoord")],
        )
        .unwrap();

        assert!(registry.register(table.clone(), one.clone()).is_none());
        assert_eq!(registry.register(table.clone(), two.clone()), Some(one.clone()));
        assert_eq!(registry.lookup(&table).unwrap(), &two);

        let err = registry.register_unique(table.clone(), one).unwrap_err();
        assert!(matches!(err, CodecError::DuplicateRegistration { .. }));
        assert_eq!(registry.lookup(&table).unwrap(), &two);
    }

    #[test]
    fn test_register_table_by_name() {
        let mut registry = SchemaRegistry::new();
        let table = registry
            .register_table("JOINT COORDINATES", vec![ColumnSpec::text("Joint")])
            .unwrap();
        assert_eq!(table.as_str(), "joint-coordinates");

        let err = registry.register_table("NOTHING", Vec::new()).unwrap_err();
        assert!(matches!(err, CodecError::EmptySchema { .. }));
    }

    #[test]
    fn test_load_json() {
        let mut registry = SchemaRegistry::new();
        let json = r#"{
            "tables": [
                {
                    "name": "SURVEY POINTS",
                    "columns": [
                        { "name": "Point", "type": "text" },
                        { "name": "NX", "type": "number" },
                        { "name": "Fixed", "type": "yesno" }
                    ]
                }
            ]
        }"#;
        assert_eq!(registry.load_json(json).unwrap(), 1);

        let schema = registry.lookup(&id("SURVEY POINTS")).unwrap();
        assert_eq!(schema.column("NX").unwrap().ordinal, 1);
        assert_eq!(schema.column("Fixed").unwrap().column_type, ColumnType::YesNo);
    }

    #[test]
    fn test_load_json_is_all_or_nothing() {
        let mut registry = SchemaRegistry::new();
        let json = r#"{"tables": [
            {"name": "GOOD", "columns": [{"name": "A", "type": "text"}]},
            {"name": "BAD", "columns": []}
        ]}"#;
        assert!(matches!(
            registry.load_json(json),
            Err(CodecError::EmptySchema { .. })
        ));
        assert!(registry.is_empty());

        assert!(matches!(
            registry.load_json("{\"tables\": 3}"),
            Err(CodecError::SchemaConfig(_))
        ));
    }
}
