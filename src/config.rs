//! Configuration handling for s2kio

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::registry::SchemaRegistry;
use crate::writer::ProgramControlInfo;

/// Output format for exported data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Csv,
    S2k,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "s2k" => Ok(OutputFormat::S2k),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration shared by the CLI commands
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// JSON schema files merged over the built-in tables
    pub schema_files: Vec<PathBuf>,
    /// Leave out the built-in tables
    pub no_builtin: bool,
    /// Metadata for a synthesized `PROGRAM CONTROL` table
    pub control: ProgramControlInfo,
    /// Output format
    pub output_format: OutputFormat,
    /// Only output this table (display name or identifier)
    pub table: Option<String>,
    /// Disable colored output
    pub no_color: bool,
}

impl Config {
    /// Add JSON schema files
    pub fn with_schema_files(mut self, files: Vec<PathBuf>) -> Self {
        self.schema_files = files;
        self
    }

    /// Start from an empty registry instead of the built-in tables
    pub fn with_no_builtin(mut self, no_builtin: bool) -> Self {
        self.no_builtin = no_builtin;
        self
    }

    /// Set control table metadata
    pub fn with_control(mut self, control: ProgramControlInfo) -> Self {
        self.control = control;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Restrict output to one table
    pub fn with_table(mut self, table: String) -> Self {
        self.table = Some(table);
        self
    }

    /// Disable colors
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Build the schema registry this configuration describes
    pub fn build_registry(&self) -> Result<SchemaRegistry> {
        let mut registry = if self.no_builtin {
            SchemaRegistry::new()
        } else {
            SchemaRegistry::builtin().context("Failed to build the built-in table catalog")?
        };

        for path in &self.schema_files {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read schema file: {}", path.display()))?;
            let count = registry
                .load_json(&json)
                .with_context(|| format!("Failed to load schema file: {}", path.display()))?;
            log::info!("Loaded {} table schemas from {}", count, path.display());
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::model::TableIdentifier;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_build_registry_merges_schema_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tables": [{{"name": "SURVEY POINTS", "columns": [{{"name": "Point", "type": "text"}}]}}]}}"#
        )
        .unwrap();

        let config = Config::default()
            .with_no_builtin(true)
            .with_schema_files(vec![file.path().to_path_buf()]);
        let registry = config.build_registry().unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&TableIdentifier::from_display_name("SURVEY POINTS").unwrap()));

        let registry = Config::default()
            .with_schema_files(vec![file.path().to_path_buf()])
            .build_registry()
            .unwrap();
        assert!(registry.len() > 40);
    }

    #[test]
    fn test_missing_schema_file() {
        let config = Config::default().with_schema_files(vec![PathBuf::from("/nonexistent/schemas.json")]);
        let err = config.build_registry().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read schema file"));
    }
}
