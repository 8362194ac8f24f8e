//! Output formatting for parsed datasets

mod csv;
mod json;
mod s2k;
mod terminal;

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Result};

use crate::config::{Config, OutputFormat};
use crate::model::{Dataset, TableIdentifier};
use crate::registry::SchemaRegistry;

pub use self::csv::CsvOutput;
pub use self::json::JsonOutput;
pub use self::s2k::S2kOutput;
pub use self::terminal::TerminalOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a dataset read from `source` to a writer
    fn render(&self, dataset: &Dataset, source: &Path, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create<'a>(config: &'a Config, registry: &'a SchemaRegistry) -> Box<dyn OutputFormatter + 'a> {
        match config.output_format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new().with_color(!config.no_color)),
            OutputFormat::Json => Box::new(JsonOutput::new()),
            OutputFormat::Csv => Box::new(CsvOutput::new()),
            OutputFormat::S2k => Box::new(S2kOutput::new(registry, &config.control)),
        }
    }
}

/// Resolve a user-supplied table name, given either as an identifier or as a display name
pub fn resolve_table_name(name: &str) -> Result<TableIdentifier> {
    if let Ok(identifier) = TableIdentifier::parse(name) {
        return Ok(identifier);
    }
    Ok(TableIdentifier::from_display_name(name)?)
}

/// Keep only the named table
pub fn select_table(dataset: &Dataset, name: &str) -> Result<Dataset> {
    let identifier = resolve_table_name(name)?;
    let Some(table) = dataset.table(&identifier) else {
        bail!("Table '{}' is not in the file", identifier.header_name());
    };

    let mut selected = Dataset::new();
    selected.add_table(table.clone())?;
    Ok(selected)
}
