//! JSON output format

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::model::{ColumnSpec, Dataset, Row};

use super::OutputFormatter;

/// JSON output formatter
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonDataset<'a> {
    source: String,
    tables: Vec<JsonTable<'a>>,
}

/// Absent values are left out of each row object
#[derive(Serialize)]
struct JsonTable<'a> {
    name: String,
    identifier: &'a str,
    columns: &'a [ColumnSpec],
    rows: &'a [Row],
}

impl OutputFormatter for JsonOutput {
    fn render(&self, dataset: &Dataset, source: &Path, writer: &mut dyn Write) -> Result<()> {
        let output = JsonDataset {
            source: source.display().to_string(),
            tables: dataset
                .tables()
                .iter()
                .map(|t| JsonTable {
                    name: t.identifier().header_name(),
                    identifier: t.identifier().as_str(),
                    columns: t.schema().columns(),
                    rows: t.rows(),
                })
                .collect(),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
