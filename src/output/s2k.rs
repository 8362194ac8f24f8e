//! S2K text output, the inverse of the reader

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Dataset;
use crate::registry::SchemaRegistry;
use crate::writer::{serialize, ProgramControlInfo};

use super::OutputFormatter;

/// Writes the dataset back as S2K text
pub struct S2kOutput<'a> {
    registry: &'a SchemaRegistry,
    control: &'a ProgramControlInfo,
}

impl<'a> S2kOutput<'a> {
    pub fn new(registry: &'a SchemaRegistry, control: &'a ProgramControlInfo) -> Self {
        Self { registry, control }
    }
}

impl OutputFormatter for S2kOutput<'_> {
    fn render(&self, dataset: &Dataset, source: &Path, writer: &mut dyn Write) -> Result<()> {
        let lines = serialize(dataset, self.registry, self.control)
            .with_context(|| format!("Failed to write tables read from {}", source.display()))?;
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}
