//! Terminal summary of a parsed file

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use termcolor::{Ansi, Color, ColorSpec, NoColor, WriteColor};

use crate::model::{Dataset, Table};

use super::OutputFormatter;

/// Per-table summary, optionally colored
pub struct TerminalOutput {
    color: bool,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { color: true }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn write_summary<W: WriteColor>(&self, dataset: &Dataset, source: &Path, writer: &mut W) -> Result<()> {
        writeln!(writer, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(writer, " s2kio: {}", source.display())?;
        writeln!(writer, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(writer)?;

        writer.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(writer, "OK")?;
        writer.reset()?;
        writeln!(
            writer,
            "  {} tables, {} rows",
            dataset.table_count(),
            dataset.row_count()
        )?;
        writeln!(writer)?;

        if dataset.is_empty() {
            return Ok(());
        }

        writeln!(writer, "{}", build_table(dataset))?;
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, dataset: &Dataset, source: &Path, writer: &mut dyn Write) -> Result<()> {
        if self.color {
            self.write_summary(dataset, source, &mut Ansi::new(writer))
        } else {
            self.write_summary(dataset, source, &mut NoColor::new(writer))
        }
    }
}

/// Columns of the schema that at least one row fills in
fn columns_used(table: &Table) -> usize {
    table
        .schema()
        .column_names()
        .filter(|name| table.rows().iter().any(|row| row.is_present(name)))
        .count()
}

fn build_table(dataset: &Dataset) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Table", "Identifier", "Rows", "Columns"]);

    for table in dataset.tables() {
        builder.push_record([
            table.identifier().header_name(),
            table.identifier().to_string(),
            table.row_count().to_string(),
            format!("{}/{}", columns_used(table), table.schema().column_count()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnSpec, Row, TableIdentifier, TableSchema};

    #[test]
    fn test_summary_without_color() {
        let id = TableIdentifier::parse("joint-coordinates").unwrap();
        let schema = TableSchema::new(
            id.as_str(),
            vec![ColumnSpec::text("Joint"), ColumnSpec::number("X"), ColumnSpec::number("Y")],
        )
        .unwrap();
        let mut table = Table::new(id, schema);
        table.add_row(Row::new().with("Joint", "1").with("X", 0.0)).unwrap();
        table.add_row(Row::new().with("Joint", "2")).unwrap();
        assert_eq!(columns_used(&table), 2);

        let mut dataset = Dataset::new();
        dataset.add_table(table).unwrap();

        let mut out = Vec::new();
        TerminalOutput::new()
            .with_color(false)
            .render(&dataset, Path::new("model.s2k"), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("OK  1 tables, 2 rows"));
        assert!(text.contains("JOINT COORDINATES"));
        assert!(text.contains("2/3"));
        assert!(!text.contains('\u{1b}'));
    }
}
