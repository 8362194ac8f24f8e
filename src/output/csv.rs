//! CSV output for a single table

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::model::Dataset;

use super::OutputFormatter;

/// Writes one table as CSV; absent values become empty cells
pub struct CsvOutput {
    delimiter: u8,
}

impl CsvOutput {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for CsvOutput {
    fn render(&self, dataset: &Dataset, source: &Path, writer: &mut dyn Write) -> Result<()> {
        let table = match dataset.tables() {
            [table] => table,
            [] => bail!("{} has no tables", source.display()),
            _ => bail!(
                "{} has {} tables; CSV output needs exactly one, pick it with --table",
                source.display(),
                dataset.table_count()
            ),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        csv_writer
            .write_record(table.schema().column_names())
            .context("Failed to write CSV header")?;

        for row in table.rows() {
            let record = table
                .schema()
                .columns()
                .iter()
                .map(|c| row.get(&c.name).map(|v| v.display().into_owned()).unwrap_or_default());
            csv_writer.write_record(record).context("Failed to write CSV row")?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnSpec, Row, Table, TableIdentifier, TableSchema};

    fn dataset() -> Dataset {
        let id = TableIdentifier::parse("joint-coordinates").unwrap();
        let schema = TableSchema::new(
            id.as_str(),
            vec![ColumnSpec::text("Joint"), ColumnSpec::number("X"), ColumnSpec::yes_no("SpecialJt")],
        )
        .unwrap();
        let mut table = Table::new(id, schema);
        table.add_row(Row::new().with("Joint", "1").with("X", 2.5)).unwrap();
        table.add_row(Row::new().with("Joint", "a, b").with("SpecialJt", true)).unwrap();

        let mut dataset = Dataset::new();
        dataset.add_table(table).unwrap();
        dataset
    }

    #[test]
    fn test_csv_output() {
        let mut out = Vec::new();
        CsvOutput::new()
            .render(&dataset(), Path::new("model.s2k"), &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Joint,X,SpecialJt\n1,2.5,\n\"a, b\",,Yes\n"
        );
    }

    #[test]
    fn test_csv_needs_one_table() {
        let mut out = Vec::new();
        let err = CsvOutput::new()
            .render(&Dataset::new(), Path::new("model.s2k"), &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("has no tables"));
    }
}
