//! Reader for S2K table text
//!
//! The pipeline runs per table, in file order:
//! locate spans -> join continuation lines -> tokenize -> build typed rows.
//! The first error aborts the whole parse; there is no partial dataset.

pub mod locator;
pub mod reassemble;
pub mod row_builder;
pub mod tokenizer;

use crate::error::Result;
use crate::model::{Dataset, Table};
use crate::registry::SchemaRegistry;

pub use self::locator::{locate, TableSpan};
pub use self::reassemble::{reassemble, LogicalRecord};
pub use self::row_builder::build_row;
pub use self::tokenizer::{tokenize, Token};

const LOG_TARGET: &str = "s2kio::parser";
const FRAGMENT_LIMIT: usize = 48;

/// Parse already-split lines into a dataset
pub fn parse<S: AsRef<str>>(lines: &[S], registry: &SchemaRegistry) -> Result<Dataset> {
    let spans = locate(lines)?;
    log::debug!(target: LOG_TARGET, "Found {} tables in {} lines", spans.len(), lines.len());

    let mut dataset = Dataset::new();
    for span in spans {
        let table = read_table(lines, &span, registry)?;
        log::trace!(
            target: LOG_TARGET,
            "Read {} rows of '{}' (lines {}-{})",
            table.row_count(),
            span.identifier,
            span.header_line(),
            span.last_line()
        );
        dataset
            .add_table(table)
            .map_err(|e| e.at(span.header_line()))?;
    }

    Ok(dataset)
}

/// Parse a whole document; line terminators may be `\n` or `\r\n`
pub fn parse_str(text: &str, registry: &SchemaRegistry) -> Result<Dataset> {
    let lines: Vec<&str> = text.lines().collect();
    parse(&lines, registry)
}

fn read_table<S: AsRef<str>>(lines: &[S], span: &TableSpan, registry: &SchemaRegistry) -> Result<Table> {
    let schema = registry
        .resolve(&span.identifier)
        .map_err(|e| e.at(span.header_line()))?;

    let mut table = Table::new(span.identifier.clone(), schema.clone().into_owned());
    let records = reassemble(&span.identifier, &lines[span.data.clone()], span.first_line())?;
    for record in &records {
        let tokens = tokenize(&span.identifier, record)?;
        if tokens.is_empty() {
            continue;
        }
        let row = build_row(&span.identifier, &schema, record.line, &tokens)?;
        table.push_checked_row(row);
    }

    Ok(table)
}

/// Shorten offending text for error messages
pub(crate) fn fragment(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= FRAGMENT_LIMIT {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(FRAGMENT_LIMIT).collect();
        short.push_str("...");
        short
    }
}
