//! Data model for S2K tables

mod identifier;
mod schema;
mod table;

pub use identifier::TableIdentifier;
pub use schema::{ColumnSpec, ColumnType, TableSchema};
pub use table::{CellValue, Dataset, Row, Table};
