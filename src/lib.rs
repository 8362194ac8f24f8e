//! s2kio - Reader and writer for S2K table text
//!
//! S2K files carry a structural model as a series of tables. Each table starts
//! with a `TABLE:  "NAME"` header, holds one `Name=Value` record per line, and
//! ends with a blank line; the file ends with `END TABLE DATA`. Every table must
//! have a schema in a [`SchemaRegistry`] before it can be read or written.

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod registry;
pub mod writer;

pub use config::Config;
pub use error::{CodecError, Result};
pub use model::{CellValue, ColumnSpec, ColumnType, Dataset, Row, Table, TableIdentifier, TableSchema};
pub use parser::{parse, parse_str};
pub use registry::SchemaRegistry;
pub use writer::{serialize, serialize_to_string, ProgramControlInfo};
