//! Table identifiers and the display-name codec
//!
//! Files name tables in upper case with spaces, dashes and slashes, for example
//! `ELEMENT FORCES - FRAMES`. Internally every table is keyed by a normalized,
//! lower-case identifier such as `element-forces-_-frames`:
//!
//! * runs of whitespace become the word separator `-`
//! * a literal `-` becomes `_`
//! * a literal `/` becomes `.`
//!
//! The mapping is reversible, so an identifier can always be turned back into
//! the header text the host application expects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

const WORD_SEPARATOR: char = '-';
const DASH_TOKEN: char = '_';
const SLASH_TOKEN: char = '.';

/// Normalized key of a table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableIdentifier(String);

impl TableIdentifier {
    /// Normalize a human-readable table name into an identifier
    pub fn from_display_name(name: &str) -> Result<Self> {
        let unrecognized = || CodecError::UnrecognizedTableName {
            name: name.to_string(),
            line: None,
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(unrecognized());
        }

        let mut id = String::with_capacity(trimmed.len());
        let mut in_whitespace = false;
        for c in trimmed.chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    id.push(WORD_SEPARATOR);
                }
                in_whitespace = true;
                continue;
            }
            in_whitespace = false;

            match c {
                '-' => id.push(DASH_TOKEN),
                '/' => id.push(SLASH_TOKEN),
                c if c.is_ascii_alphanumeric() => id.push(c.to_ascii_lowercase()),
                _ => return Err(unrecognized()),
            }
        }

        Ok(Self(id))
    }

    /// Accept an already-normalized identifier, checking that it is well formed
    pub fn parse(id: &str) -> Result<Self> {
        let well_formed = !id.is_empty()
            && !id.starts_with(WORD_SEPARATOR)
            && !id.ends_with(WORD_SEPARATOR)
            && !id.contains("--")
            && id.chars().all(|c| {
                c.is_ascii_lowercase()
                    || c.is_ascii_digit()
                    || matches!(c, WORD_SEPARATOR | DASH_TOKEN | SLASH_TOKEN)
            });

        if well_formed {
            Ok(Self(id.to_string()))
        } else {
            Err(CodecError::UnrecognizedTableName {
                name: id.to_string(),
                line: None,
            })
        }
    }

    /// Identifier of the control table every file starts with
    pub fn program_control() -> Self {
        Self("program-control".to_string())
    }

    /// Title-cased display name, e.g. `Element Forces - Frames`
    pub fn display_name(&self) -> String {
        self.words()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Name as written in a `TABLE:` header line
    pub fn header_name(&self) -> String {
        self.display_name().to_ascii_uppercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.0.split(WORD_SEPARATOR).map(|word| {
            word.chars()
                .map(|c| match c {
                    DASH_TOKEN => '-',
                    SLASH_TOKEN => '/',
                    c => c,
                })
                .collect()
        })
    }
}

impl fmt::Display for TableIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TableIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TableIdentifier {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TableIdentifier> for String {
    fn from(id: TableIdentifier) -> Self {
        id.0
    }
}
