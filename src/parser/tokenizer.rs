//! Splits a logical record into `Name=Value` fields

use super::reassemble::LogicalRecord;
use crate::error::{CodecError, Result};
use crate::model::TableIdentifier;

/// One field of a record, borrowed from the record text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub name: &'a str,
    /// Value with surrounding quotes removed
    pub value: &'a str,
    /// Whether the value was written in double quotes. Informational only:
    /// values are coerced by column type, so `X="5"` and `X=5` read the same.
    pub quoted: bool,
}

/// Tokenize one record.
///
/// Fields are separated by whitespace. A value is either a double-quoted
/// string, which may contain anything but `"`, or a bare run of non-whitespace
/// characters. Field names must be unique within a record.
pub fn tokenize<'a>(table: &TableIdentifier, record: &'a LogicalRecord) -> Result<Vec<Token<'a>>> {
    let text = record.text.as_str();
    let bytes = text.as_bytes();
    let malformed = |reason: &'static str, fragment: &str| CodecError::MalformedRecord {
        table: table.to_string(),
        line: record.line,
        reason,
        fragment: super::fragment(fragment),
    };

    let mut tokens: Vec<Token<'a>> = Vec::new();
    let mut pos = 0;

    loop {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos == bytes.len() {
            break;
        }

        let start = pos;
        while pos < bytes.len() && bytes[pos] != b'=' && !bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos == bytes.len() || bytes[pos] != b'=' {
            return Err(malformed("missing `=`", &text[start..pos]));
        }
        if pos == start {
            return Err(malformed("missing field name", &text[start..]));
        }
        let name = &text[start..pos];
        pos += 1;

        let (value, quoted) = if bytes.get(pos) == Some(&b'"') {
            let open = pos + 1;
            let Some(len) = text[open..].find('"') else {
                return Err(malformed("unterminated quote", &text[start..]));
            };
            pos = open + len + 1;
            if pos < bytes.len() && !bytes[pos].is_ascii_whitespace() {
                return Err(malformed("unexpected text after closing quote", &text[start..]));
            }
            (&text[open..open + len], true)
        } else {
            let open = pos;
            while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            (&text[open..pos], false)
        };

        if tokens.iter().any(|t| t.name == name) {
            return Err(malformed("field repeated", &text[start..pos]));
        }
        tokens.push(Token { name, value, quoted });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Result<Vec<(String, String, bool)>> {
        let table = TableIdentifier::parse("joint-coordinates").unwrap();
        let record = LogicalRecord {
            line: 7,
            text: text.to_string(),
        };
        tokenize(&table, &record).map(|tokens| {
            tokens
                .into_iter()
                .map(|t| (t.name.to_string(), t.value.to_string(), t.quoted))
                .collect()
        })
    }

    fn tok(name: &str, value: &str, quoted: bool) -> (String, String, bool) {
        (name.to_string(), value.to_string(), quoted)
    }

    #[test]
    fn test_quoted_and_bare_values() {
        let tokens = run(r#"   Joint="1"   CoordSys=GLOBAL   XorR=-1.5E-03   Notes="two words""#).unwrap();
        assert_eq!(
            tokens,
            vec![
                tok("Joint", "1", true),
                tok("CoordSys", "GLOBAL", false),
                tok("XorR", "-1.5E-03", false),
                tok("Notes", "two words", true),
            ]
        );
    }

    #[test]
    fn test_quoted_value_may_hold_equals_and_underscores() {
        let tokens = run(r#"Notes="a=b_c"   Z=1"#).unwrap();
        assert_eq!(tokens[0], tok("Notes", "a=b_c", true));
        assert_eq!(tokens[1], tok("Z", "1", false));
    }

    #[test]
    fn test_empty_values() {
        let tokens = run(r#"GUID=""   Notes="#).unwrap();
        assert_eq!(tokens, vec![tok("GUID", "", true), tok("Notes", "", false)]);
    }

    #[test]
    fn test_blank_record_has_no_tokens() {
        assert!(run("    ").unwrap().is_empty());
    }

    #[test]
    fn test_missing_equals() {
        let err = run(r#"Joint="1"   XorR 5"#).unwrap_err();
        assert!(matches!(
            err,
            CodecError::MalformedRecord { line: 7, reason: "missing `=`", ref fragment, .. } if fragment == "XorR"
        ));
    }

    #[test]
    fn test_unterminated_quote() {
        let err = run(r#"Joint="1   XorR=5"#).unwrap_err();
        assert!(matches!(err, CodecError::MalformedRecord { reason: "unterminated quote", .. }));
    }

    #[test]
    fn test_text_after_closing_quote() {
        let err = run(r#"Joint="1"X=5"#).unwrap_err();
        assert!(matches!(err, CodecError::MalformedRecord { .. }));
    }

    #[test]
    fn test_missing_name_and_repeated_field() {
        assert!(matches!(
            run("=5").unwrap_err(),
            CodecError::MalformedRecord { reason: "missing field name", .. }
        ));
        assert!(matches!(
            run("X=1 X=2").unwrap_err(),
            CodecError::MalformedRecord { reason: "field repeated", .. }
        ));
    }
}
