//! CSV tokenizer
//!
//! Converts raw CSV text into an ordered sequence of header-keyed records.
//! Single left-to-right scan with one character of lookahead: double quotes
//! toggle quoted-field state (`""` inside quotes emits a literal quote),
//! commas split fields outside quotes, CR/LF/CRLF terminate rows outside
//! quotes, and rows that are blank after trimming are dropped.
//!
//! Parsing never fails. Malformed input degrades: an unterminated quote
//! absorbs the rest of the text into its field, missing trailing cells
//! default to the empty string, and empty input yields no records.

use std::collections::HashMap;

use tracing::debug;

/// One parsed CSV data row, keyed by the trimmed header cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    values: HashMap<String, String>,
}

impl RawRecord {
    /// Value for a column, or `""` when the column is unknown.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// Number of columns carried by this record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let values = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { values }
    }
}

/// Split CSV text into rows of fields without applying the header.
///
/// All-blank rows are dropped, never emitted as rows of empty strings.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // escaped quote inside a quoted field
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut field));
            }
            '\r' | '\n' if !in_quotes => {
                // CRLF is a single row terminator
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                if row.iter().any(|value| !value.trim().is_empty()) {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            other => field.push(other),
        }
    }

    // final row for input without a trailing newline
    row.push(field);
    if row.iter().any(|value| !value.trim().is_empty()) {
        rows.push(row);
    }

    rows
}

/// Parse CSV text into records keyed by the header row.
///
/// The first committed row is the header; each header cell is trimmed and
/// used as a key. Data rows are zipped against the header, missing trailing
/// positions default to `""`, and every value is trimmed.
pub fn parse(text: &str) -> Vec<RawRecord> {
    let mut rows = parse_rows(text).into_iter();

    let header: Vec<String> = match rows.next() {
        Some(cells) => cells.iter().map(|cell| cell.trim().to_string()).collect(),
        None => return Vec::new(),
    };

    let records: Vec<RawRecord> = rows
        .map(|cells| {
            let values = header
                .iter()
                .enumerate()
                .map(|(idx, key)| {
                    let value = cells.get(idx).map(|v| v.trim()).unwrap_or("");
                    (key.clone(), value.to_string())
                })
                .collect();
            RawRecord { values }
        })
        .collect();

    debug!(columns = header.len(), records = records.len(), "parsed csv");
    records
}
