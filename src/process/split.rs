// src/process/split.rs
use std::borrow::Cow;
use std::mem::take;

use tracing::{instrument, trace};

/// One parsed line of the export: ordered cells, no schema attached.
pub type RawRow = Vec<String>;

/// Fold `\r\n` and lone `\r` into `\n` so the scanner only sees one terminator.
fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Close the current field: trimmed, moved into the row without cloning.
fn end_field(row: &mut RawRow, field: &mut String) {
    let value = take(field);
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        row.push(value);
    } else {
        row.push(trimmed.to_string());
    }
}

/// Rows where every cell is empty (blank lines, stray `,,,`) are not emitted.
fn end_row(rows: &mut Vec<RawRow>, row: &mut RawRow) {
    if row.iter().any(|c| !c.is_empty()) {
        rows.push(take(row));
    } else {
        row.clear();
    }
}

/// Split comma-separated text into rows of trimmed cells.
///
/// A leading byte-order mark is dropped. Quoted cells may contain commas, line feeds and `""` escapes. The scan never
/// fails: an unterminated quote swallows the rest of the input into one cell.
#[instrument(level = "debug", skip(text), fields(text_len = text.len()))]
pub fn parse(text: &str) -> Vec<RawRow> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let text = normalize_line_endings(text);

    let mut rows = Vec::new();
    let mut row: RawRow = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if matches!(chars.peek(), Some('"')) => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                c => field.push(c),
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => end_field(&mut row, &mut field),
            '\n' => {
                end_field(&mut row, &mut field);
                end_row(&mut rows, &mut row);
            }
            c => field.push(c),
        }
    }

    // flush whatever is left, quoted or not
    if !field.is_empty() || !row.is_empty() {
        end_field(&mut row, &mut field);
        end_row(&mut rows, &mut row);
    }

    if in_quotes {
        trace!("input ended inside a quoted cell");
    }
    trace!(rows = rows.len(), "split finished");
    rows
}
