//! Finance ledger CSV interchange.
//!
//! Export writes `type,name,category,amount,frequency,date,note` followed by
//! one row per entry. Import is deliberately forgiving: unknown types become
//! expenses, unparsable amounts become zero and short rows are padded.

use crate::error::{IoError, Result};
use chrono::Utc;
use garden_data::{EntryKind, FinanceEntry};
use std::borrow::Cow;
use std::path::Path;

pub const CSV_HEADER: [&str; 7] = [
    "type",
    "name",
    "category",
    "amount",
    "frequency",
    "date",
    "note",
];

/// Quotes a field when it holds a comma, quote or newline.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Splits one line into fields, honouring double-quoted sections and `""`
/// escapes. A quoted section may start anywhere in a field.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
    }
    fields.push(current);
    fields
}

/// Reads the longest numeric prefix of `s`, e.g. `"12.5 usd"` is 12.5.
/// Anything without a finite leading number is 0.
fn parse_amount(s: &str) -> f64 {
    let s = s.trim();
    s[..numeric_prefix_len(s)]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Byte length of the leading `[+-]digits[.digits][e[+-]digits]` run.
/// An exponent without digits is not part of the number.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

pub fn export_entries(entries: &[FinanceEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for entry in entries {
        let amount = entry.amount.to_string();
        let row = [
            entry.kind.as_str(),
            entry.name.as_str(),
            entry.category.as_str(),
            amount.as_str(),
            entry.frequency.as_str(),
            entry.date.as_deref().unwrap_or(""),
            entry.note.as_str(),
        ];
        lines.push(
            row.iter()
                .map(|f| escape_field(f))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Parses exported CSV back into entries. The first non-empty line is the
/// header and is skipped without inspection.
pub fn import_entries(text: &str) -> Result<Vec<FinanceEntry>> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(IoError::validation("CSV empty"));
    }

    let now = Utc::now();
    let entries = lines[1..]
        .iter()
        .map(|line| {
            let row = parse_line(line);
            let field = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
            let date = field(5);
            FinanceEntry {
                kind: EntryKind::parse_lenient(field(0)),
                name: field(1).to_string(),
                category: field(2).to_string(),
                amount: parse_amount(field(3)),
                frequency: field(4).to_string(),
                date: (!date.is_empty()).then(|| date.to_string()),
                note: field(6).to_string(),
                created_at: now,
            }
        })
        .collect();
    Ok(entries)
}

pub fn write_csv_file(entries: &[FinanceEntry], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, export_entries(entries))
        .map_err(|e| IoError::FileSystem(e).with_context(format!("writing CSV to {:?}", path)))
}

pub fn read_csv_file(path: impl AsRef<Path>) -> Result<Vec<FinanceEntry>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("reading CSV from {:?}", path)))?;
    import_entries(&text)
}
