//! The CSV-to-transaction pipeline: line splitting, header resolution,
//! tokenization, per-row validation.

mod tokenizer;

use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::errors::{CsvParseError, CsvResult};
use crate::types::{Transaction, TransactionKind};
use tokenizer::split_fields;

const REQUIRED_COLUMNS: [&str; 5] = ["date", "title", "amount", "type", "category"];

/// Zero-based positions of the required columns in the header line.
/// Extra columns in the input are permitted and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderMap {
    date: usize,
    title: usize,
    amount: usize,
    kind: usize,
    category: usize,
}

impl HeaderMap {
    /// Resolve all five required columns from the header line, by exact
    /// match on the trimmed names. The header is split on plain commas;
    /// quoting is not honored here.
    fn resolve(header: &str) -> CsvResult<Self> {
        let names: Vec<&str> = header.split(',').map(str::trim).collect();
        let position = |name: &str| names.iter().position(|n| *n == name);

        match (
            position("date"),
            position("title"),
            position("amount"),
            position("type"),
            position("category"),
        ) {
            (Some(date), Some(title), Some(amount), Some(kind), Some(category)) => Ok(Self {
                date,
                title,
                amount,
                kind,
                category,
            }),
            (date, title, amount, kind, category) => {
                let missing = REQUIRED_COLUMNS
                    .iter()
                    .zip([date, title, amount, kind, category])
                    .filter(|(_, index)| index.is_none())
                    .map(|(name, _)| (*name).to_string())
                    .collect();
                Err(CsvParseError::MissingColumns(missing))
            }
        }
    }

    /// Highest resolved index; a data line must have more fields than this
    /// to be usable.
    fn max_index(&self) -> usize {
        [self.date, self.title, self.amount, self.kind, self.category]
            .into_iter()
            .max()
            .unwrap_or(0)
    }
}

/// Parse the leading decimal prefix of a field: optional sign, digits,
/// one `.`, optional exponent. Trailing garbage is tolerated, so
/// `"12.5abc"` yields 12.5. Returns `None` when no digits are found or
/// the value is not finite.
fn parse_amount(field: &str) -> Option<f64> {
    let s = field.trim();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            end = frac_end;
            has_digits = has_digits || frac_end > frac_start;
        }
    }
    if !has_digits {
        return None;
    }

    // exponent is only taken when complete, otherwise it is trailing garbage
    if matches!(bytes.get(end), Some(&b'e') | Some(&b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(&b'+') | Some(&b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse CSV text into transactions, reporting each skipped row through
/// the given diagnostics sink.
///
/// The first line names the columns; `date`, `title`, `amount`, `type`
/// and `category` must all be present (in any order) or the parse fails
/// wholesale. Data lines that are blank are skipped silently; lines with
/// too few fields, an unparsable amount or an unknown type are skipped
/// with a warning. Accepted rows come back in source order.
pub fn parse_with<D: Diagnostics>(
    csv_text: &str,
    diagnostics: &mut D,
) -> CsvResult<Vec<Transaction>> {
    let mut lines = csv_text.trim().split('\n');
    let header = lines.next().unwrap_or_default();
    let columns = HeaderMap::resolve(header)?;
    let max_index = columns.max_index();

    let mut transactions = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_fields(line);
        if fields.len() <= max_index {
            diagnostics.warn(&format!("Skipping malformed line: {line}"));
            continue;
        }

        let amount = parse_amount(&fields[columns.amount]);
        let kind = fields[columns.kind].trim().parse::<TransactionKind>();
        let (Some(amount), Ok(kind)) = (amount, kind) else {
            diagnostics.warn(&format!("Skipping invalid transaction: {line}"));
            continue;
        };

        transactions.push(Transaction {
            date: fields[columns.date].trim().to_string(),
            title: fields[columns.title].trim().to_string(),
            amount,
            kind,
            category: fields[columns.category].trim().to_string(),
        });
    }

    Ok(transactions)
}

/// Parse CSV text into transactions, sending row warnings to the `log`
/// facade.
pub fn parse(csv_text: &str) -> CsvResult<Vec<Transaction>> {
    parse_with(csv_text, &mut LogDiagnostics)
}
