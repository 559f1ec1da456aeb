//! Quote-aware splitting of a single CSV line into fields.

/// Scanner state: whether the current character sits inside a
/// double-quoted region of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Unquoted,
    Quoted,
}

/// Split one CSV line into its fields.
///
/// - `"` toggles the quote state; a doubled `""` inside a quoted region
///   is an escape for one literal `"`.
/// - `,` ends a field only while unquoted; inside quotes it is literal.
/// - The final accumulated field is always emitted, even when empty, so
///   a line never tokenizes to zero fields.
///
/// Unbalanced quotes are not an error: the remainder of the line is
/// consumed as quoted text.
pub(crate) fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = QuoteState::Unquoted;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match (state, ch) {
            (QuoteState::Quoted, '"') if chars.peek() == Some(&'"') => {
                // escaped quote
                current.push('"');
                chars.next();
            }
            (QuoteState::Unquoted, '"') => state = QuoteState::Quoted,
            (QuoteState::Quoted, '"') => state = QuoteState::Unquoted,
            (QuoteState::Unquoted, ',') => fields.push(std::mem::take(&mut current)),
            (_, other) => current.push(other),
        }
    }

    fields.push(current);
    fields
}
