//! CSV path: delimiter inference, quote-aware line tokenizing, and text → [`RawGrid`].
//!
//! Parsing is line-based: the text is split on `\n` and blank lines are dropped before any
//! tokenizing happens, so a quoted field cannot span lines.

use crate::error::{PreviewError, PreviewResult};
use crate::types::RawGrid;

/// Field delimiter of a CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Semicolon,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
        }
    }

    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }

    /// Pick the delimiter from the first non-empty line: any `;` means semicolon.
    ///
    /// One delimiter is used for the whole file. A comma file whose first line contains a
    /// literal `;` is misread as semicolon-delimited.
    pub fn detect(first_line: &str) -> Self {
        if first_line.contains(';') {
            Self::Semicolon
        } else {
            Self::Comma
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InQuotes,
}

/// Split one line into trimmed fields.
///
/// `"` opens and closes quoting, `""` inside quotes is a literal quote, and the delimiter only
/// separates fields outside quotes. Each field is then trimmed, and if it still starts and ends
/// with `"` those two characters are removed as well.
pub fn tokenize_line(line: &str, delimiter: Delimiter) -> Vec<String> {
    let delim = delimiter.as_char();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = ScanState::Normal;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (state, c) {
            (ScanState::Normal, '"') => state = ScanState::InQuotes,
            (ScanState::InQuotes, '"') => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    state = ScanState::Normal;
                }
            }
            (ScanState::Normal, c) if c == delim => fields.push(finish_field(&mut current)),
            (_, c) => current.push(c),
        }
    }
    fields.push(finish_field(&mut current));
    fields
}

fn finish_field(current: &mut String) -> String {
    let raw = std::mem::take(current);
    let trimmed = raw.trim();
    let unwrapped = if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };
    unwrapped.to_owned()
}

/// Non-blank lines of `text`, in order.
pub fn usable_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|l| !l.trim().is_empty())
}

/// Decode CSV bytes as UTF-8 text (invalid sequences replaced, leading BOM dropped).
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let text: &str = &text;
    text.strip_prefix('\u{feff}').unwrap_or(text).to_owned()
}

/// Tokenize CSV text into a grid, returning the delimiter that was detected.
///
/// `max_rows` bounds how many usable lines (header included) are tokenized.
///
/// Returns [`PreviewError::EmptyContent`] if the text has no usable line.
pub fn grid_from_text(text: &str, max_rows: Option<usize>) -> PreviewResult<(RawGrid, Delimiter)> {
    let first = usable_lines(text)
        .next()
        .ok_or(PreviewError::EmptyContent { rows: 0 })?;
    let delimiter = Delimiter::detect(first);

    let lines = usable_lines(text).take(max_rows.unwrap_or(usize::MAX));
    let rows = lines.map(|l| tokenize_line(l, delimiter)).collect();
    Ok((RawGrid::new(rows), delimiter))
}

/// Decode and tokenize CSV bytes into a grid.
pub fn grid_from_bytes(bytes: &[u8], max_rows: Option<usize>) -> PreviewResult<RawGrid> {
    let text = decode_text(bytes);
    grid_from_text(&text, max_rows).map(|(grid, _)| grid)
}
