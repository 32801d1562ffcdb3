//! Header + data rows → schema-free [`Row`]s.

use crate::types::{Header, Row};

/// Pair header names positionally with one row's cells.
///
/// Missing trailing cells become `""`, extra trailing cells are dropped, and a duplicated header
/// name keeps the value of its last occurrence. No expected column set is enforced.
pub fn normalize_row<S: AsRef<str>>(header: &Header, cells: &[S]) -> Row {
    let mut row = Row::new();
    for (idx, name) in header.names.iter().enumerate() {
        let value = cells.get(idx).map(|c| c.as_ref().trim()).unwrap_or("");
        row.insert(name.as_str(), value);
    }
    row
}

/// Normalize every row in `rows` against `header`.
pub fn normalize_rows<S: AsRef<str>>(header: &Header, rows: &[Vec<S>]) -> Vec<Row> {
    rows.iter().map(|cells| normalize_row(header, cells)).collect()
}
