#![cfg(feature = "excel")]

//! Workbook path: first-sheet decoding into a [`RawGrid`].

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};

use crate::error::{PreviewError, PreviewResult};
use crate::ingestion::SourceFormat;
use crate::types::RawGrid;

/// Decode workbook bytes (`.xlsx`, `.xls`, `.ods`, ...) and return the first declared sheet.
///
/// The container type is sniffed from the bytes, not the file name.
pub fn first_sheet_range(bytes: &[u8]) -> PreviewResult<Range<Data>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| PreviewError::Decode {
            format: SourceFormat::Workbook,
            message: "workbook has no sheets".to_string(),
        })?;

    Ok(workbook.worksheet_range(&first)?)
}

/// Decode the first sheet into a grid of trimmed strings.
///
/// - Empty cells become `""`; each row ends at its last present cell
/// - Blank rows inside the sheet are kept as empty rows
/// - `max_rows` bounds how many rows (header included) are kept
pub fn grid_from_bytes(bytes: &[u8], max_rows: Option<usize>) -> PreviewResult<RawGrid> {
    let range = first_sheet_range(bytes)?;
    Ok(grid_from_range(&range, max_rows))
}

pub(crate) fn grid_from_range(range: &Range<Data>, max_rows: Option<usize>) -> RawGrid {
    let rows = range
        .rows()
        .take(max_rows.unwrap_or(usize::MAX))
        .map(|row| {
            trim_trailing_empty(row)
                .iter()
                .map(|c| cell_to_string(c).trim().to_owned())
                .collect()
        })
        .collect();
    RawGrid::new(rows)
}

/// `Range::rows` pads every row to the sheet width; cut each back to its last present cell.
pub(crate) fn trim_trailing_empty(row: &[Data]) -> &[Data] {
    let end = row
        .iter()
        .rposition(|c| !matches!(c, Data::Empty))
        .map_or(0, |idx| idx + 1);
    &row[..end]
}

/// String form of a cell. Integral floats print without a fractional part.
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
        Data::Empty => String::new(),
    }
}
