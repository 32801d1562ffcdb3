//! Appending a constant column to the original file before it is uploaded.
//!
//! The exam time slot workflow tags every row with the current session id. Unlike preview,
//! this is an explicit caller action, so failures are returned instead of absorbed.

use std::iter;

use crate::error::{PreviewError, PreviewResult};
use crate::ingestion::SourceFormat;
use crate::ingestion::csv::{Delimiter, decode_text, usable_lines};
use crate::types::SourceFile;

/// Return a copy of `file` with `column` appended to the header and `value` to every data row.
///
/// - CSV lines are copied as they are and only get `{delimiter}{value}` appended; blank lines
///   are dropped and line endings become `\n`
/// - Workbooks are rewritten as a single `Sheet1` holding the first sheet's typed cells, with
///   short rows padded so the new value lands under `column`
/// - The file name is kept
///
/// Fails with [`PreviewError::EmptyContent`] unless there is a header and at least one data row.
pub fn append_constant_column(file: &SourceFile, column: &str, value: &str) -> PreviewResult<SourceFile> {
    let bytes = match file.format() {
        SourceFormat::Csv => append_to_csv(&file.bytes, column, value)?,
        SourceFormat::Workbook => append_to_workbook(&file.bytes, column, value)?,
    };
    Ok(SourceFile::new(file.name.clone(), bytes))
}

fn append_to_csv(bytes: &[u8], column: &str, value: &str) -> PreviewResult<Vec<u8>> {
    let text = decode_text(bytes);
    let mut lines = usable_lines(&text).map(|l| l.strip_suffix('\r').unwrap_or(l));
    let header = lines.next().ok_or(PreviewError::EmptyContent { rows: 0 })?;
    let delim = Delimiter::detect(header).as_char();

    let mut out = String::with_capacity(text.len() + column.len() + 16);
    let mut rows = 0;
    for (idx, line) in iter::once(header).chain(lines).enumerate() {
        let extra = if idx == 0 { column } else { value };
        out.push_str(line);
        out.push(delim);
        out.push_str(extra);
        out.push('\n');
        rows += 1;
    }
    if rows < 2 {
        return Err(PreviewError::EmptyContent { rows });
    }
    Ok(out.into_bytes())
}

#[cfg(feature = "excel")]
fn append_to_workbook(bytes: &[u8], column: &str, value: &str) -> PreviewResult<Vec<u8>> {
    use calamine::Data;
    use rust_xlsxwriter::Workbook;

    use crate::ingestion::excel::{first_sheet_range, trim_trailing_empty};

    let range = first_sheet_range(bytes)?;
    let rows: Vec<&[Data]> = range.rows().map(trim_trailing_empty).collect();
    if rows.len() < 2 {
        return Err(PreviewError::EmptyContent { rows: rows.len() });
    }
    let width = rows[0].len();

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Sheet1")?;

    for (r, cells) in rows.iter().enumerate() {
        let row = cell_index(r, "row")?;
        for (c, cell) in cells.iter().enumerate() {
            let col = cell_index(c, "column")?;
            match cell {
                Data::Empty => {}
                Data::Int(i) => {
                    ws.write_number(row, col, *i as f64)?;
                }
                Data::Float(f) => {
                    ws.write_number(row, col, *f)?;
                }
                Data::Bool(b) => {
                    ws.write_boolean(row, col, *b)?;
                }
                Data::DateTime(dt) => {
                    ws.write_number(row, col, dt.as_f64())?;
                }
                Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
                    ws.write_string(row, col, s.as_str())?;
                }
                Data::Error(e) => {
                    ws.write_string(row, col, e.to_string())?;
                }
            }
        }
        let extra = if r == 0 { column } else { value };
        let col = cell_index(width.max(cells.len()), "column")?;
        ws.write_string(row, col, extra)?;
    }

    Ok(wb.save_to_buffer()?)
}

#[cfg(feature = "excel")]
fn cell_index<T: TryFrom<usize>>(idx: usize, what: &str) -> PreviewResult<T> {
    T::try_from(idx).map_err(|_| PreviewError::Decode {
        format: SourceFormat::Workbook,
        message: format!("{what} index {idx} is out of range for xlsx"),
    })
}

#[cfg(not(feature = "excel"))]
fn append_to_workbook(_bytes: &[u8], _column: &str, _value: &str) -> PreviewResult<Vec<u8>> {
    Err(PreviewError::Decode {
        format: SourceFormat::Workbook,
        message: "workbook support not enabled (enable cargo feature 'excel')".to_string(),
    })
}
