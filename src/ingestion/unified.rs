//! Unified preview entrypoint.
//!
//! Most callers should use [`parse_preview`], a pure function from a [`SourceFile`] to a bounded
//! [`ParseResult`]:
//!
//! - If [`PreviewOptions::format`] is `None`, the format is chosen from the file name suffix.
//! - Any failure (unreadable bytes, corrupt container, blank file) yields
//!   `{ rows: [], errors: [] }` and is reported to the configured
//!   [`super::observability::PreviewObserver`] instead of being returned.
//!
//! [`try_parse_preview`] runs the same pipeline but returns the failure.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{PreviewError, PreviewResult};
use crate::processing::{DEFAULT_PREVIEW_LIMIT, limit_rows, normalize_rows, preview_window};
use crate::types::{ParseResult, RawGrid, SourceFile};

use super::csv;
use super::observability::{PreviewContext, PreviewObserver, PreviewSeverity, PreviewStats, StdErrObserver};

/// Spreadsheet name suffixes routed to the workbook path.
pub const WORKBOOK_SUFFIXES: &[&str] = &[".xlsx", ".xls"];

/// Decoding path for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Delimited text.
    Csv,
    /// Binary spreadsheet workbook.
    Workbook,
}

impl SourceFormat {
    /// Route a file by name: [`WORKBOOK_SUFFIXES`] (case-insensitive) go to the workbook path,
    /// everything else is read as CSV. Content is not sniffed.
    pub fn detect(file_name: &str) -> Self {
        let lower = file_name.to_ascii_lowercase();
        if WORKBOOK_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            Self::Workbook
        } else {
            Self::Csv
        }
    }
}

/// Options controlling preview behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct PreviewOptions {
    /// If `None`, detect format from the file name.
    pub format: Option<SourceFormat>,
    /// Maximum number of data rows in the preview.
    pub preview_limit: usize,
    /// Where absorbed failures are logged. Defaults to [`StdErrObserver`].
    pub observer: Option<Arc<dyn PreviewObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: PreviewSeverity,
}

impl fmt::Debug for PreviewOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewOptions")
            .field("format", &self.format)
            .field("preview_limit", &self.preview_limit)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            format: None,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            observer: Some(Arc::new(StdErrObserver)),
            alert_at_or_above: PreviewSeverity::Critical,
        }
    }
}

/// Build the preview for `file`, absorbing every failure.
///
/// An empty result is ambiguous by construction: the file may have been blank, or it may have
/// failed to decode. Only the observer can tell them apart.
///
/// # Examples
///
/// ```rust
/// use tabular_preview::ingestion::{parse_preview, PreviewOptions};
/// use tabular_preview::types::SourceFile;
///
/// let file = SourceFile::new("wishes.csv", "code_smartex_ens;jour;seance\n57;6;S3\n");
/// let preview = parse_preview(&file, &PreviewOptions::default());
///
/// assert_eq!(preview.rows.len(), 1);
/// assert_eq!(preview.rows[0].get("seance"), Some("S3"));
/// assert!(preview.errors.is_empty());
/// ```
///
/// ```rust
/// use tabular_preview::ingestion::{parse_preview, PreviewOptions};
/// use tabular_preview::types::{ParseResult, SourceFile};
///
/// // Not a workbook: the failure is logged, not returned.
/// let file = SourceFile::new("teachers.xlsx", b"definitely not a zip".to_vec());
/// assert_eq!(parse_preview(&file, &PreviewOptions::default()), ParseResult::empty());
/// ```
pub fn parse_preview(file: &SourceFile, options: &PreviewOptions) -> ParseResult {
    let ctx = PreviewContext {
        source: PathBuf::from(&file.name),
        format: options.format.unwrap_or_else(|| file.format()),
    };
    let result = try_parse_preview(file, options);
    contain(&ctx, options, result)
}

/// Read `path` and build its preview, absorbing every failure (including the read itself).
pub fn preview_from_path(path: impl AsRef<Path>, options: &PreviewOptions) -> ParseResult {
    let path = path.as_ref();
    let name = path.to_string_lossy();
    let ctx = PreviewContext {
        source: path.to_path_buf(),
        format: options.format.unwrap_or_else(|| SourceFormat::detect(&name)),
    };
    let result = SourceFile::from_path(path).and_then(|file| try_parse_preview(&file, options));
    contain(&ctx, options, result)
}

/// Build the preview for `file`, returning failures instead of absorbing them.
///
/// Fewer than a header row plus one data row is [`PreviewError::EmptyContent`].
pub fn try_parse_preview(file: &SourceFile, options: &PreviewOptions) -> PreviewResult<ParseResult> {
    let format = options.format.unwrap_or_else(|| file.format());
    let grid = decode_grid(format, &file.bytes, Some(options.preview_limit.saturating_add(1)))?;

    let header = match grid.header() {
        Some(header) if grid.row_count() >= 2 => header,
        _ => {
            return Err(PreviewError::EmptyContent {
                rows: grid.row_count(),
            });
        }
    };
    let rows = normalize_rows(&header, preview_window(&grid, options.preview_limit));
    Ok(ParseResult::from_rows(limit_rows(rows, options.preview_limit)))
}

/// Decode bytes into a grid using the given format's reader.
///
/// `max_rows` counts the header row.
pub fn decode_grid(format: SourceFormat, bytes: &[u8], max_rows: Option<usize>) -> PreviewResult<RawGrid> {
    match format {
        SourceFormat::Csv => csv::grid_from_bytes(bytes, max_rows),
        SourceFormat::Workbook => decode_workbook(bytes, max_rows),
    }
}

fn decode_workbook(bytes: &[u8], max_rows: Option<usize>) -> PreviewResult<RawGrid> {
    #[cfg(feature = "excel")]
    {
        super::excel::grid_from_bytes(bytes, max_rows)
    }

    #[cfg(not(feature = "excel"))]
    {
        let _ = (bytes, max_rows);
        Err(PreviewError::Decode {
            format: SourceFormat::Workbook,
            message: "workbook support not enabled (enable cargo feature 'excel')".to_string(),
        })
    }
}

fn contain(ctx: &PreviewContext, options: &PreviewOptions, result: PreviewResult<ParseResult>) -> ParseResult {
    match result {
        Ok(preview) => {
            if let Some(obs) = options.observer.as_ref() {
                let columns = preview.rows.first().map(|r| r.len()).unwrap_or(0);
                obs.on_success(
                    ctx,
                    PreviewStats {
                        rows: preview.row_count(),
                        columns,
                    },
                );
            }
            preview
        }
        Err(e) => {
            if let Some(obs) = options.observer.as_ref() {
                let sev = PreviewSeverity::for_error(&e);
                obs.on_failure(ctx, sev, &e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(ctx, sev, &e);
                }
            }
            ParseResult::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SourceFormat;

    #[test]
    fn format_detection_by_suffix() {
        assert_eq!(SourceFormat::detect("teachers.xlsx"), SourceFormat::Workbook);
        assert_eq!(SourceFormat::detect("OLD.XLS"), SourceFormat::Workbook);
        assert_eq!(SourceFormat::detect("slots.csv"), SourceFormat::Csv);
        assert_eq!(SourceFormat::detect("no_extension"), SourceFormat::Csv);
        assert_eq!(SourceFormat::detect("report.xlsx.txt"), SourceFormat::Csv);
    }
}
