use thiserror::Error;

use crate::ingestion::SourceFormat;

/// Convenience result type for preview and annotation operations.
pub type PreviewResult<T> = Result<T, PreviewError>;

/// Error type shared by the CSV and workbook paths.
///
/// [`crate::ingestion::parse_preview`] never returns these: it absorbs them into an empty
/// [`crate::types::ParseResult`] and reports them to the configured observer. They surface through
/// [`crate::ingestion::try_parse_preview`], annotation, and session confirmation.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The raw bytes could not be read (missing file, permission denied, ...).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes do not decode as the format implied by the file name.
    #[error("failed to decode {format:?} content: {message}")]
    Decode {
        format: SourceFormat,
        message: String,
    },

    #[cfg(feature = "excel")]
    /// Workbook container could not be opened or read.
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    #[cfg(feature = "excel")]
    /// Workbook could not be re-encoded.
    #[error("xlsx write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Fewer usable rows than a header plus one data row.
    #[error("empty content: found {rows} usable row(s), need a header row and at least one data row")]
    EmptyContent { rows: usize },

    /// Confirmation was requested while no file is selected.
    #[error("no file selected")]
    NoFileSelected,
}
