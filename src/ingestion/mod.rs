//! Preview entrypoints and format readers.
//!
//! Most callers should use [`parse_preview`] (from [`unified`]) which:
//!
//! - routes the file to the CSV or workbook reader by name suffix (or [`PreviewOptions::format`])
//! - normalizes up to [`PreviewOptions::preview_limit`] rows against the header row
//! - absorbs every failure into an empty result, reporting it to an [`PreviewObserver`]
//!
//! Format-specific readers are also available under:
//! - [`csv`]
//! - `excel` (feature `excel`)

pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, FileObserver, PreviewContext, PreviewObserver, PreviewSeverity, PreviewStats,
    StdErrObserver,
};
pub use unified::{
    PreviewOptions, SourceFormat, WORKBOOK_SUFFIXES, decode_grid, parse_preview, preview_from_path,
    try_parse_preview,
};
