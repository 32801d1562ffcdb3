//! `tabular-preview` builds a bounded, schema-free preview of a user-supplied tabular file
//! (delimited text or a spreadsheet workbook) before the original file is handed to a remote
//! import service.
//!
//! The primary entrypoint is [`ingestion::parse_preview`], which routes the file by name suffix,
//! decodes it into a [`types::RawGrid`], normalizes at most ten data rows against the header row,
//! and never fails: any decode problem yields an empty [`types::ParseResult`] and a diagnostic log.
//!
//! ## What gets previewed
//!
//! **Formats (routed by name suffix):**
//!
//! - **CSV**: anything not ending in a workbook suffix. The delimiter is `;` if the first
//!   non-blank line contains one, `,` otherwise. Quoted fields may contain the delimiter and
//!   `""` escapes.
//! - **Workbooks** (Cargo feature `excel`, on by default): `.xlsx`, `.xls`. Only the first
//!   sheet is read.
//!
//! **Rows:**
//!
//! Row 0 is the header. Every preview [`types::Row`] maps header names to trimmed strings;
//! missing cells become `""`, extra cells are dropped, and no expected column set is enforced.
//!
//! ## Quick example
//!
//! ```rust
//! use tabular_preview::ingestion::{parse_preview, PreviewOptions};
//! use tabular_preview::types::SourceFile;
//!
//! let file = SourceFile::new(
//!     "slots.csv",
//!     "enseignant,semestre,type_ex\nN.BEN HARIZ,\"Semestre 1, Principale\",Partiel\n",
//! );
//! let preview = parse_preview(&file, &PreviewOptions::default());
//!
//! assert_eq!(preview.rows[0].get("semestre"), Some("Semestre 1, Principale"));
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: format routing, CSV/workbook readers, failure containment, observers
//! - [`processing`]: row normalization, preview bounding, import templates, column annotation
//! - [`execution`]: selection sessions that discard superseded parses
//! - [`types`]: files, grids, rows, and preview results
//! - [`error`]: error types surfaced outside the preview boundary

pub mod error;
pub mod execution;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{PreviewError, PreviewResult};
