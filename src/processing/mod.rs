//! Grid → preview transformations.
//!
//! - [`normalize_rows()`]: pair a [`crate::types::Header`] with data rows, padding short rows
//! - [`preview_window()`] / [`limit_rows()`]: bound the preview to [`DEFAULT_PREVIEW_LIMIT`] rows
//! - [`append_constant_column()`]: tag every row of the original file before upload
//! - [`ImportTemplate`]: documented (never enforced) column sets
//!
//! ## Example
//!
//! ```rust
//! use tabular_preview::processing::{normalize_rows, preview_window};
//! use tabular_preview::types::RawGrid;
//!
//! let grid = RawGrid::new(vec![
//!     vec!["id".to_string(), "name".to_string(), "grade".to_string()],
//!     vec!["57".to_string(), "Karoui".to_string()],
//! ]);
//! let header = grid.header().unwrap();
//! let rows = normalize_rows(&header, preview_window(&grid, 10));
//!
//! assert_eq!(rows[0].get("name"), Some("Karoui"));
//! assert_eq!(rows[0].get("grade"), Some(""));
//! ```

pub mod annotate;
pub mod limit;
pub mod normalize;
pub mod template;

pub use annotate::append_constant_column;
pub use limit::{DEFAULT_PREVIEW_LIMIT, limit_rows, preview_window};
pub use normalize::{normalize_row, normalize_rows};
pub use template::ImportTemplate;
