//! Per-selection parse coordination.
//!
//! File contents arrive asynchronously, once per selection. If a user picks a second file before
//! the first has been read, both parses eventually finish; [`PreviewSession`] makes sure only the
//! latest selection's result is kept, whatever order they finish in.
//!
//! ```rust
//! use tabular_preview::execution::PreviewSession;
//! use tabular_preview::types::SourceFile;
//!
//! let session = PreviewSession::default();
//! let slow = session.select(SourceFile::new("old.csv", "a\n1\n"));
//! let fast = session.select(SourceFile::new("new.csv", "b\n2\n"));
//!
//! assert!(session.complete(&fast, fast.parse()));
//! assert!(!session.complete(&slow, slow.parse()));
//! assert_eq!(session.preview().rows[0].get("b"), Some("2"));
//!
//! let upload = session.confirm().unwrap();
//! assert_eq!(upload.name, "new.csv");
//! ```

mod session;

pub use session::{ParseTicket, PreviewSession};
