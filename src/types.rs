//! Core data model types for previewing.
//!
//! Both the CSV and workbook paths decode into a [`RawGrid`] of trimmed strings. Row 0 of the grid
//! is the [`Header`]; the remaining rows are normalized into schema-free [`Row`]s and returned
//! as a bounded [`ParseResult`].

use std::fs;
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::PreviewResult;
use crate::ingestion::SourceFormat;

/// File name suffixes a picker should offer.
pub const ACCEPTED_SUFFIXES: &[&str] = &[".csv", ".xlsx", ".xls"];

/// A user-selected file: its name and its full byte payload.
///
/// This is also what gets forwarded to the remote import step, unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name as chosen by the user (only the suffix matters for routing).
    pub name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl SourceFile {
    /// Create a file from a name and payload.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, using its file name as [`Self::name`].
    pub fn from_path(path: impl AsRef<Path>) -> PreviewResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, bytes })
    }

    /// Format implied by the file name suffix.
    pub fn format(&self) -> SourceFormat {
        SourceFormat::detect(&self.name)
    }

    /// Whether the name ends in one of [`ACCEPTED_SUFFIXES`] (case-insensitive).
    ///
    /// Advisory only: parsing does not require it.
    pub fn has_accepted_suffix(&self) -> bool {
        let lower = self.name.to_ascii_lowercase();
        ACCEPTED_SUFFIXES.iter().any(|s| lower.ends_with(s))
    }
}

/// Rectangular-ish grid of trimmed cell strings. Rows may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGrid {
    /// Row-major cell storage; row 0 is the header.
    pub rows: Vec<Vec<String>>,
}

impl RawGrid {
    /// Create a grid from rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Number of rows including the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header built from row 0, if any.
    pub fn header(&self) -> Option<Header> {
        self.rows.first().map(|r| Header::new(r.iter().cloned()))
    }

    /// All rows after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// Ordered, trimmed field names taken from row 0. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// Field names in column order.
    pub names: Vec<String>,
}

impl Header {
    /// Create a header, trimming every name.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| n.as_ref().trim().to_owned()).collect(),
        }
    }

    /// Number of columns (duplicates included).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

/// A schema-free record: field name to trimmed value, in header order.
///
/// Inserting an existing key overwrites its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    entries: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Outcome of previewing one file.
///
/// `errors` is part of the shape handed to UI layers but is never populated: failures are
/// absorbed into an empty result (see [`crate::ingestion::parse_preview`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ParseResult {
    /// Preview-bounded rows.
    pub rows: Vec<Row>,
    /// Always empty.
    pub errors: Vec<String>,
}

impl ParseResult {
    /// The `{ rows: [], errors: [] }` result.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            errors: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Header, ParseResult, Row, SourceFile};

    #[test]
    fn row_insert_overwrites_in_place() {
        let mut row = Row::new();
        row.insert("a", "1");
        row.insert("b", "2");
        row.insert("a", "3");
        assert_eq!(row.len(), 2);
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(row.get("a"), Some("3"));
    }

    #[test]
    fn header_trims_names() {
        let h = Header::new([" id ", "name\r"]);
        assert_eq!(h.names, vec!["id", "name"]);
        assert!(h.contains("name"));
    }

    #[test]
    fn parse_result_serializes_rows_in_header_order() {
        let mut row = Row::new();
        row.insert("z", "1");
        row.insert("a", "2");
        let json = serde_json::to_string(&ParseResult::from_rows(vec![row])).unwrap();
        assert_eq!(json, r#"{"rows":[{"z":"1","a":"2"}],"errors":[]}"#);
    }

    #[test]
    fn accepted_suffixes_are_case_insensitive() {
        assert!(SourceFile::new("a.CSV", Vec::new()).has_accepted_suffix());
        assert!(SourceFile::new("a.xls", Vec::new()).has_accepted_suffix());
        assert!(!SourceFile::new("a.txt", Vec::new()).has_accepted_suffix());
    }
}
