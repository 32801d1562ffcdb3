//! Preview bounding.

use crate::types::RawGrid;

/// Default number of data rows in a preview.
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// The first `limit` data rows of `grid` (header excluded).
pub fn preview_window(grid: &RawGrid, limit: usize) -> &[Vec<String>] {
    let data = grid.data_rows();
    &data[..data.len().min(limit)]
}

/// Truncate already-normalized rows to at most `limit`.
pub fn limit_rows<T>(mut rows: Vec<T>, limit: usize) -> Vec<T> {
    rows.truncate(limit);
    rows
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PREVIEW_LIMIT, limit_rows, preview_window};
    use crate::types::RawGrid;

    fn grid_with(data_rows: usize) -> RawGrid {
        let mut rows = vec![vec!["id".to_string()]];
        rows.extend((0..data_rows).map(|i| vec![i.to_string()]));
        RawGrid::new(rows)
    }

    #[test]
    fn window_is_capped() {
        let grid = grid_with(500);
        let window = preview_window(&grid, DEFAULT_PREVIEW_LIMIT);
        assert_eq!(window.len(), 10);
        assert_eq!(window[0], vec!["0"]);
    }

    #[test]
    fn window_of_small_or_header_only_grid() {
        assert_eq!(preview_window(&grid_with(3), 10).len(), 3);
        assert!(preview_window(&grid_with(0), 10).is_empty());
        assert!(preview_window(&RawGrid::default(), 10).is_empty());
    }

    #[test]
    fn limit_rows_truncates() {
        assert_eq!(limit_rows((0..25).collect::<Vec<i32>>(), 10), (0..10).collect::<Vec<i32>>());
        assert_eq!(limit_rows(vec![1, 2], 10), vec![1, 2]);
    }
}
