use rayon::prelude::*;
use std::sync::Arc;
use tracing::trace;

use crate::grid::Grid;

// Grids below this cell count are scanned on the calling thread; splitting
// a tiny scan across workers costs more than the scan itself.
const PARALLEL_CELL_THRESHOLD: usize = 1024;

/// Answers presence queries against a shared grid.
///
/// Presence is a pure existence test: does the word occur at least once,
/// reading left-to-right on some row or top-to-bottom on some column, as a
/// contiguous case-sensitive match with no wraparound. The scan is a
/// short-circuiting `any` over rows, so it stops as soon as one match is
/// found and never materializes match positions.
#[derive(Debug, Clone)]
pub struct GridScanner {
    grid: Arc<Grid>,
}

impl GridScanner {
    /// Creates a scanner over the given grid
    pub fn new(grid: Arc<Grid>) -> Self {
        Self { grid }
    }

    /// The grid this scanner reads
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Tests whether `word` occurs anywhere in the grid.
    ///
    /// Callers guarantee `word` is non-empty; `Finder` validates the stream
    /// before any scanning starts.
    pub fn is_present(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        debug_assert!(!chars.is_empty());

        if chars.len() > self.grid.rows() && chars.len() > self.grid.cols() {
            trace!("word longer than both grid dimensions: {}", word);
            return false;
        }

        let rows = self.grid.rows();
        if self.grid.len() >= PARALLEL_CELL_THRESHOLD {
            (0..rows).into_par_iter().any(|row| self.scan_row(row, &chars))
        } else {
            (0..rows).any(|row| self.scan_row(row, &chars))
        }
    }

    /// Scans one row for a horizontal match starting in it, or a vertical
    /// match anchored in it
    fn scan_row(&self, row: usize, word: &[char]) -> bool {
        let row_cells = self.grid.row(row);
        for (col, &cell) in row_cells.iter().enumerate() {
            if cell != word[0] {
                continue;
            }
            if self.matches_right(row, col, word) || self.matches_down(row, col, word) {
                return true;
            }
        }
        false
    }

    fn matches_right(&self, row: usize, col: usize, word: &[char]) -> bool {
        if col + word.len() > self.grid.cols() {
            return false;
        }
        let row_cells = self.grid.row(row);
        row_cells[col..col + word.len()] == *word
    }

    fn matches_down(&self, row: usize, col: usize, word: &[char]) -> bool {
        if row + word.len() > self.grid.rows() {
            return false;
        }
        word.iter()
            .enumerate()
            .all(|(k, &ch)| self.grid.at(row + k, col) == ch)
    }
}
