/// This module implements the character grid, demonstrating key differences between
/// Rust's ownership system and .NET's reference types.
///
/// # Rust Ownership vs .NET References
///
/// A .NET matrix class is a reference type that can be mutated from anywhere
/// it is reachable:
/// ```csharp
/// public class CharMatrix {
///     public char[,] Cells { get; set; }
///     // Any holder of the reference can reassign Cells
///     // Immutability is a convention, not a guarantee
/// }
/// ```
///
/// The Rust grid owns its cells and exposes no mutation API:
/// ```rust,ignore
/// pub struct Grid {
///     cells: Vec<char>, // private, copied out of the caller's rows
///     // Immutable after construction by construction
/// }
/// ```
///
/// Construction copies the characters out of the caller's strings, so the grid
/// never aliases caller memory and can be shared freely across threads.
use crate::errors::{GridResult, ValidationError};

/// Maximum number of rows and columns a grid may have
pub const MAX_DIM: usize = 64;

/// An immutable, rectangular character grid bounded at 64x64.
///
/// Cells are stored row-major in a flat buffer; comparisons operate on
/// `char`s (Unicode scalar values), not grapheme clusters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Builds a grid from row strings, validating shape and size.
    ///
    /// Fails with `EmptyGrid` for zero rows, `SizeExceeded` when either
    /// dimension is larger than [`MAX_DIM`], and `RaggedRow` when any row's
    /// character count differs from the first row's.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> GridResult<Self> {
        if rows.is_empty() {
            return Err(ValidationError::EmptyGrid);
        }

        let row_count = rows.len();
        let cols = rows[0].as_ref().chars().count();
        if row_count > MAX_DIM || cols > MAX_DIM {
            return Err(ValidationError::size_exceeded(row_count, cols));
        }

        let mut cells = Vec::with_capacity(row_count * cols);
        for (index, row) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(row.as_ref().chars());
            let actual = cells.len() - before;
            if actual != cols {
                return Err(ValidationError::ragged_row(index, cols, actual));
            }
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a grid with zero columns (rows of empty strings)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The character at (row, col). Callers stay in bounds.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> char {
        self.cells[row * self.cols + col]
    }

    /// The cells of one row as a contiguous slice
    #[inline]
    pub(crate) fn row(&self, row: usize) -> &[char] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
}
