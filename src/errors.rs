/// This module defines custom error types for wordgrid, demonstrating Rust's error handling
/// compared to .NET's exception system.
///
/// # Rust vs .NET Error Handling
///
/// .NET reports bad inputs by throwing:
/// ```csharp
/// try {
///     var finder = new WordFinder(matrix);
///     finder.Find(wordstream);
/// } catch (ArgumentException ex) {
///     // Handle invalid matrix
/// } catch (Exception ex) {
///     // Handle other errors
/// }
/// ```
///
/// Rust uses Result types with custom errors:
/// ```rust,ignore
/// match Grid::new(&rows) {
///     Ok(grid) => // Build a Finder,
///     Err(ValidationError::SizeExceeded { .. }) => // Grid too large,
///     Err(ValidationError::RaggedRow { .. }) => // Rows of unequal length,
///     Err(e) => // Handle other errors
/// }
/// ```
///
/// # Benefits of Rust's Approach
///
/// 1. **Explicit Error Handling**
///    - .NET allows unchecked exceptions
///    - Rust requires explicit handling or propagation
///
/// 2. **Zero-Cost Abstractions**
///    - .NET exceptions have runtime overhead
///    - Rust's Result type has no runtime cost
///
/// 3. **Type Safety**
///    - .NET exceptions are discovered at runtime
///    - Rust errors are checked at compile time
use thiserror::Error;

/// Result type for grid construction and search operations
pub type GridResult<T> = Result<T, ValidationError>;

/// Errors raised when validating grid rows or a query word stream
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty grid: at least one row is required")]
    EmptyGrid,
    #[error("Grid size exceeded: {rows}x{cols} is larger than the {max}x{max} maximum")]
    SizeExceeded { rows: usize, cols: usize, max: usize },
    #[error("Ragged row {index}: expected {expected} characters, found {actual}")]
    RaggedRow {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Empty query word at stream position {index}")]
    EmptyWord { index: usize },
}

impl ValidationError {
    pub fn size_exceeded(rows: usize, cols: usize) -> Self {
        Self::SizeExceeded {
            rows,
            cols,
            max: crate::grid::MAX_DIM,
        }
    }

    pub fn ragged_row(index: usize, expected: usize, actual: usize) -> Self {
        Self::RaggedRow {
            index,
            expected,
            actual,
        }
    }

    pub fn empty_word(index: usize) -> Self {
        Self::EmptyWord { index }
    }
}
