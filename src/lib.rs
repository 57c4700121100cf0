pub mod config;
pub mod errors;
pub mod grid;
pub mod metrics;
pub mod search;
pub mod tally;

pub use config::FinderConfig;
pub use errors::{GridResult, ValidationError};
pub use grid::Grid;
pub use search::Finder;
