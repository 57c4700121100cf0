use dashmap::DashMap;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

use super::scanner::GridScanner;
use crate::config::FinderConfig;
use crate::errors::{GridResult, ValidationError};
use crate::grid::Grid;
use crate::metrics::FindMetrics;
use crate::tally::{WordTally, TOP_WORDS_LIMIT};

// Chunk bounds for the word-stream fan-out; small streams stay in one chunk,
// large ones split for load balancing.
const MIN_CHUNK_SIZE: usize = 1;
const MAX_CHUNK_SIZE: usize = 256;

/// Searches a word stream against an immutable grid and ranks the hits.
///
/// The finder owns its grid behind `Arc`, so scanning workers share it
/// read-only with no synchronization. `find` may be called any number of
/// times; each call builds and discards its own tally.
#[derive(Debug, Clone)]
pub struct Finder {
    scanner: GridScanner,
    config: FinderConfig,
    metrics: FindMetrics,
}

impl Finder {
    /// Creates a finder over `grid` with the default configuration
    pub fn new(grid: Grid) -> Self {
        Self::with_config(grid, FinderConfig::default())
    }

    /// Creates a finder over `grid` with an explicit configuration
    pub fn with_config(grid: Grid, config: FinderConfig) -> Self {
        Self {
            scanner: GridScanner::new(Arc::new(grid)),
            config,
            metrics: FindMetrics::new(),
        }
    }

    /// The grid this finder searches
    pub fn grid(&self) -> &Grid {
        self.scanner.grid()
    }

    /// Cumulative counters across all `find` calls on this finder
    pub fn metrics(&self) -> &FindMetrics {
        &self.metrics
    }

    /// Searches every word of `words` in the grid and returns the ten most
    /// frequent found words, ordered by count descending then word ascending.
    ///
    /// Duplicate stream entries are intentional: each occurrence of a found
    /// word adds one to its tally. An empty stream yields an empty result;
    /// a zero-length word anywhere in the stream fails the whole call with
    /// [`ValidationError::EmptyWord`] before any tally work starts.
    ///
    /// Words are evaluated concurrently, but the tally is order-independent
    /// and the ranking key is a total order, so the result is identical to a
    /// sequential run.
    pub fn find<S: AsRef<str> + Sync>(&self, words: &[S]) -> GridResult<Vec<String>> {
        info!("Starting find over {} query words", words.len());

        if words.is_empty() {
            debug!("Empty word stream, returning empty result");
            return Ok(Vec::new());
        }

        // Validation pre-pass: the call fails atomically, before any scan
        for (index, word) in words.iter().enumerate() {
            if word.as_ref().is_empty() {
                return Err(ValidationError::empty_word(index));
            }
        }

        let tally = WordTally::new();
        // Presence per distinct word is idempotent, so duplicates reuse the
        // memoized answer instead of rescanning the grid. A racy double
        // compute between get and insert is benign.
        let presence: DashMap<&str, bool> = DashMap::new();

        let thread_count = self.config.thread_count.get();
        let chunk_size = (words.len() / thread_count).clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE);
        debug!(
            "Fanning out {} words in chunks of {} across {} threads",
            words.len(),
            chunk_size,
            thread_count
        );

        words.par_chunks(chunk_size).for_each(|chunk| {
            for word in chunk {
                let word = word.as_ref();
                let found = match presence.get(word) {
                    Some(found) => {
                        self.metrics.record_memo_lookup(true);
                        *found
                    }
                    None => {
                        self.metrics.record_memo_lookup(false);
                        let found = self.scanner.is_present(word);
                        presence.insert(word, found);
                        found
                    }
                };
                self.metrics.record_query(found);
                if found {
                    tally.record(word);
                }
            }
        });

        self.metrics.record_stream();
        let distinct_found = tally.distinct_words();
        let ranked = tally.into_ranked(TOP_WORDS_LIMIT);

        self.metrics.log_stats();
        info!(
            "Find complete. {} distinct words found, returning top {}",
            distinct_found,
            ranked.len()
        );

        Ok(ranked)
    }
}
