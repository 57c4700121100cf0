use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

/// Tracks query-processing counters for a `Finder`
///
/// Counters are Relaxed atomics shared through Arc so concurrently running
/// workers can record without coordination; totals are only read after the
/// fan-out has joined.
#[derive(Debug, Clone, Default)]
pub struct FindMetrics {
    // Word-stream metrics
    queries_processed: Arc<AtomicU64>,
    queries_found: Arc<AtomicU64>,

    // Presence-memo metrics
    memo_hits: Arc<AtomicU64>,
    memo_misses: Arc<AtomicU64>,

    // Per-call metrics
    streams_searched: Arc<AtomicU64>,
}

impl FindMetrics {
    /// Creates a new FindMetrics instance with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one query word taken from the stream
    pub fn record_query(&self, found: bool) {
        self.queries_processed.fetch_add(1, Ordering::Relaxed);
        if found {
            self.queries_found.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records a presence-memo lookup
    pub fn record_memo_lookup(&self, hit: bool) {
        if hit {
            self.memo_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.memo_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records one completed `find` call
    pub fn record_stream(&self) {
        self.streams_searched.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets current counter values
    pub fn get_stats(&self) -> FindStats {
        FindStats {
            queries_processed: self.queries_processed.load(Ordering::Relaxed),
            queries_found: self.queries_found.load(Ordering::Relaxed),
            memo_hits: self.memo_hits.load(Ordering::Relaxed),
            memo_misses: self.memo_misses.load(Ordering::Relaxed),
            streams_searched: self.streams_searched.load(Ordering::Relaxed),
        }
    }

    /// Logs current counter values
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Find stats:\n\
             Queries processed: {}\n\
             Queries found: {}\n\
             Memo hits/misses: {}/{}\n\
             Streams searched: {}",
            stats.queries_processed,
            stats.queries_found,
            stats.memo_hits,
            stats.memo_misses,
            stats.streams_searched
        );
    }
}

/// Snapshot of the counters in a [`FindMetrics`]
#[derive(Debug, Clone, Copy)]
pub struct FindStats {
    pub queries_processed: u64,
    pub queries_found: u64,
    pub memo_hits: u64,
    pub memo_misses: u64,
    pub streams_searched: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_tracking() {
        let metrics = FindMetrics::new();

        metrics.record_query(true);
        metrics.record_query(false);
        metrics.record_query(true);

        let stats = metrics.get_stats();
        assert_eq!(stats.queries_processed, 3);
        assert_eq!(stats.queries_found, 2);
    }

    #[test]
    fn test_memo_tracking() {
        let metrics = FindMetrics::new();

        metrics.record_memo_lookup(false);
        metrics.record_memo_lookup(true);
        metrics.record_memo_lookup(true);

        let stats = metrics.get_stats();
        assert_eq!(stats.memo_hits, 2);
        assert_eq!(stats.memo_misses, 1);
    }

    #[test]
    fn test_shared_across_clones() {
        let metrics = FindMetrics::new();
        let clone = metrics.clone();

        metrics.record_stream();
        clone.record_stream();

        assert_eq!(metrics.get_stats().streams_searched, 2);
        assert_eq!(clone.get_stats().streams_searched, 2);
    }
}
