use dashmap::DashMap;

/// How many ranked words a `find` call returns at most
pub const TOP_WORDS_LIMIT: usize = 10;

/// Concurrent per-word hit counter for a single `find` call.
///
/// Backed by a sharded concurrent map so increments to the same word are
/// atomic read-modify-write operations under that word's shard lock, while
/// increments to different words rarely contend. The tally is created empty,
/// populated during the fan-out, consumed by [`WordTally::into_ranked`], and
/// dropped; it never outlives the call.
#[derive(Debug, Default)]
pub struct WordTally {
    counts: DashMap<String, u64>,
}

impl WordTally {
    /// Creates an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one hit for `word`
    pub fn record(&self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
    }

    /// Number of distinct words recorded
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// Consumes the tally and returns at most `limit` words ordered by
    /// count descending, ties broken by codepoint-ascending word order.
    ///
    /// The sort key is a total order, so the output is deterministic no
    /// matter how the tally was populated.
    pub fn into_ranked(self, limit: usize) -> Vec<String> {
        let mut entries: Vec<(String, u64)> = self.counts.into_iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(limit);
        entries.into_iter().map(|(word, _)| word).collect()
    }
}
