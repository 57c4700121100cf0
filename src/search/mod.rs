/// This module implements concurrent word searching over a character grid, demonstrating
/// Rust's parallel processing capabilities compared to .NET's Task Parallel Library (TPL).
///
/// # .NET vs Rust Parallel Processing
///
/// In .NET, you might fan a word stream out with:
/// ```csharp
/// Parallel.ForEach(wordstream, word => {
///     if (FindWord(word))
///         tally.AddOrUpdate(word, 1, (_, count) => count + 1);
/// });
/// ```
///
/// In Rust, we use Rayon's parallel iterators which provide similar functionality but with
/// guaranteed memory safety through Rust's ownership system:
/// ```rust,ignore
/// words.par_chunks(chunk_size).for_each(|chunk| {
///     for word in chunk {
///         if scanner.is_present(word) {
///             tally.record(word);
///         }
///     }
/// });
/// ```
///
/// # Performance Optimizations
///
/// This implementation includes several optimizations:
/// 1. **Short-Circuiting Presence Scan**: the per-word grid scan is an `any`
///    reduction, so it stops as soon as one occurrence is found instead of
///    continuing to scan after a match
/// 2. **Size-Based Strategy**: small grids are scanned on the calling thread,
///    large ones with a parallel row scan (similar to .NET's partitioning
///    strategies in TPL)
/// 3. **Chunked Fan-Out**: the word stream is processed in adaptively sized
///    chunks to balance thread workload
/// 4. **Presence Memoization**: duplicate query words reuse the first
///    computed answer; only their tally differs per occurrence
///
/// # Determinism
///
/// Unlike ad-hoc parallel loops mutating shared lists, every shared structure
/// here is either read-only (the grid) or commutative under concurrent update
/// (the tally), so the ranked output of a parallel run is identical to a
/// sequential one.
pub mod engine;
pub mod scanner;

pub use engine::Finder;
pub use scanner::GridScanner;
