/*! Content processing

Turns text units into [Word]s:
- [chunks] splits the units and runs chunks concurrently on a bounded pool,
- [words] assembles the words of a chunk (tokenization, cleaning, recombination, tagging).
!*/
pub mod chunks;
mod word;
pub mod words;

pub use chunks::{calculate_chunks, ChunkProcessor};
pub use word::{TextUnit, Word};
pub use words::WordAssembler;
