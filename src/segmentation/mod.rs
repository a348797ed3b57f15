/*! Word segmentation.

Morphemes produced by the tokenizer are often smaller than dictionary words
(`こ` `ん` `に` `ち` `は` for `こんにちは`, or `経済` `対策` for `経済対策`).
[WordRecombiner] regroups consecutive morphemes into the longest words found in the [crate::dictionary::Dictionary].
!*/
mod recombine;

pub use recombine::{Span, WordRecombiner, DEFAULT_MAX_WORD_LENGTH};
