/*! Filtering utilities

Filters operate on characters, morphemes or words.

Filters implement [filter::Filter]: they are pure (2 successive equal inputs -> 2 equal outputs),
and are shared read-only between workers.

- [script::ScriptFilter] keeps Japanese script characters, and is the base of the morpheme cleanup done before dictionary lookup.
- [pos::ExcludedPos] discards words whose part of speech should not be stored.
!*/
mod filter;
pub mod pos;
pub mod script;

pub use filter::Filter;
pub use pos::ExcludedPos;
pub use script::{clean, clean_morphemes, ScriptFilter};
