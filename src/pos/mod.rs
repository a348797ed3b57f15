/*! Part of speech handling.

Two taxonomies meet here:
- tokenizer tags (`名詞`, `助詞`, ...), translated into English labels by [translate],
- dictionary POS codes (`n`, `v5r vt`, `1 adj-i`, ...), that are noisier and get [normalize]d into the same canonical labels.

!*/
mod normalize;
mod translate;

pub use normalize::{is_canonical, normalize, NO_POS_DATA};
pub use translate::{translate, translate_one, translate_or_fallback, UNCLASSIFIED};
