//! # parse_japanese_text
//!
//! Text analysis collaborators of the Japanese parser: the dictionary-backed
//! tokenizer and the bracket normalizer that prepares each line for it.

mod normalize;
mod tokenizer;

pub use normalize::{normalize_brackets, to_wide};
pub use parse_japanese_ast::Token;
pub use tokenizer::{DEFAULT_DICTIONARY, TextError, Tokenize, Tokenizer};
