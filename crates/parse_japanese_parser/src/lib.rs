//! # parse_japanese_parser
//!
//! Japanese text to NLCST.
//!
//! This crate provides:
//! - [`JapaneseParser`], which turns text into a `Root` of paragraphs,
//!   sentences, words and leaves
//! - [`ParserOptions`] for position tracking, token metadata and the
//!   dictionary location
//! - A [`Parser`] trait shared by parser implementations
//!
//! ## Architecture
//!
//! Text is split into physical lines; every line becomes one paragraph.
//! Each line is bracket-normalized and tokenized, then its tokens are
//! grouped into words and sentences by a [`Segmenter`] driven by bracket
//! depth. A [`Cursor`] tracks line, column and offset in codepoints, and
//! every parent's position spans its first and last child.
//!
//! ## Example
//!
//! ```rust,no_run
//! use parse_japanese_parser::{JapaneseParser, ParserOptions};
//!
//! let parser = JapaneseParser::new(ParserOptions::default())?;
//! let root = parser.parse("これは前段です。これは後段です。")?;
//!
//! assert_eq!(root.sentences().count(), 2);
//! # Ok::<(), parse_japanese_parser::ParseError>(())
//! ```

mod builder;
mod cursor;
mod error;
mod lines;
mod options;
mod parser;
mod segment;
mod traits;

#[cfg(test)]
mod test_utils;

pub use cursor::Cursor;
pub use error::ParseError;
pub use lines::{Line, split_lines};
pub use options::ParserOptions;
pub use parser::JapaneseParser;
pub use segment::{Segmenter, TokenCategory};
pub use traits::Parser;
