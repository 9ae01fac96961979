//! Parser trait definition.

use parse_japanese_ast::Root;
use parse_japanese_text::Tokenize;

use crate::{JapaneseParser, ParseError};

/// Trait for parsing source text into an NLCST tree.
///
/// # Example
///
/// ```rust,ignore
/// use parse_japanese_parser::{Parser, ParseError};
/// use parse_japanese_ast::Root;
///
/// struct MyParser;
///
/// impl Parser for MyParser {
///     fn name(&self) -> &str {
///         "my-parser"
///     }
///
///     fn extensions(&self) -> &[&str] {
///         &["myext"]
///     }
///
///     fn parse(&self, source: &str) -> Result<Root, ParseError> {
///         todo!()
///     }
/// }
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Returns the file extensions this parser handles.
    ///
    /// Extensions should not include the leading dot (e.g., `["txt", "text"]`).
    fn extensions(&self) -> &[&str];

    /// Parses the source text into a tree.
    fn parse(&self, source: &str) -> Result<Root, ParseError>;

    /// Returns true if this parser can handle the given file extension.
    fn can_parse(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

impl<T: Tokenize> Parser for JapaneseParser<T> {
    fn name(&self) -> &str {
        "japanese"
    }

    fn extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn parse(&self, source: &str) -> Result<Root, ParseError> {
        JapaneseParser::parse(self, source)
    }
}
