//! The Japanese NLCST parser.

use std::fs;
use std::path::Path;

use parse_japanese_ast::{Paragraph, ParagraphChild, ParentNode, Root};
use parse_japanese_text::{Tokenize, Tokenizer, normalize_brackets, to_wide};
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::builder::NodeBuilder;
use crate::lines::{Line, split_lines};
use crate::segment::{Segmenter, TokenCategory};
use crate::{ParseError, ParserOptions};

/// Parses Japanese text into an NLCST tree.
///
/// A parser only exists once its tokenizer is ready: building one loads
/// the dictionary, and a failed load leaves no parser behind. The
/// tokenizer is only read afterwards, so one parser can serve any number
/// of parses, including concurrent ones through [`parse_batch`].
///
/// [`parse_batch`]: JapaneseParser::parse_batch
///
/// # Example
///
/// ```rust,no_run
/// use parse_japanese_parser::{JapaneseParser, ParserOptions};
///
/// let parser = JapaneseParser::new(ParserOptions::default())?;
/// let root = parser.parse("これは文です。\n")?;
///
/// assert_eq!(root.children.len(), 1);
/// # Ok::<(), parse_japanese_parser::ParseError>(())
/// ```
#[derive(Debug)]
pub struct JapaneseParser<T = Tokenizer> {
    options: ParserOptions,
    tokenizer: T,
}

impl JapaneseParser<Tokenizer> {
    /// Validates `options` and loads the configured dictionary.
    pub fn new(options: ParserOptions) -> Result<Self, ParseError> {
        options.validate()?;
        let tokenizer = Tokenizer::from_dictionary(&options.dictionary_path)?;
        debug!("Dictionary loaded from {}", options.dictionary_path);

        Ok(Self { options, tokenizer })
    }
}

impl<T: Tokenize> JapaneseParser<T> {
    /// Creates a parser around an already built tokenizer.
    pub fn with_tokenizer(options: ParserOptions, tokenizer: T) -> Result<Self, ParseError> {
        options.validate()?;
        Ok(Self { options, tokenizer })
    }

    /// Returns the options this parser was built with.
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Returns the tokenizer.
    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Parses `text` into a tree.
    ///
    /// Every physical line becomes a paragraph. A blank line becomes a
    /// paragraph holding only its line break; the empty remainder after a
    /// trailing line break produces nothing.
    pub fn parse(&self, text: &str) -> Result<Root, ParseError> {
        let lines = split_lines(text);
        let mut builder = NodeBuilder::new(&self.options);
        let mut segmenter = Segmenter::new();
        let mut root = Root::default();

        for line in &lines {
            builder.start_line(line.index);

            if line.content.is_empty() {
                if let Some(terminator) = line.terminator {
                    let mut paragraph = Paragraph::default();
                    paragraph.attach(ParagraphChild::WhiteSpace(builder.line_break(terminator)));
                    root.attach(paragraph);
                }
                continue;
            }

            let paragraph = self.parse_line(line, &mut builder, &mut segmenter)?;
            if !paragraph.is_empty() {
                root.attach(paragraph);
            }
        }

        if segmenter.depth() != 0 {
            warn!("Unbalanced brackets: depth {} at end of text", segmenter.depth());
        }
        debug!(
            "Parsed {} lines into {} paragraphs",
            lines.len(),
            root.children.len()
        );

        Ok(root)
    }

    /// Parses raw bytes, rejecting anything that is not UTF-8 before the
    /// tokenizer is used.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Root, ParseError> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            ParseError::invalid_source_at(format!("source is not UTF-8: {}", e), e.valid_up_to())
        })?;
        self.parse(text)
    }

    /// Reads and parses a file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Root, ParseError> {
        let path = path.as_ref();
        debug!("Parsing {}", path.display());
        let bytes = fs::read(path)?;
        self.parse_bytes(&bytes)
    }

    fn parse_line(
        &self,
        line: &Line<'_>,
        builder: &mut NodeBuilder<'_>,
        segmenter: &mut Segmenter,
    ) -> Result<Paragraph, ParseError> {
        let tokens = self.tokenizer.tokenize(&normalize_brackets(line.content))?;
        trace!("Line {}: {} tokens", line.index + 1, tokens.len());

        let mut paragraph = Paragraph::default();

        if !tokens.is_empty() {
            segmenter.begin_line();

            let last = tokens.len() - 1;
            let mut rest = line.content;
            for (index, token) in tokens.iter().enumerate() {
                let (value, consumed) = source_text(rest, &token.surface_form);
                rest = &rest[consumed..];

                let leaf = builder.leaf(value, token);
                segmenter.step(TokenCategory::of(token), leaf, index == last, &mut paragraph);
            }

            segmenter.finish_line(&mut paragraph);
        }

        if let Some(terminator) = line.terminator {
            paragraph.attach(ParagraphChild::WhiteSpace(builder.line_break(terminator)));
        }

        Ok(paragraph)
    }
}

impl<T: Tokenize + Sync> JapaneseParser<T> {
    /// Parses several texts in parallel with the shared tokenizer.
    ///
    /// Results are returned in input order.
    pub fn parse_batch(&self, texts: &[&str]) -> Vec<Result<Root, ParseError>> {
        texts.par_iter().map(|text| self.parse(text)).collect()
    }
}

/// Returns the source text under a token and its length in bytes.
///
/// The tokenizer sees the normalized line, so its surface forms may hold
/// full-width brackets where the source has half-width ones. The same
/// number of codepoints is taken from `rest`; if they do not normalize to
/// the surface form, the surface form itself is used.
fn source_text<'a>(rest: &'a str, surface: &'a str) -> (&'a str, usize) {
    let length = surface.chars().count();
    let end = rest
        .char_indices()
        .nth(length)
        .map_or(rest.len(), |(index, _)| index);
    let candidate = &rest[..end];

    if candidate.chars().map(to_wide).eq(surface.chars()) {
        (candidate, end)
    } else {
        (surface, end)
    }
}
