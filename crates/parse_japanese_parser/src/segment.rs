//! Word and sentence segmentation.
//!
//! Tokens of one line are fed in order to a [`Segmenter`], which groups
//! them into words and sentences inside the line's paragraph. The only
//! state that outlives a line is the bracket depth.

use std::mem;

use parse_japanese_ast::{
    Leaf, Paragraph, ParagraphChild, ParentNode, Sentence, SentenceChild, Token, Word, WordChild,
};

/// IPADIC subcategory of whitespace.
const WHITE_SPACE: &str = "空白";
/// IPADIC subcategory of opening brackets.
const OPEN_BRACKET: &str = "括弧開";
/// IPADIC subcategory of closing brackets.
const CLOSE_BRACKET: &str = "括弧閉";
/// IPADIC subcategory of the sentence-final full stop.
const FULL_STOP: &str = "句点";

/// Segmentation role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    WhiteSpace,
    OpenBracket,
    CloseBracket,
    FullStop,
    Other,
}

impl TokenCategory {
    /// Classifies a token by its first part-of-speech subcategory.
    ///
    /// Any subcategory outside the four known ones is ordinary text.
    pub fn of(token: &Token) -> Self {
        match token.part_of_speech_subcategory1.as_str() {
            WHITE_SPACE => TokenCategory::WhiteSpace,
            OPEN_BRACKET => TokenCategory::OpenBracket,
            CLOSE_BRACKET => TokenCategory::CloseBracket,
            FULL_STOP => TokenCategory::FullStop,
            _ => TokenCategory::Other,
        }
    }
}

/// Segmentation state carried across the tokens of a text.
///
/// The bracket depth is signed and never reset or clamped: a close without
/// an open drives it negative, and an unclosed open carries over into the
/// following lines. Any non-zero depth keeps whitespace inside the current
/// word and stops full stops from ending the sentence.
#[derive(Debug, Default)]
pub struct Segmenter {
    depth: i32,
    word: Word,
    sentence: Sentence,
}

impl Segmenter {
    /// Creates a segmenter at bracket depth 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current bracket depth.
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Starts a line with a fresh word and sentence.
    pub fn begin_line(&mut self) {
        self.word = Word::default();
        self.sentence = Sentence::default();
    }

    /// Consumes one token's leaf.
    ///
    /// `is_last` marks the final token of the line: a full stop there ends
    /// the sentence without opening a new one.
    pub fn step(
        &mut self,
        category: TokenCategory,
        leaf: Leaf,
        is_last: bool,
        paragraph: &mut Paragraph,
    ) {
        match category {
            TokenCategory::WhiteSpace => {
                if self.depth != 0 {
                    self.word.attach(WordChild::WhiteSpace(leaf));
                } else {
                    self.close_word();
                    self.sentence.attach(SentenceChild::WhiteSpace(leaf));
                }
            }
            TokenCategory::OpenBracket => {
                self.depth += 1;
                self.word.attach(WordChild::Punctuation(leaf));
            }
            TokenCategory::CloseBracket => {
                self.depth -= 1;
                self.word.attach(WordChild::Punctuation(leaf));
            }
            TokenCategory::FullStop => {
                self.word.attach(WordChild::Punctuation(leaf));
                if self.depth == 0 {
                    self.close_word();
                    if !is_last {
                        self.close_sentence(paragraph);
                    }
                }
            }
            TokenCategory::Other => {
                self.word.attach(WordChild::Text(leaf));
            }
        }
    }

    /// Ends the line: the open word is closed whatever the bracket depth,
    /// and the open sentence is attached to `paragraph`.
    pub fn finish_line(&mut self, paragraph: &mut Paragraph) {
        self.close_word();
        self.close_sentence(paragraph);
    }

    fn close_word(&mut self) {
        if !self.word.is_empty() {
            let word = mem::take(&mut self.word);
            self.sentence.attach(SentenceChild::Word(word));
        }
    }

    fn close_sentence(&mut self, paragraph: &mut Paragraph) {
        if !self.sentence.is_empty() {
            let sentence = mem::take(&mut self.sentence);
            paragraph.attach(ParagraphChild::Sentence(sentence));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parse_japanese_ast::{Node, NodeType};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Runs `tokens` as one line and returns the paragraph.
    fn run(segmenter: &mut Segmenter, tokens: &[(&str, TokenCategory)]) -> Paragraph {
        let mut paragraph = Paragraph::default();
        segmenter.begin_line();
        let last = tokens.len() - 1;
        for (index, (value, category)) in tokens.iter().enumerate() {
            segmenter.step(*category, Leaf::new(*value), index == last, &mut paragraph);
        }
        segmenter.finish_line(&mut paragraph);
        paragraph
    }

    /// Renders sentences as `|`-separated lists of child texts.
    fn shape(paragraph: &Paragraph) -> Vec<String> {
        paragraph
            .sentences()
            .map(|s| {
                s.children
                    .iter()
                    .map(|c| match c.node_type() {
                        NodeType::Word => c.to_text(),
                        _ => format!("<{}>", c.to_text()),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect()
    }

    use TokenCategory::{
        CloseBracket as Close, FullStop as Stop, OpenBracket as Open, Other as Text,
        WhiteSpace as Space,
    };

    #[rstest]
    #[case("空白", TokenCategory::WhiteSpace)]
    #[case("括弧開", TokenCategory::OpenBracket)]
    #[case("括弧閉", TokenCategory::CloseBracket)]
    #[case("句点", TokenCategory::FullStop)]
    #[case("読点", TokenCategory::Other)]
    #[case("一般", TokenCategory::Other)]
    #[case("*", TokenCategory::Other)]
    fn test_classify(#[case] subcategory: &str, #[case] expected: TokenCategory) {
        let token = Token::from_features("x", &["記号", subcategory]);
        assert_eq!(TokenCategory::of(&token), expected);
    }

    #[test]
    fn test_full_stop_splits_sentences() {
        let mut segmenter = Segmenter::new();
        let paragraph = run(
            &mut segmenter,
            &[("前段", Text), ("。", Stop), ("後段", Text), ("。", Stop)],
        );

        assert_eq!(shape(&paragraph), vec!["前段。", "後段。"]);
    }

    #[test]
    fn test_whitespace_splits_words() {
        let mut segmenter = Segmenter::new();
        let paragraph = run(
            &mut segmenter,
            &[("1", Text), (" ", Space), ("これ", Text), ("です", Text), ("。", Stop)],
        );

        assert_eq!(shape(&paragraph), vec!["1|< >|これです。"]);
    }

    #[test]
    fn test_leading_whitespace_does_not_create_empty_word() {
        let mut segmenter = Segmenter::new();
        let paragraph = run(&mut segmenter, &[(" ", Space), ("文", Text)]);

        assert_eq!(shape(&paragraph), vec!["< >|文"]);
    }

    #[test]
    fn test_full_stop_inside_brackets_does_not_split() {
        let mut segmenter = Segmenter::new();
        let paragraph = run(
            &mut segmenter,
            &[
                ("中段", Text),
                ("（", Open),
                ("後段", Text),
                ("。", Stop),
                ("）", Close),
                ("です", Text),
                ("。", Stop),
            ],
        );

        assert_eq!(shape(&paragraph), vec!["中段（後段。）です。"]);
        assert_eq!(segmenter.depth(), 0);
    }

    #[test]
    fn test_whitespace_inside_brackets_stays_in_word() {
        let mut segmenter = Segmenter::new();
        let paragraph = run(
            &mut segmenter,
            &[("（", Open), ("a", Text), (" ", Space), ("b", Text), ("）", Close)],
        );

        assert_eq!(shape(&paragraph), vec!["（a b）"]);
        let word = paragraph.sentences().next().unwrap().words().next().unwrap();
        assert_eq!(word.children[2], WordChild::WhiteSpace(Leaf::new(" ")));
    }

    #[test]
    fn test_unclosed_bracket_closes_word_at_end_of_line() {
        let mut segmenter = Segmenter::new();
        let paragraph = run(&mut segmenter, &[("（", Open), ("見出し", Text)]);

        assert_eq!(shape(&paragraph), vec!["（見出し"]);
        assert_eq!(segmenter.depth(), 1);
    }

    // Depth is never reset between lines, so an unclosed bracket keeps the
    // next line from splitting on its full stops.
    #[test]
    fn test_depth_leaks_into_next_line() {
        let mut segmenter = Segmenter::new();
        run(&mut segmenter, &[("（", Open), ("a", Text)]);

        let paragraph = run(
            &mut segmenter,
            &[("b", Text), ("。", Stop), ("c", Text), ("。", Stop)],
        );

        assert_eq!(shape(&paragraph), vec!["b。c。"]);
        assert_eq!(segmenter.depth(), 1);
    }

    // A stray close drives depth negative, which also suppresses splitting.
    #[test]
    fn test_negative_depth_is_not_clamped() {
        let mut segmenter = Segmenter::new();
        let paragraph = run(
            &mut segmenter,
            &[("）", Close), ("a", Text), ("。", Stop), (" ", Space), ("b", Text)],
        );

        assert_eq!(segmenter.depth(), -1);
        assert_eq!(shape(&paragraph), vec!["）a。 b"]);
    }

    #[test]
    fn test_full_stop_then_whitespace_at_end() {
        let mut segmenter = Segmenter::new();
        let paragraph = run(&mut segmenter, &[("文", Text), ("。", Stop), (" ", Space)]);

        assert_eq!(shape(&paragraph), vec!["文。", "< >"]);
    }

    #[test]
    fn test_consecutive_full_stops() {
        let mut segmenter = Segmenter::new();
        let paragraph = run(&mut segmenter, &[("文", Text), ("。", Stop), ("。", Stop)]);

        assert_eq!(shape(&paragraph), vec!["文。", "。"]);
    }

    #[test]
    fn test_begin_line_keeps_depth() {
        let mut segmenter = Segmenter::new();
        run(&mut segmenter, &[("（", Open), ("（", Open)]);
        segmenter.begin_line();
        assert_eq!(segmenter.depth(), 2);
    }
}
