use std::sync::atomic::{AtomicUsize, Ordering};

use parse_japanese_text::{TextError, Token, Tokenize};

/// Dictionary-free tokenizer for tests.
///
/// Brackets and full stops become single-character tokens tagged the way
/// IPADIC tags them; runs of whitespace and runs of other characters
/// become one token each.
#[derive(Debug, Default)]
pub struct CharTokenizer {
    calls: AtomicUsize,
}

impl CharTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `tokenize` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn subcategory(c: char) -> &'static str {
    match c {
        '（' | '「' | '［' | '｛' => "括弧開",
        '）' | '」' | '］' | '｝' => "括弧閉",
        '。' => "句点",
        c if c.is_whitespace() => "空白",
        _ => "一般",
    }
}

impl Tokenize for CharTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TextError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut tokens: Vec<Token> = Vec::new();
        for c in text.chars() {
            let category = subcategory(c);
            let groups = matches!(category, "空白" | "一般");

            match tokens.last_mut() {
                Some(last) if groups && last.part_of_speech_subcategory1 == category => {
                    last.surface_form.push(c);
                }
                _ => {
                    let pos = if category == "一般" { "名詞" } else { "記号" };
                    tokens.push(Token::from_features(c.to_string(), &[pos, category]));
                }
            }
        }
        Ok(tokens)
    }
}

/// Tokenizer that returns nothing for every line.
pub struct EmptyTokenizer;

impl Tokenize for EmptyTokenizer {
    fn tokenize(&self, _text: &str) -> Result<Vec<Token>, TextError> {
        Ok(Vec::new())
    }
}

/// Tokenizer that fails on every line.
pub struct FailingTokenizer;

impl Tokenize for FailingTokenizer {
    fn tokenize(&self, _text: &str) -> Result<Vec<Token>, TextError> {
        Err(TextError::Tokenizer("dictionary unavailable".to_string()))
    }
}
