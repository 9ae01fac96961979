use lindera::dictionary::load_dictionary;
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use lindera::tokenizer::Tokenizer as LinderaTokenizer;
use parse_japanese_ast::Token;
use tracing::debug;

/// Dictionary URI of the IPADIC dictionary embedded in the binary.
pub const DEFAULT_DICTIONARY: &str = "embedded://ipadic";

/// Feature lindera reports for words missing from the dictionary.
const UNKNOWN_FEATURE: &str = "UNK";

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TextError {
    #[error("Failed to load dictionary '{uri}': {message}")]
    #[diagnostic(help("pass a dictionary directory or an embedded:// URI"))]
    Dictionary { uri: String, message: String },

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),
}

/// Splits text into morphological units.
///
/// Implementations must be read-only once built: one tokenizer serves
/// every parse of the parser that owns it.
pub trait Tokenize {
    /// Tokenizes one line of text, in order, without dropping characters.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TextError>;
}

/// Tokenizer for Japanese text using Lindera.
pub struct Tokenizer {
    inner: LinderaTokenizer,
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer").finish_non_exhaustive()
    }
}

impl Tokenizer {
    /// Creates a new tokenizer with the embedded IPADIC dictionary.
    pub fn new() -> Result<Self, TextError> {
        Self::from_dictionary(DEFAULT_DICTIONARY)
    }

    /// Creates a tokenizer from a dictionary directory or `embedded://` URI.
    pub fn from_dictionary(uri: &str) -> Result<Self, TextError> {
        debug!("Loading dictionary from {}", uri);

        let dictionary = load_dictionary(uri).map_err(|e| TextError::Dictionary {
            uri: uri.to_string(),
            message: e.to_string(),
        })?;

        let segmenter = Segmenter::new(
            Mode::Normal,
            dictionary,
            None, // user dictionary
        );

        let inner = LinderaTokenizer::new(segmenter);

        Ok(Self { inner })
    }
}

impl Tokenize for Tokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TextError> {
        let lindera_tokens = self
            .inner
            .tokenize(text)
            .map_err(|e| TextError::Tokenizer(e.to_string()))?;

        let mut tokens = Vec::with_capacity(lindera_tokens.len());

        for mut lindera_token in lindera_tokens {
            let surface = lindera_token.surface.as_ref().to_string();
            let details = lindera_token.details();

            let token = if details.len() < 2 || details[0] == UNKNOWN_FEATURE {
                Token::from_features(surface.as_str(), unknown_features(&surface))
            } else {
                Token::from_features(surface.as_str(), details.as_slice())
            };

            tokens.push(token);
        }

        Ok(tokens)
    }
}

/// Features for a word the dictionary does not know, chosen by character
/// class the way IPADIC's unknown-word definitions do.
fn unknown_features(surface: &str) -> &'static [&'static str] {
    if !surface.is_empty() && surface.chars().all(char::is_whitespace) {
        &["記号", "空白"]
    } else if !surface.is_empty() && surface.chars().all(|c| c.is_numeric()) {
        &["名詞", "数"]
    } else {
        &["名詞", "一般"]
    }
}
