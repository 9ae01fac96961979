//! Raw token record produced by the morphological analyzer.

use serde::{Deserialize, Serialize};

/// Placeholder IPADIC uses for an empty feature.
pub const EMPTY_FEATURE: &str = "*";

/// A morphological unit as reported by the tokenizer.
///
/// Feature strings are kept verbatim from the dictionary, including the
/// `*` placeholder, so the record can be attached to leaves unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// The surface form of the token (the text itself).
    pub surface_form: String,
    /// Part of speech (e.g., "名詞", "記号").
    pub part_of_speech: String,
    /// First part-of-speech subcategory (e.g., "句点", "括弧開").
    pub part_of_speech_subcategory1: String,
    /// Second part-of-speech subcategory.
    pub part_of_speech_subcategory2: String,
    /// Third part-of-speech subcategory.
    pub part_of_speech_subcategory3: String,
    /// Conjugation type.
    pub conjugated_type: String,
    /// Conjugation form.
    pub conjugated_form: String,
    /// Dictionary form.
    pub basic_form: String,
    /// Reading in katakana.
    pub reading: String,
    /// Pronunciation in katakana.
    pub pronunciation: String,
}

impl Token {
    /// Creates a token from a surface form and dictionary features.
    ///
    /// Features are read positionally in IPADIC order; missing trailing
    /// features become [`EMPTY_FEATURE`].
    pub fn from_features<S: AsRef<str>>(surface_form: impl Into<String>, features: &[S]) -> Self {
        let feature = |index: usize| {
            features
                .get(index)
                .map(|s| s.as_ref().to_string())
                .unwrap_or_else(|| EMPTY_FEATURE.to_string())
        };

        Self {
            surface_form: surface_form.into(),
            part_of_speech: feature(0),
            part_of_speech_subcategory1: feature(1),
            part_of_speech_subcategory2: feature(2),
            part_of_speech_subcategory3: feature(3),
            conjugated_type: feature(4),
            conjugated_form: feature(5),
            basic_form: feature(6),
            reading: feature(7),
            pronunciation: feature(8),
        }
    }

    /// Creates the record attached to line-break leaves.
    pub fn line_break(surface_form: impl Into<String>) -> Self {
        Self::from_features(surface_form, &["記号", "空白"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_features() {
        let token = Token::from_features(
            "です",
            &["助動詞", "*", "*", "*", "特殊・デス", "基本形", "です", "デス", "デス"],
        );

        assert_eq!(token.surface_form, "です");
        assert_eq!(token.part_of_speech, "助動詞");
        assert_eq!(token.part_of_speech_subcategory1, "*");
        assert_eq!(token.conjugated_type, "特殊・デス");
        assert_eq!(token.basic_form, "です");
        assert_eq!(token.pronunciation, "デス");
    }

    #[test]
    fn test_missing_features_are_placeholders() {
        let token = Token::from_features("foo", &["名詞", "固有名詞"]);

        assert_eq!(token.part_of_speech_subcategory1, "固有名詞");
        assert_eq!(token.part_of_speech_subcategory2, EMPTY_FEATURE);
        assert_eq!(token.reading, EMPTY_FEATURE);
    }

    #[test]
    fn test_line_break() {
        let token = Token::line_break("\n");
        assert_eq!(token.surface_form, "\n");
        assert_eq!(token.part_of_speech, "記号");
        assert_eq!(token.part_of_speech_subcategory1, "空白");
    }

    #[test]
    fn test_serialization_keys() {
        let token = Token::line_break("\n");
        let json = serde_json::to_value(&token).unwrap();

        assert_eq!(json["surfaceForm"], "\n");
        assert_eq!(json["partOfSpeech"], "記号");
        assert_eq!(json["partOfSpeechSubcategory1"], "空白");
        assert_eq!(json["basicForm"], "*");
    }
}
