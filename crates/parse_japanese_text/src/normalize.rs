//! Half-width to full-width symbol normalization.
//!
//! IPADIC tags full-width brackets and the ideographic full stop with the
//! bracket and terminal punctuation categories, but not their half-width
//! forms. Lines are normalized before tokenization so both spellings
//! segment the same way.

/// Maps one half-width bracket or Japanese symbol to its full-width form.
///
/// Every other character is returned unchanged.
pub fn to_wide(c: char) -> char {
    match c {
        '(' => '（',
        ')' => '）',
        '[' => '［',
        ']' => '］',
        '{' => '｛',
        '}' => '｝',
        '｢' => '「',
        '｣' => '」',
        '｡' => '。',
        '､' => '、',
        '･' => '・',
        _ => c,
    }
}

/// Converts half-width brackets and Japanese symbols in `text` to full-width.
///
/// The mapping is one codepoint to one codepoint, so positions computed on
/// the normalized text are valid for the original.
pub fn normalize_brackets(text: &str) -> String {
    text.chars().map(to_wide).collect()
}
