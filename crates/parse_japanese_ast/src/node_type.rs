//! Node type tags for NLCST.

use std::fmt;

use serde::Serialize;

/// Node types of a Japanese NLCST tree.
///
/// Serialized as the literal `type` tags of the tree (`"RootNode"`,
/// `"WordNode"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeType {
    /// Whole document.
    #[serde(rename = "RootNode")]
    Root,
    /// One physical line, or one blank line.
    #[serde(rename = "ParagraphNode")]
    Paragraph,
    /// Sentence ending at top-level terminal punctuation or at end of line.
    #[serde(rename = "SentenceNode")]
    Sentence,
    /// Run of tokens between whitespace.
    #[serde(rename = "WordNode")]
    Word,
    /// Ordinary text token.
    #[serde(rename = "TextNode")]
    Text,
    /// Bracket or terminal punctuation.
    #[serde(rename = "PunctuationNode")]
    Punctuation,
    /// Whitespace or line break.
    #[serde(rename = "WhiteSpaceNode")]
    WhiteSpace,
}

impl NodeType {
    /// Returns the literal type tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeType::Root => "RootNode",
            NodeType::Paragraph => "ParagraphNode",
            NodeType::Sentence => "SentenceNode",
            NodeType::Word => "WordNode",
            NodeType::Text => "TextNode",
            NodeType::Punctuation => "PunctuationNode",
            NodeType::WhiteSpace => "WhiteSpaceNode",
        }
    }

    /// Returns true if nodes of this type hold children.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        matches!(
            self,
            NodeType::Root | NodeType::Paragraph | NodeType::Sentence | NodeType::Word
        )
    }

    /// Returns true if nodes of this type hold a value.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        !self.is_parent()
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
