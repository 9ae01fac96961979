//! # parse_japanese_ast
//!
//! NLCST definitions for the Japanese natural language parser.
//!
//! A parsed document is a tree of `Root → Paragraph → Sentence → Word →
//! leaf` nodes. Every node may carry a [`Position`] measured in Unicode
//! codepoints, and leaves may carry the raw [`Token`] the morphological
//! analyzer produced for them.
//!
//! ## Architecture
//!
//! - Parent nodes own their children; the allowed children of each parent
//!   are a closed enum, so illegal nesting does not compile
//! - [`ParentNode::attach`] keeps every parent's position equal to the
//!   span of its first and last children
//! - Trees serialize to the NLCST JSON shape with `serde`
//!
//! ## Example
//!
//! ```rust
//! use parse_japanese_ast::{Leaf, Node, ParentNode, Word, WordChild};
//!
//! let mut word = Word::default();
//! word.attach(WordChild::Text(Leaf::new("日本語")));
//! word.attach(WordChild::Punctuation(Leaf::new("。")));
//!
//! assert_eq!(word.to_text(), "日本語。");
//! ```

mod inspect;
mod node;
mod node_type;
mod span;
mod token;
pub mod visitor;

pub use inspect::inspect;
pub use node::{
    Leaf, Node, Paragraph, ParagraphChild, ParentNode, Root, Sentence, SentenceChild, Word,
    WordChild,
};
pub use node_type::NodeType;
pub use span::{Point, Position};
pub use token::{EMPTY_FEATURE, Token};

// Re-export commonly used visitor items for convenience
pub use visitor::{NodeRef, VisitResult, Visitor};
