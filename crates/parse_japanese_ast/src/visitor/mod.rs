//! Visitor pattern for NLCST traversal.
//!
//! This module provides a trait and functions for traversing a parsed tree.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`NodeRef`] - Borrowed view of any node, used for dispatch
//! - [`walk_node`] - Dispatch function for type-specific visitors
//! - [`walk_children`] - Traverse all children of a node
//! - [`count`] - Count the nodes of one type in a subtree
//!
//! # Example
//!
//! ```rust
//! use parse_japanese_ast::{Leaf, Paragraph, ParagraphChild, ParentNode, Root, Sentence,
//!     SentenceChild, Word, WordChild};
//! use parse_japanese_ast::visitor::{NodeRef, Visitor, VisitResult, walk_node};
//! use std::ops::ControlFlow;
//!
//! struct TextCollector {
//!     texts: Vec<String>,
//! }
//!
//! impl<'a> Visitor<'a> for TextCollector {
//!     fn visit_text(&mut self, leaf: &'a Leaf) -> VisitResult {
//!         self.texts.push(leaf.value.clone());
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let mut word = Word::default();
//! word.attach(WordChild::Text(Leaf::new("文")));
//! let mut sentence = Sentence::default();
//! sentence.attach(SentenceChild::Word(word));
//! let mut paragraph = Paragraph::default();
//! paragraph.attach(ParagraphChild::Sentence(sentence));
//! let mut root = Root::default();
//! root.attach(paragraph);
//!
//! let mut collector = TextCollector { texts: Vec::new() };
//! let _ = walk_node(&mut collector, NodeRef::from(&root));
//! assert_eq!(collector.texts, vec!["文"]);
//! ```

mod node_ref;
mod visit;
mod walk;

pub use node_ref::NodeRef;
pub use visit::{VisitResult, Visitor};
pub use walk::{count, walk_children, walk_node};
