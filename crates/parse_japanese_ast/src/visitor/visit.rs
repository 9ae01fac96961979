//! Visitor trait for traversing NLCST nodes.
//!
//! Each `visit_*` method has a default implementation that walks children,
//! so an implementation only overrides the node types it cares about.

use std::ops::ControlFlow;

use crate::{Leaf, Paragraph, Root, Sentence, Word};

use super::NodeRef;
use super::walk::walk_children;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue visiting children
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing a tree without modification.
///
/// # Control Flow
///
/// Return `ControlFlow::Continue(())` to continue traversal, or
/// `ControlFlow::Break(())` to stop early. Use the `?` operator
/// for convenient propagation.
pub trait Visitor<'a>: Sized {
    /// Called before visiting any node.
    #[inline]
    fn enter_node(&mut self, _node: NodeRef<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after visiting a node and all its children.
    #[inline]
    fn exit_node(&mut self, _node: NodeRef<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit the Root node.
    fn visit_root(&mut self, node: &'a Root) -> VisitResult {
        walk_children(self, NodeRef::Root(node))
    }

    /// Visit a Paragraph node.
    fn visit_paragraph(&mut self, node: &'a Paragraph) -> VisitResult {
        walk_children(self, NodeRef::Paragraph(node))
    }

    /// Visit a Sentence node.
    fn visit_sentence(&mut self, node: &'a Sentence) -> VisitResult {
        walk_children(self, NodeRef::Sentence(node))
    }

    /// Visit a Word node.
    fn visit_word(&mut self, node: &'a Word) -> VisitResult {
        walk_children(self, NodeRef::Word(node))
    }

    /// Visit a Text leaf.
    fn visit_text(&mut self, _leaf: &'a Leaf) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a Punctuation leaf.
    fn visit_punctuation(&mut self, _leaf: &'a Leaf) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a WhiteSpace leaf, inline or line break.
    fn visit_white_space(&mut self, _leaf: &'a Leaf) -> VisitResult {
        ControlFlow::Continue(())
    }
}
