//! Walk functions for tree traversal.

use std::ops::ControlFlow;

use crate::{Node, NodeType};

use super::NodeRef;
use super::visit::{VisitResult, Visitor};

/// Walks a node by dispatching to the appropriate type-specific visitor method.
///
/// This function:
/// 1. Calls `enter_node` on the visitor
/// 2. Dispatches to the appropriate `visit_*` method based on node type
/// 3. Calls `exit_node` on the visitor
pub fn walk_node<'a, V>(visitor: &mut V, node: NodeRef<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    visitor.enter_node(node)?;

    match node {
        NodeRef::Root(root) => visitor.visit_root(root),
        NodeRef::Paragraph(paragraph) => visitor.visit_paragraph(paragraph),
        NodeRef::Sentence(sentence) => visitor.visit_sentence(sentence),
        NodeRef::Word(word) => visitor.visit_word(word),
        NodeRef::Text(leaf) => visitor.visit_text(leaf),
        NodeRef::Punctuation(leaf) => visitor.visit_punctuation(leaf),
        NodeRef::WhiteSpace(leaf) => visitor.visit_white_space(leaf),
    }?;

    visitor.exit_node(node)
}

/// Walks all children of a node in reading order.
///
/// Leaves have no children; walking them is a no-op.
pub fn walk_children<'a, V>(visitor: &mut V, node: NodeRef<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    match node {
        NodeRef::Root(root) => {
            for child in &root.children {
                walk_node(visitor, child.into())?;
            }
        }
        NodeRef::Paragraph(paragraph) => {
            for child in &paragraph.children {
                walk_node(visitor, child.into())?;
            }
        }
        NodeRef::Sentence(sentence) => {
            for child in &sentence.children {
                walk_node(visitor, child.into())?;
            }
        }
        NodeRef::Word(word) => {
            for child in &word.children {
                walk_node(visitor, child.into())?;
            }
        }
        NodeRef::Text(_) | NodeRef::Punctuation(_) | NodeRef::WhiteSpace(_) => {}
    }
    ControlFlow::Continue(())
}

struct TypeCounter {
    node_type: NodeType,
    count: usize,
}

impl<'a> Visitor<'a> for TypeCounter {
    fn enter_node(&mut self, node: NodeRef<'a>) -> VisitResult {
        if node.node_type() == self.node_type {
            self.count += 1;
        }
        ControlFlow::Continue(())
    }
}

/// Counts the nodes of `node_type` in the subtree rooted at `node`,
/// including `node` itself.
pub fn count<'a>(node: impl Into<NodeRef<'a>>, node_type: NodeType) -> usize {
    let mut counter = TypeCounter {
        node_type,
        count: 0,
    };
    let _ = walk_node(&mut counter, node.into());
    counter.count
}
