//! Borrowed, type-tagged view of a tree node.

use crate::{
    Leaf, Node, NodeType, Paragraph, ParagraphChild, Position, Root, Sentence, SentenceChild,
    Word, WordChild,
};

/// A reference to any node of the tree.
///
/// Leaves carry their type in the variant, mirroring the child enums.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Root(&'a Root),
    Paragraph(&'a Paragraph),
    Sentence(&'a Sentence),
    Word(&'a Word),
    Text(&'a Leaf),
    Punctuation(&'a Leaf),
    WhiteSpace(&'a Leaf),
}

impl<'a> NodeRef<'a> {
    /// Returns the leaf behind a leaf reference.
    pub fn leaf(&self) -> Option<&'a Leaf> {
        match *self {
            NodeRef::Text(leaf) | NodeRef::Punctuation(leaf) | NodeRef::WhiteSpace(leaf) => {
                Some(leaf)
            }
            _ => None,
        }
    }
}

impl Node for NodeRef<'_> {
    fn node_type(&self) -> NodeType {
        match self {
            NodeRef::Root(_) => NodeType::Root,
            NodeRef::Paragraph(_) => NodeType::Paragraph,
            NodeRef::Sentence(_) => NodeType::Sentence,
            NodeRef::Word(_) => NodeType::Word,
            NodeRef::Text(_) => NodeType::Text,
            NodeRef::Punctuation(_) => NodeType::Punctuation,
            NodeRef::WhiteSpace(_) => NodeType::WhiteSpace,
        }
    }

    fn position(&self) -> Option<&Position> {
        match self {
            NodeRef::Root(node) => node.position.as_ref(),
            NodeRef::Paragraph(node) => node.position.as_ref(),
            NodeRef::Sentence(node) => node.position.as_ref(),
            NodeRef::Word(node) => node.position.as_ref(),
            NodeRef::Text(leaf) | NodeRef::Punctuation(leaf) | NodeRef::WhiteSpace(leaf) => {
                leaf.position.as_ref()
            }
        }
    }

    fn value(&self) -> Option<&str> {
        self.leaf().map(|leaf| leaf.value.as_str())
    }

    fn child_count(&self) -> usize {
        match self {
            NodeRef::Root(node) => node.child_count(),
            NodeRef::Paragraph(node) => node.child_count(),
            NodeRef::Sentence(node) => node.child_count(),
            NodeRef::Word(node) => node.child_count(),
            _ => 0,
        }
    }

    fn write_text(&self, out: &mut String) {
        match self {
            NodeRef::Root(node) => node.write_text(out),
            NodeRef::Paragraph(node) => node.write_text(out),
            NodeRef::Sentence(node) => node.write_text(out),
            NodeRef::Word(node) => node.write_text(out),
            NodeRef::Text(leaf) | NodeRef::Punctuation(leaf) | NodeRef::WhiteSpace(leaf) => {
                out.push_str(&leaf.value)
            }
        }
    }
}

impl<'a> From<&'a Root> for NodeRef<'a> {
    fn from(node: &'a Root) -> Self {
        NodeRef::Root(node)
    }
}

impl<'a> From<&'a Paragraph> for NodeRef<'a> {
    fn from(node: &'a Paragraph) -> Self {
        NodeRef::Paragraph(node)
    }
}

impl<'a> From<&'a Sentence> for NodeRef<'a> {
    fn from(node: &'a Sentence) -> Self {
        NodeRef::Sentence(node)
    }
}

impl<'a> From<&'a Word> for NodeRef<'a> {
    fn from(node: &'a Word) -> Self {
        NodeRef::Word(node)
    }
}

impl<'a> From<&'a ParagraphChild> for NodeRef<'a> {
    fn from(child: &'a ParagraphChild) -> Self {
        match child {
            ParagraphChild::Sentence(node) => NodeRef::Sentence(node),
            ParagraphChild::WhiteSpace(leaf) => NodeRef::WhiteSpace(leaf),
        }
    }
}

impl<'a> From<&'a SentenceChild> for NodeRef<'a> {
    fn from(child: &'a SentenceChild) -> Self {
        match child {
            SentenceChild::Word(node) => NodeRef::Word(node),
            SentenceChild::WhiteSpace(leaf) => NodeRef::WhiteSpace(leaf),
        }
    }
}

impl<'a> From<&'a WordChild> for NodeRef<'a> {
    fn from(child: &'a WordChild) -> Self {
        match child {
            WordChild::Text(leaf) => NodeRef::Text(leaf),
            WordChild::Punctuation(leaf) => NodeRef::Punctuation(leaf),
            WordChild::WhiteSpace(leaf) => NodeRef::WhiteSpace(leaf),
        }
    }
}
