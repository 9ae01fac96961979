//! Human-readable outline of a tree.

use std::fmt::Write;
use std::ops::ControlFlow;

use crate::Node;
use crate::visitor::{NodeRef, VisitResult, Visitor, walk_node};

struct Inspector {
    out: String,
    depth: usize,
}

impl<'a> Visitor<'a> for Inspector {
    fn enter_node(&mut self, node: NodeRef<'a>) -> VisitResult {
        let indent = "  ".repeat(self.depth);
        let _ = write!(self.out, "{indent}{}", node.node_type());

        match node.value() {
            Some(value) => {
                let _ = write!(self.out, " {value:?}");
            }
            None => {
                let _ = write!(self.out, "[{}]", node.child_count());
            }
        }

        if let Some(position) = node.position() {
            let _ = write!(
                self.out,
                " ({}:{}-{}:{}, {}-{})",
                position.start.line,
                position.start.column,
                position.end.line,
                position.end.column,
                position.start.offset,
                position.end.offset
            );
        }

        self.out.push('\n');
        self.depth += 1;
        ControlFlow::Continue(())
    }

    fn exit_node(&mut self, _node: NodeRef<'a>) -> VisitResult {
        self.depth -= 1;
        ControlFlow::Continue(())
    }
}

/// Renders the subtree rooted at `node` as an indented outline.
///
/// Parents show their child count, leaves their quoted value, and both
/// their `line:column` span followed by codepoint offsets when tracked.
///
/// ```text
/// RootNode[1] (1:1-1:4, 0-3)
///   ParagraphNode[2] (1:1-1:4, 0-3)
///     SentenceNode[1] (1:1-1:3, 0-2)
///       WordNode[2] (1:1-1:3, 0-2)
///         TextNode "文" (1:1-1:2, 0-1)
///         PunctuationNode "。" (1:2-1:3, 1-2)
///     WhiteSpaceNode "\n" (1:3-1:4, 2-3)
/// ```
pub fn inspect<'a>(node: impl Into<NodeRef<'a>>) -> String {
    let mut inspector = Inspector {
        out: String::new(),
        depth: 0,
    };
    let _ = walk_node(&mut inspector, node.into());
    inspector.out
}
