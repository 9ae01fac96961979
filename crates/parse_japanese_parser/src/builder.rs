//! Leaf construction.

use parse_japanese_ast::{Leaf, Token};

use crate::{Cursor, ParserOptions};

/// Builds leaves in source order, consuming the cursor as it goes.
///
/// Parents need no builder: every parent type starts out as its
/// `Default`, empty and without a position until the first attach.
#[derive(Debug)]
pub(crate) struct NodeBuilder<'o> {
    options: &'o ParserOptions,
    cursor: Cursor,
}

impl<'o> NodeBuilder<'o> {
    pub(crate) fn new(options: &'o ParserOptions) -> Self {
        Self {
            options,
            cursor: Cursor::new(),
        }
    }

    /// Enters the physical line at `index` (0-based).
    pub(crate) fn start_line(&mut self, index: usize) {
        self.cursor.start_line(index as u32 + 1);
    }

    /// Builds the leaf for `value`, the source text under `token`.
    pub(crate) fn leaf(&mut self, value: &str, token: &Token) -> Leaf {
        let position = self.cursor.advance(value);
        let mut leaf = Leaf::new(value);

        if self.options.position_tracking {
            leaf.position = Some(position);
        }
        if self.options.attach_token_metadata {
            leaf.data = Some(token.clone());
        }

        leaf
    }

    /// Builds the whitespace leaf for a line terminator.
    pub(crate) fn line_break(&mut self, terminator: &str) -> Leaf {
        self.leaf(terminator, &Token::line_break(terminator))
    }
}
