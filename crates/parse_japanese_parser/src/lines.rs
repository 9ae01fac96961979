//! Physical line splitting.

/// One physical line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 0-based line index.
    pub index: usize,
    /// Line text without its terminator.
    pub content: &'a str,
    /// `"\n"` or `"\r\n"`; `None` only for the final line.
    pub terminator: Option<&'a str>,
}

impl Line<'_> {
    /// Returns true for the text after the last line break.
    pub fn is_last(&self) -> bool {
        self.terminator.is_none()
    }
}

/// Splits `text` on `\n` and `\r\n`.
///
/// The result always has one more element than there are line breaks, so
/// text ending in a line break yields an empty final line.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(newline) = rest.find('\n') {
        let break_start = if rest[..newline].ends_with('\r') {
            newline - 1
        } else {
            newline
        };

        lines.push(Line {
            index: lines.len(),
            content: &rest[..break_start],
            terminator: Some(&rest[break_start..=newline]),
        });
        rest = &rest[newline + 1..];
    }

    lines.push(Line {
        index: lines.len(),
        content: rest,
        terminator: None,
    });

    lines
}
