//! Block splitting: separate `$$...$$` display math from surrounding text.

const DELIMITER: &str = "$$";

/// Segment of a message: plain content or a display math expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Block<'a> {
    Text(&'a str),
    /// `expression` is trimmed; `source` is the full `$$...$$` text.
    Math {
        expression: &'a str,
        source: &'a str,
    },
}

/// Split content into text and block math segments, in source order.
///
/// An opening `$$` without a later closing `$$` is left in the text.
pub(crate) fn split_blocks(content: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut rest = content;
    while let Some(open) = rest.find(DELIMITER) {
        let body = &rest[open + DELIMITER.len()..];
        let Some(close) = body.find(DELIMITER) else {
            break;
        };
        if open > 0 {
            blocks.push(Block::Text(&rest[..open]));
        }
        let end = open + DELIMITER.len() * 2 + close;
        blocks.push(Block::Math {
            expression: body[..close].trim(),
            source: &rest[open..end],
        });
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        blocks.push(Block::Text(rest));
    }
    blocks
}
