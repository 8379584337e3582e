//! Message parsing pipeline: raw text to an ordered list of render nodes.
//!
//! Stages run strictly left to right, each a pure function over its input:
//! block math, pipe tables, inline math, lines/lists, inline emphasis.
//! Nothing is cached between calls.

mod blocks;
mod emphasis;
mod inline_math;
mod lines;
mod table;

use crate::core::node::RenderNode;

use blocks::{Block, split_blocks};
use inline_math::{InlineSegment, extract_inline_math};
use table::{TableSegment, extract_tables};

/// Parse a complete message into render nodes. Total for any input;
/// empty input gives an empty list.
pub fn parse(text: &str) -> Vec<RenderNode> {
    let mut nodes = Vec::new();
    for block in split_blocks(text) {
        match block {
            Block::Math { expression, source } => nodes.push(RenderNode::BlockMath {
                expression: expression.to_string(),
                source: source.to_string(),
            }),
            Block::Text(content) => {
                for segment in extract_tables(content) {
                    match segment {
                        TableSegment::Table { headers, rows } => {
                            nodes.push(RenderNode::Table { headers, rows })
                        }
                        TableSegment::Text(run) => push_text_run(&mut nodes, run),
                    }
                }
            }
        }
    }
    nodes
}

/// Inline math first, then lines and emphasis for the prose between.
fn push_text_run(nodes: &mut Vec<RenderNode>, run: &str) {
    for segment in extract_inline_math(run) {
        match segment {
            InlineSegment::Math { expression, source } => nodes.push(RenderNode::InlineMath {
                expression: expression.to_string(),
                source: source.to_string(),
            }),
            InlineSegment::Text(text) => nodes.extend(lines::format_lines(text)),
        }
    }
}

#[cfg(test)]
mod tests;
