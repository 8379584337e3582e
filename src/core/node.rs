//! Render nodes: the typed output of the message parser.

use serde::Serialize;

/// One typed unit of parsed message content.
///
/// Serialized adjacently tagged, e.g. `{"type":"bold","value":"x"}` or
/// `{"type":"line_break"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RenderNode {
    PlainText(String),
    Bold(String),
    Italic(String),
    InlineCode(String),
    Link {
        text: String,
        url: String,
    },
    /// Display math. `expression` is trimmed; `source` is the delimited
    /// `$$...$$` text as written, shown when typesetting fails.
    BlockMath {
        expression: String,
        source: String,
    },
    /// Inline math from `$...$`, same fields as `BlockMath`.
    InlineMath {
        expression: String,
        source: String,
    },
    LineBreak,
    /// A bullet (`-`, `*`) or numbered list line. `label` is the literal marker
    /// or digits from the source; `children` are inline nodes only.
    ListItem {
        label: String,
        children: Vec<RenderNode>,
    },
    /// Pipe table. Rows may be ragged relative to `headers`.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl RenderNode {
    /// True for nodes that can appear inside a line (and inside a list item).
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            RenderNode::PlainText(_)
                | RenderNode::Bold(_)
                | RenderNode::Italic(_)
                | RenderNode::InlineCode(_)
                | RenderNode::Link { .. }
        )
    }

    /// Leaf text of the node: the styled text, link text, or math expression.
    pub fn text(&self) -> Option<&str> {
        match self {
            RenderNode::PlainText(s)
            | RenderNode::Bold(s)
            | RenderNode::Italic(s)
            | RenderNode::InlineCode(s)
            | RenderNode::BlockMath { expression: s, .. }
            | RenderNode::InlineMath { expression: s, .. } => Some(s),
            RenderNode::Link { text, .. } => Some(text),
            RenderNode::LineBreak | RenderNode::ListItem { .. } | RenderNode::Table { .. } => None,
        }
    }

    /// True for a list item whose label is a numeral ("1", "42").
    pub fn is_numbered_item(&self) -> bool {
        match self {
            RenderNode::ListItem { label, .. } => {
                !label.is_empty() && label.chars().all(|c| c.is_ascii_digit())
            }
            _ => false,
        }
    }
}
