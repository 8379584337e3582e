//! Inline emphasis: **bold**, *italic*, `code`, [links](url).
//!
//! Classes are tried in priority order and only the first class with any match
//! in a line is applied, to the whole line. Markers of the other classes stay
//! literal: `**bold *and* more**` is one bold node containing `bold *and* more`.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::node::RenderNode;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("valid regex"));
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid regex"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex"));

/// One emphasis class: its pattern and how a match becomes a node.
struct InlineClass {
    pattern: &'static LazyLock<Regex>,
    build: fn(&Captures<'_>) -> RenderNode,
}

/// Priority order: bold, italic, code, link.
static CLASSES: [InlineClass; 4] = [
    InlineClass {
        pattern: &BOLD_RE,
        build: |caps| RenderNode::Bold(caps[1].to_string()),
    },
    InlineClass {
        pattern: &ITALIC_RE,
        build: |caps| RenderNode::Italic(caps[1].to_string()),
    },
    InlineClass {
        pattern: &CODE_RE,
        build: |caps| RenderNode::InlineCode(caps[1].to_string()),
    },
    InlineClass {
        pattern: &LINK_RE,
        build: |caps| RenderNode::Link {
            text: caps[1].to_string(),
            url: caps[2].to_string(),
        },
    },
];

impl InlineClass {
    /// Every non-overlapping match in `line`, as (byte range, node).
    fn spans(&self, line: &str) -> Vec<(Range<usize>, RenderNode)> {
        self.pattern
            .captures_iter(line)
            .filter_map(|caps| caps.get(0).map(|m| (m.range(), (self.build)(&caps))))
            .collect()
    }
}

/// Resolve one line of text into inline nodes.
///
/// An empty line gives no nodes; a line with no match gives one `PlainText`.
pub(crate) fn resolve_inline(line: &str) -> Vec<RenderNode> {
    if line.is_empty() {
        return Vec::new();
    }
    let Some(spans) = CLASSES
        .iter()
        .map(|class| class.spans(line))
        .find(|spans| !spans.is_empty())
    else {
        return vec![RenderNode::PlainText(line.to_string())];
    };

    let mut nodes = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last = 0;
    for (range, node) in spans {
        if range.start > last {
            nodes.push(RenderNode::PlainText(line[last..range.start].to_string()));
        }
        nodes.push(node);
        last = range.end;
    }
    if last < line.len() {
        nodes.push(RenderNode::PlainText(line[last..].to_string()));
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::resolve_inline;
    use crate::core::node::RenderNode;

    fn plain(s: &str) -> RenderNode {
        RenderNode::PlainText(s.to_string())
    }

    #[test]
    fn empty_line() {
        assert!(resolve_inline("").is_empty());
    }

    #[test]
    fn plain_line() {
        assert_eq!(resolve_inline("just words"), vec![plain("just words")]);
    }

    #[test]
    fn bold_with_surrounding_text() {
        assert_eq!(
            resolve_inline("a **b** c **d**"),
            vec![
                plain("a "),
                RenderNode::Bold("b".into()),
                plain(" c "),
                RenderNode::Bold("d".into()),
            ]
        );
    }

    #[test]
    fn bold_wins_over_nested_italic() {
        assert_eq!(
            resolve_inline("**bold *and* text**"),
            vec![RenderNode::Bold("bold *and* text".into())]
        );
    }

    #[test]
    fn bold_suppresses_code_elsewhere_in_line() {
        assert_eq!(
            resolve_inline("**note**: run `make`"),
            vec![RenderNode::Bold("note".into()), plain(": run `make`")]
        );
    }

    #[test]
    fn italic_when_no_bold() {
        assert_eq!(
            resolve_inline("an *important* point"),
            vec![
                plain("an "),
                RenderNode::Italic("important".into()),
                plain(" point")
            ]
        );
    }

    #[test]
    fn code_suppresses_link() {
        assert_eq!(
            resolve_inline("`x` and [a](b)"),
            vec![RenderNode::InlineCode("x".into()), plain(" and [a](b)")]
        );
    }

    #[test]
    fn link() {
        assert_eq!(
            resolve_inline("See [docs](https://example.com) for more."),
            vec![
                plain("See "),
                RenderNode::Link {
                    text: "docs".into(),
                    url: "https://example.com".into()
                },
                plain(" for more."),
            ]
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(resolve_inline("a ** b"), vec![plain("a ** b")]);
        assert_eq!(resolve_inline("tick ` only"), vec![plain("tick ` only")]);
        assert_eq!(resolve_inline("[text] (no link)"), vec![plain("[text] (no link)")]);
    }

    #[test]
    fn whitespace_is_preserved() {
        assert_eq!(
            resolve_inline("  `a`  "),
            vec![plain("  "), RenderNode::InlineCode("a".into()), plain("  ")]
        );
    }
}
