//! Line and list formatting for a run of prose.

use crate::core::node::RenderNode;

use super::emphasis::resolve_inline;

/// Split a text run on newlines and classify each line.
/// A `LineBreak` separates consecutive lines; none follows the last line.
pub(crate) fn format_lines(text: &str) -> Vec<RenderNode> {
    let mut nodes = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            nodes.push(RenderNode::LineBreak);
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        nodes.extend(format_line(line));
    }
    nodes
}

fn format_line(line: &str) -> Vec<RenderNode> {
    let prefix = parse_bullet_prefix(line).or_else(|| parse_numbered_list_prefix(line));
    match prefix {
        Some((label, rest)) => vec![RenderNode::ListItem {
            label: label.to_string(),
            children: resolve_inline(rest),
        }],
        None => resolve_inline(line),
    }
}

/// Parse "- " or "* " at the start of the line. Returns (marker, rest).
fn parse_bullet_prefix(s: &str) -> Option<(&str, &str)> {
    let marker = s.get(..1).filter(|m| *m == "-" || *m == "*")?;
    let rest = &s[1..];
    if rest.starts_with(char::is_whitespace) {
        Some((marker, rest.trim_start()))
    } else {
        None
    }
}

/// Parse "N. " at the start of the line. Returns (digits, rest).
fn parse_numbered_list_prefix(s: &str) -> Option<(&str, &str)> {
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let num = &s[..digits];
    let after_dot = s[digits..].strip_prefix('.')?;
    if after_dot.starts_with(char::is_whitespace) {
        Some((num, after_dot.trim_start()))
    } else {
        None
    }
}
