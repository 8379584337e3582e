//! Map render nodes to styled terminal lines.

use std::iter;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::math::{MathMode, MathRenderer, Typeset, typeset};
use crate::core::node::RenderNode;

use super::constants::{ACCENT, ACCENT_SECONDARY, BLOCK_MATH_INDENT, BULLET, MUTED};

/// Inputs for turning nodes into lines.
pub struct RenderOptions<'a> {
    pub math: &'a dyn MathRenderer,
    /// Available columns; display math is centered within it (0 = left indent).
    pub width: usize,
}

fn code_style() -> Style {
    Style::default().fg(ACCENT)
}

fn math_style() -> Style {
    Style::default()
        .fg(ACCENT_SECONDARY)
        .add_modifier(Modifier::ITALIC)
}

/// Lay out nodes as lines. Tables and display math get lines of their own.
pub fn render_lines(nodes: &[RenderNode], opts: &RenderOptions<'_>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    // The newline that ends a `$$...$$` line is already implied by the block.
    let mut after_block_math = false;

    for node in nodes {
        match node {
            RenderNode::LineBreak => {
                if !(after_block_math && current.is_empty()) {
                    lines.push(Line::from(std::mem::take(&mut current)));
                }
                after_block_math = false;
                continue;
            }
            RenderNode::BlockMath { expression, source } => {
                flush(&mut lines, &mut current);
                lines.extend(block_math_lines(expression, source, opts));
                after_block_math = true;
                continue;
            }
            RenderNode::Table { headers, rows } => {
                flush(&mut lines, &mut current);
                lines.extend(table_lines(headers, rows));
            }
            RenderNode::ListItem { label, children } => {
                current.push(list_marker(label, node.is_numbered_item()));
                for child in children {
                    current.extend(inline_spans(child, opts));
                }
            }
            other => current.extend(inline_spans(other, opts)),
        }
        after_block_math = false;
    }
    flush(&mut lines, &mut current);
    lines
}

fn flush(lines: &mut Vec<Line<'static>>, current: &mut Vec<Span<'static>>) {
    if !current.is_empty() {
        lines.push(Line::from(std::mem::take(current)));
    }
}

fn list_marker(label: &str, numbered: bool) -> Span<'static> {
    let marker = if numbered {
        format!("{}. ", label)
    } else {
        BULLET.to_string()
    };
    Span::styled(marker, Style::default().fg(ACCENT))
}

/// Spans for one inline node (or inline math).
fn inline_spans(node: &RenderNode, opts: &RenderOptions<'_>) -> Vec<Span<'static>> {
    match node {
        RenderNode::PlainText(t) => vec![Span::raw(t.clone())],
        RenderNode::Bold(t) => vec![Span::styled(
            t.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )],
        RenderNode::Italic(t) => vec![Span::styled(
            t.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )],
        RenderNode::InlineCode(t) => vec![Span::styled(t.clone(), code_style())],
        RenderNode::Link { text, url } => {
            let mut spans = vec![Span::styled(
                text.clone(),
                Style::default()
                    .fg(ACCENT)
                    .add_modifier(Modifier::UNDERLINED),
            )];
            if url != text {
                spans.push(Span::styled(
                    format!(" ({})", url),
                    Style::default().fg(MUTED),
                ));
            }
            spans
        }
        RenderNode::InlineMath { expression, source } => {
            let (text, style) = typeset_styled(expression, source, MathMode::Inline, opts);
            vec![Span::styled(text, style)]
        }
        RenderNode::LineBreak
        | RenderNode::BlockMath { .. }
        | RenderNode::ListItem { .. }
        | RenderNode::Table { .. } => Vec::new(),
    }
}

/// Typeset math; a failed expression comes back as its code-styled source.
fn typeset_styled(
    expression: &str,
    source: &str,
    mode: MathMode,
    opts: &RenderOptions<'_>,
) -> (String, Style) {
    match typeset(opts.math, expression, source, mode) {
        Typeset::Rendered(s) => (s, math_style()),
        Typeset::Fallback(s) => (s, code_style()),
    }
}

fn block_math_lines(expression: &str, source: &str, opts: &RenderOptions<'_>) -> Vec<Line<'static>> {
    let (text, style) = typeset_styled(expression, source, MathMode::Display, opts);
    text.lines()
        .map(|l| {
            let len = l.chars().count();
            let pad = if opts.width == 0 {
                BLOCK_MATH_INDENT
            } else {
                opts.width.saturating_sub(len) / 2
            };
            Line::from(vec![
                Span::raw(" ".repeat(pad)),
                Span::styled(l.to_string(), style),
            ])
        })
        .collect()
}

/// Box-drawn grid. Short rows are padded with blank cells for display only;
/// a table with no cells at all still shows as a single empty column.
fn table_lines(headers: &[String], rows: &[Vec<String>]) -> Vec<Line<'static>> {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(iter::once(headers.len()))
        .max()
        .unwrap_or(0)
        .max(1);

    let mut widths = vec![1; columns];
    for row in iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border = Style::default().fg(ACCENT_SECONDARY);
    let header = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule(('┌', '┬', '┐'), &widths, border));
    lines.push(row_line(headers, &widths, border, header));
    lines.push(rule(('├', '┼', '┤'), &widths, border));
    for row in rows {
        lines.push(row_line(row, &widths, border, Style::default()));
    }
    lines.push(rule(('└', '┴', '┘'), &widths, border));
    lines
}

fn rule((left, mid, right): (char, char, char), widths: &[usize], style: Style) -> Line<'static> {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    let text = format!("{}{}{}", left, segments.join(&mid.to_string()), right);
    Line::from(Span::styled(text, style))
}

fn row_line(cells: &[String], widths: &[usize], border: Style, style: Style) -> Line<'static> {
    let mut spans = vec![Span::styled("│", border)];
    for (i, &width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        spans.push(Span::styled(format!(" {:<width$} ", cell, width = width), style));
        spans.push(Span::styled("│", border));
    }
    Line::from(spans)
}
