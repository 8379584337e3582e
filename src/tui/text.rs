//! Text utilities: flattening styled lines and wrapping them for display.

use ratatui::text::{Line, Span};

use super::constants::TABLE_EDGES;

/// Concatenated content of a line's spans.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// Split text into lines of max width (columns). Uses textwrap for correct UTF-8 handling.
fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    textwrap::wrap(s, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Split a message into display lines respecting message newlines, then wrap to `width`.
pub(crate) fn wrap_message(msg: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in msg.split('\n') {
        if line.is_empty() {
            out.push(String::new());
        } else {
            out.extend(wrap_text(line, width));
        }
    }
    out
}

/// Unstyled text of each line, word-wrapped to `width` (0 = no wrapping).
/// Table grid lines are kept intact so columns stay aligned.
pub fn plain_lines(lines: &[Line<'_>], width: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        let text = line_text(line);
        if text.starts_with(TABLE_EDGES) {
            out.push(text);
        } else {
            out.extend(wrap_message(&text, width));
        }
    }
    out
}

/// Hard-wrap a styled line at `width` characters, keeping each span's style.
pub(crate) fn wrap_styled_line(line: &Line<'_>, width: usize) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in &line.spans {
        let mut chunk = String::new();
        for c in span.content.chars() {
            if width > 0 && used == width {
                if !chunk.is_empty() {
                    current.push(Span::styled(std::mem::take(&mut chunk), span.style));
                }
                out.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            }
            chunk.push(c);
            used += 1;
        }
        if !chunk.is_empty() {
            current.push(Span::styled(chunk, span.style));
        }
    }
    if !current.is_empty() || out.is_empty() {
        out.push(Line::from(current));
    }
    out
}
