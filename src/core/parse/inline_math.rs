//! Inline math extraction: `$...$` spans on a single line.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Non-empty content with no `$` and no newline between single dollars.
static INLINE_MATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([^$\n]+)\$").expect("valid regex"));

/// Segment of a text run: prose or an inline math expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InlineSegment<'a> {
    Text(&'a str),
    /// `expression` is trimmed; `source` is the full `$...$` text.
    Math {
        expression: &'a str,
        source: &'a str,
    },
}

/// Byte ranges of every `$...$` match, with the trimmed expression.
fn math_spans(text: &str) -> Vec<(Range<usize>, &str)> {
    INLINE_MATH_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let expr = caps.get(1)?;
            Some((whole.range(), expr.as_str().trim()))
        })
        .collect()
}

/// Split a text run into prose and inline math, in source order.
pub(crate) fn extract_inline_math(text: &str) -> Vec<InlineSegment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for (range, expr) in math_spans(text) {
        if range.start > last {
            segments.push(InlineSegment::Text(&text[last..range.start]));
        }
        segments.push(InlineSegment::Math {
            expression: expr,
            source: &text[range.clone()],
        });
        last = range.end;
    }
    if last < text.len() {
        segments.push(InlineSegment::Text(&text[last..]));
    }
    segments
}
