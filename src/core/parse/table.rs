//! Pipe table extraction: lift `a | b` / `---|---` blocks out of plain text.

/// Segment of plain content: untouched text or a recognized table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TableSegment<'a> {
    Text(&'a str),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Split content into text and table segments, in source order.
///
/// A table is a line containing `|`, immediately followed by a separator line,
/// then any number of further `|` lines. The table owns its lines including the
/// last line terminator; all other text is forwarded as-is.
pub(crate) fn extract_tables(content: &str) -> Vec<TableSegment<'_>> {
    let lines = line_spans(content);
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < lines.len() {
        let (start, line) = lines[i];
        if !line.contains('|') {
            i += 1;
            continue;
        }
        if !lines.get(i + 1).is_some_and(|(_, next)| is_separator(next)) {
            log::debug!("pipe line without separator kept as text: {:?}", line.trim_end());
            i += 1;
            continue;
        }

        let mut end = i + 2;
        while end < lines.len() && lines[end].1.contains('|') {
            end += 1;
        }

        if start > text_start {
            segments.push(TableSegment::Text(&content[text_start..start]));
        }
        let headers = split_cells(line);
        let rows: Vec<Vec<String>> = lines[i + 2..end]
            .iter()
            .map(|(_, row)| split_cells(row))
            .collect();
        log::debug!("table: {} headers, {} rows", headers.len(), rows.len());
        segments.push(TableSegment::Table { headers, rows });

        text_start = lines.get(end).map_or(content.len(), |(offset, _)| *offset);
        i = end;
    }

    if text_start < content.len() {
        segments.push(TableSegment::Text(&content[text_start..]));
    }
    segments
}

/// Lines with their byte offsets, each including its `\n` terminator.
fn line_spans(content: &str) -> Vec<(usize, &str)> {
    let mut offset = 0;
    content
        .split_inclusive('\n')
        .map(|line| {
            let start = offset;
            offset += line.len();
            (start, line)
        })
        .collect()
}

/// Separator row: only `|`, `-`, `:` and whitespace, with at least one `-`.
fn is_separator(line: &str) -> bool {
    let t = line.trim();
    t.contains('-')
        && t
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Split a row on `|` and drop every cell that is empty after trimming.
/// This also drops interior empty cells (`a || b` gives two cells).
fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}
