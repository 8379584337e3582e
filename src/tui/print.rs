//! Write styled lines to a terminal as ANSI escape sequences.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Print lines, one per row. Without `color` only the text is written.
pub fn print_lines<W: Write>(out: &mut W, lines: &[Line<'_>], color: bool) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            if color {
                write_styled(out, span)?;
            } else {
                queue!(out, Print(span.content.as_ref()))?;
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

fn write_styled<W: Write>(out: &mut W, span: &Span<'_>) -> io::Result<()> {
    let style = span.style;
    if style == Style::default() {
        return queue!(out, Print(span.content.as_ref()));
    }
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(term_color(fg)))?;
    }
    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
    ] {
        if style.add_modifier.contains(modifier) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    queue!(
        out,
        Print(span.content.as_ref()),
        SetAttribute(Attribute::Reset),
        ResetColor
    )
}

/// Convert ratatui Color to crossterm Color (same mapping as the crossterm backend).
fn term_color(c: Color) -> TermColor {
    match c {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}
