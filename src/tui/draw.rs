//! Draw the viewer: bordered message area and scrollbar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use super::app::Viewer;
use super::constants::{ACCENT, ACCENT_SECONDARY, MUTED};
use super::text::wrap_styled_line;

const HINT: &str = " q quit · ↑↓ scroll · PgUp/PgDn page ";

pub(crate) fn draw(f: &mut Frame, viewer: &mut Viewer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(Span::styled(
            format!(" {} ", viewer.title),
            Style::default().fg(ACCENT),
        ))
        .title_bottom(Line::from(Span::styled(HINT, Style::default().fg(MUTED))));
    let inner = block.inner(f.area());
    f.render_widget(block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    let text_area = chunks[0];
    let scrollbar_area = chunks[1];
    let wrap_width = text_area.width as usize;

    let lines: Vec<Line<'static>> = viewer
        .lines
        .iter()
        .flat_map(|l| wrap_styled_line(l, wrap_width))
        .collect();

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    viewer.last_max_scroll = total_lines.saturating_sub(visible);
    let scroll_pos = viewer.scroll_line();

    let visible_lines: Vec<Line> = lines.into_iter().skip(scroll_pos).take(visible).collect();
    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(scroll_pos)
        .content_length(viewer.last_max_scroll + 1);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(ACCENT_SECONDARY))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::text::Line;

    use super::draw;
    use crate::tui::app::Viewer;

    fn lines(n: usize) -> Vec<Line<'static>> {
        (0..n).map(|i| Line::from(format!("line {}", i))).collect()
    }

    #[test]
    fn max_scroll_follows_content() {
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        let mut viewer = Viewer::new("msg".into(), lines(40));
        terminal.draw(|f| draw(f, &mut viewer)).unwrap();
        // 12 rows minus two border rows.
        assert_eq!(viewer.last_max_scroll, 30);
    }

    #[test]
    fn short_content_does_not_scroll() {
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        let mut viewer = Viewer::new("msg".into(), lines(3));
        viewer.scroll_down(5);
        terminal.draw(|f| draw(f, &mut viewer)).unwrap();
        assert_eq!(viewer.last_max_scroll, 0);
        assert_eq!(viewer.scroll_line(), 0);
    }
}
