//! Terminal presentation: styled lines, plain/ANSI printing, and a scrollable viewer.

mod app;
mod constants;
mod draw;
mod handlers;
pub mod print;
pub mod render;
pub mod text;

use std::io;
use std::time::Duration;

use crossterm::event;
use crossterm::execute;
use ratatui::text::Line;

use app::Viewer;
use handlers::HandleResult;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Show rendered lines in a full-screen pager until the user quits.
pub fn run(title: String, lines: Vec<Line<'static>>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    execute!(stdout, crossterm::event::EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut viewer = Viewer::new(title, lines);
    log::info!("viewer opened with {} lines", viewer.lines.len());

    loop {
        terminal.draw(|f| draw::draw(f, &mut viewer))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            let ev = event::read()?;
            if handlers::handle_event(&ev, &mut viewer) == HandleResult::Break {
                break;
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
