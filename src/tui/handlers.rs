//! Event handlers for the viewer: keyboard and mouse.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use super::app::Viewer;
use super::constants::{SCROLL_LINES_PAGE, SCROLL_LINES_SMALL};

/// Result of handling an event: continue the loop or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HandleResult {
    Continue,
    Break,
}

pub(crate) fn handle_event(event: &Event, viewer: &mut Viewer) -> HandleResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, viewer),
        Event::Mouse(mouse) => {
            match mouse.kind {
                MouseEventKind::ScrollUp => viewer.scroll_up(SCROLL_LINES_SMALL),
                MouseEventKind::ScrollDown => viewer.scroll_down(SCROLL_LINES_SMALL),
                _ => {}
            }
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

fn handle_key(key: &KeyEvent, viewer: &mut Viewer) -> HandleResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => return HandleResult::Break,
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            return HandleResult::Break;
        }
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => viewer.scroll_up(SCROLL_LINES_SMALL),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => viewer.scroll_down(SCROLL_LINES_SMALL),
        (KeyCode::PageUp, _) => viewer.scroll_up(SCROLL_LINES_PAGE),
        (KeyCode::PageDown, _) | (KeyCode::Char(' '), _) => viewer.scroll_down(SCROLL_LINES_PAGE),
        (KeyCode::Home, _) | (KeyCode::Char('g'), _) => viewer.scroll_to_top(),
        (KeyCode::End, _) | (KeyCode::Char('G'), _) => viewer.scroll_to_bottom(),
        _ => {}
    }
    HandleResult::Continue
}
