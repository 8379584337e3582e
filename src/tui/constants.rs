//! TUI constants: colors, markers, and timing.

use ratatui::style::Color;

/// Accent green color (#98FB98). Code spans, links, list markers.
pub(crate) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent, soft cyan (#7EC8E3). Math and table borders.
pub(crate) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Link targets and other secondary text.
pub(crate) const MUTED: Color = Color::DarkGray;

/// Marker shown for `-` and `*` list items.
pub(crate) const BULLET: &str = "• ";

/// First characters of rendered table lines (never re-wrapped).
pub(crate) const TABLE_EDGES: &[char] = &['┌', '│', '├', '└'];

/// Left margin for display math when no width is known.
pub(crate) const BLOCK_MATH_INDENT: usize = 4;

/// Event poll timeout in milliseconds (viewer loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys and mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;
