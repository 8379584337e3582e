//! Parse chat messages into typed render nodes and present them in a terminal.

pub mod core;
pub mod tui;
