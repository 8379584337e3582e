//! LaTeX command to Unicode symbol table.
//!
//! Loaded from `config/symbols.json` (embedded at compile time, validated by build.rs).

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SymbolEntry {
    command: String,
    symbol: String,
}

static SYMBOLS: OnceLock<HashMap<String, String>> = OnceLock::new();

fn load_symbols() -> HashMap<String, String> {
    let json = include_str!("../../../config/symbols.json");
    match serde_json::from_str::<Vec<SymbolEntry>>(json) {
        Ok(entries) => entries
            .into_iter()
            .map(|e| (e.command, e.symbol))
            .collect(),
        Err(e) => {
            log::warn!("symbols.json could not be parsed: {}", e);
            HashMap::new()
        }
    }
}

/// Symbol for a command name without the backslash, e.g. "alpha" -> "α".
pub(super) fn lookup(command: &str) -> Option<&'static str> {
    SYMBOLS
        .get_or_init(load_symbols)
        .get(command)
        .map(String::as_str)
}
