//! Build script: validates the math symbol table at compile time.

use std::collections::HashSet;
use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let table_path: PathBuf = [&manifest_dir, "config", "symbols.json"].iter().collect();
    println!("cargo:rerun-if-changed={}", table_path.display());

    let json = std::fs::read_to_string(&table_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. symbols.json must exist and be valid.",
            table_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    #[serde(deny_unknown_fields)]
    struct SymbolEntry {
        command: String,
        symbol: String,
    }
    let entries: Vec<SymbolEntry> = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "symbols.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });

    let mut seen = HashSet::new();
    for (i, entry) in entries.iter().enumerate() {
        if entry.command.is_empty() || !entry.command.chars().all(|c| c.is_ascii_alphabetic()) {
            panic!(
                "symbols.json entry {}: command '{}' must be non-empty ASCII letters",
                i, entry.command
            );
        }
        if entry.symbol.is_empty() {
            panic!("symbols.json entry '{}': symbol cannot be empty", entry.command);
        }
        if !seen.insert(entry.command.as_str()) {
            panic!("symbols.json: duplicate command '{}'", entry.command);
        }
    }
}
