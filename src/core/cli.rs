//! CLI-only commands that print information and exit.

use crate::core::app;
use crate::core::config;
use crate::core::paths;

/// Run the `config` command: display paths and effective settings with their source.
pub fn run_config() {
    let config_file = paths::config_file();
    let file_status = match &config_file {
        Some(p) if p.exists() => "found",
        Some(_) => "not found",
        None => "unavailable",
    };
    let config_file = config_file
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let log_file = paths::log_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());

    let config = match config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{} {}", app::NAME, app::VERSION);
    println!("Config file:  {} ({})", config_file, file_status);
    println!("Viewer log:   {}", log_file);
    println!(
        "Format:       {:?} ({})",
        config.format.value, config.format.source
    );
    println!("Math:         {:?} ({})", config.math.value, config.math.source);
    println!(
        "Width:        {} ({})",
        config.width.value, config.width.source
    );
}
