//! # chatmark
//!
//! Renders chat messages that mix prose, LaTeX math, pipe tables and light
//! markdown. Prints styled or plain text, dumps the parsed nodes as JSON, or
//! opens a scrollable viewer.

mod cli;
mod run;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use chatmark::core;

use cli::{Args, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    match &args.command {
        Some(Commands::Config) => {
            core::cli::run_config();
            return Ok(());
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            let name = cmd.get_name().to_string();
            cli::generate(*shell, &mut cmd, name, &mut std::io::stdout());
            return Ok(());
        }
        None => {}
    }

    // Print a user-friendly message; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let config = config.with_flags(args.format, args.math, args.width);
    log::debug!("effective config: {:?}", config);

    if let Err(e) = run::run_render(&args, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
