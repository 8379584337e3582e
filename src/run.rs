//! Application run modes: logger init, reading the message, printing or viewing it.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use chatmark::core;
use chatmark::core::config::{Config, OutputFormat};
use chatmark::core::node::RenderNode;
use chatmark::tui;
use chatmark::tui::render::{RenderOptions, render_lines};

use crate::cli::Args;

/// Columns taken by the viewer's borders and scrollbar.
const VIEWER_CHROME: usize = 3;

/// Error reading the message to render.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("No input: pass a file, '-' for stdin, or --message")]
    Missing,
}

/// Initialize env_logger. In viewer mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.view {
        if let Some(dir) = core::paths::cache_dir() {
            let _ = fs::create_dir_all(&dir);
        }
        if let Some(path) = core::paths::log_file()
            && let Ok(file) = fs::OpenOptions::new().create(true).append(true).open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Message text from `--message`, a file, or stdin.
fn read_input(args: &Args) -> Result<String, InputError> {
    if let Some(message) = &args.message {
        return Ok(message.clone());
    }
    match args.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| InputError::File {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut stdin = io::stdin();
            if args.input.is_none() && stdin.is_terminal() {
                return Err(InputError::Missing);
            }
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).map_err(InputError::Stdin)?;
            Ok(buf)
        }
    }
}

/// Title shown by the viewer.
fn input_title(args: &Args) -> String {
    match (&args.message, args.input.as_deref()) {
        (Some(_), _) => "message".to_string(),
        (None, Some(path)) if path != Path::new("-") => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        _ => "stdin".to_string(),
    }
}

fn use_color() -> bool {
    io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Parse the message and write it in the configured format (or open the viewer).
pub fn run_render(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(args)?;
    let nodes = core::parse::parse(&text);
    log::info!("parsed {} bytes into {} nodes", text.len(), nodes.len());

    let renderer = config.math.value.renderer();
    let mut opts = RenderOptions {
        math: renderer.as_ref(),
        width: config.width.value,
    };

    if args.view {
        if let Ok((cols, _)) = crossterm::terminal::size() {
            opts.width = (cols as usize).saturating_sub(VIEWER_CHROME);
        }
        tui::run(input_title(args), render_lines(&nodes, &opts))?;
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    match config.format.value {
        OutputFormat::Json => write_json(&mut stdout, &nodes)?,
        OutputFormat::Plain => {
            for line in tui::text::plain_lines(&render_lines(&nodes, &opts), opts.width) {
                writeln!(stdout, "{}", line)?;
            }
        }
        OutputFormat::Styled => {
            tui::print::print_lines(&mut stdout, &render_lines(&nodes, &opts), use_color())?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn write_json<W: Write>(
    out: &mut W,
    nodes: &[RenderNode],
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(&mut *out, nodes)?;
    writeln!(out)?;
    Ok(())
}
