//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use chatmark::core::config::{MathStyle, OutputFormat};

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  chatmark reply.md                   Render a saved message to the terminal
  chatmark -m 'Area is $\\pi r^2$'     Render a message given on the command line
  cat reply.md | chatmark -f plain    Read from stdin, print unstyled text
  chatmark reply.md -f json           Dump the parsed render nodes
  chatmark reply.md --view            Open the scrollable viewer
  chatmark config                     Show config path and effective settings
  chatmark completions bash           Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Render chat messages with math, tables and light markdown in the terminal",
    after_help = AFTER_HELP,
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Message file to render ('-' or omitted reads stdin)
    #[arg(value_name = "INPUT", conflicts_with = "message")]
    pub input: Option<PathBuf>,

    /// Render this text instead of reading INPUT
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Wrap width for plain output and display math (0 disables wrapping)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Math renderer
    #[arg(long, value_enum)]
    pub math: Option<MathStyle>,

    /// Open the full-screen viewer instead of printing
    #[arg(long)]
    pub view: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show config path, effective settings and where each came from
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
