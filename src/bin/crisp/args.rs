//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

const MESSAGE_LONG_ABOUT: &str = "Lint a Git commit message.

Use this command to lint Git commit messages according to the Conventional
Commit v1.0.0 specifications. To learn more about the specifications, refer to
its documentation here - https://www.conventionalcommits.org.

Without a MESSAGE, --file or --stdin, the message is read from piped STDIN and
then from .git/COMMIT_EDITMSG in the current directory.";

/// Crisp - a linter for Conventional Commit messages.
#[derive(Parser, Debug)]
#[command(name = "crisp")]
#[command(version)]
#[command(about = "Lint Git commit messages", long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub(crate) debug: bool,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    /// Lint a Git commit message
    #[command(visible_alias = "msg")]
    #[command(long_about = MESSAGE_LONG_ABOUT)]
    #[command(after_help = "Example: crisp message \"chore: fix an annoying bug\"")]
    Message(MessageArgs),

    /// Print the Crisp version information
    Version,
}

/// Arguments for the message command.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct MessageArgs {
    /// The commit message to lint
    pub(crate) message: Option<String>,

    /// Read message from STDIN instead of arguments
    #[arg(short, long, conflicts_with_all = ["message", "file"])]
    pub(crate) stdin: bool,

    /// Read message from a file instead of arguments
    #[arg(short, long, value_name = "PATH", conflicts_with = "message")]
    pub(crate) file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, env = "CRISP_FORMAT", default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

/// Output format for CI and scripting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
}
