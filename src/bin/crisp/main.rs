//! Crisp - lint Git commit messages against the Conventional Commit
//! specification.

mod args;
mod input;
mod version;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use args::{Cli, Commands, MessageArgs, OutputFormat};
use crisp::CommitMessage;
use input::Source;
use version::VersionInfo;

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", style("error:").for_stderr().red().bold());
            ExitCode::FAILURE
        }
    }
}

/// Set up logging/tracing on stderr.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("crisp=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Message(args) => run_message(&args),
        Commands::Version => {
            println!("{}", VersionInfo::current());
            Ok(())
        }
    }
}

/// The parsed message alongside its verdict, for `--format json`.
#[derive(serde::Serialize)]
struct Report<'a> {
    valid: bool,
    #[serde(flatten)]
    message: &'a CommitMessage<'a>,
}

fn run_message(args: &MessageArgs) -> Result<()> {
    let source = Source::from_args(args);
    tracing::debug!(?source, "resolved message source");

    let raw = source.read()?;
    let message = CommitMessage::parse(&raw)?;
    tracing::debug!(
        type_ = %message.type_(),
        scope = message.scope_str(),
        breaking = message.breaking(),
        footers = message.footers().len(),
        "parsed commit message"
    );

    let verdict = crisp::validate(&message)?;

    match args.format {
        OutputFormat::Text => println!("{verdict}"),
        OutputFormat::Json => {
            let report = Report {
                valid: true,
                message: &message,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
