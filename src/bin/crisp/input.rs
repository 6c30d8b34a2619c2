//! Where the commit message to lint comes from.

use std::fs;
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::args::MessageArgs;

/// Git keeps the message of the commit being made here.
pub(crate) const COMMIT_EDITMSG: &str = ".git/COMMIT_EDITMSG";

/// A source of a single commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    /// Given directly on the command line.
    Argument(String),
    /// The first line of STDIN, which must be present.
    Stdin,
    /// The first line of STDIN if piped, else `.git/COMMIT_EDITMSG`.
    StdinOrEditMsg,
    /// The whole content of a file.
    File(PathBuf),
}

impl Source {
    pub(crate) fn from_args(args: &MessageArgs) -> Self {
        if let Some(message) = &args.message {
            Source::Argument(message.clone())
        } else if let Some(path) = &args.file {
            Source::File(path.clone())
        } else if args.stdin {
            Source::Stdin
        } else {
            Source::StdinOrEditMsg
        }
    }

    pub(crate) fn read(self) -> Result<String> {
        match self {
            Source::Argument(message) => Ok(message),
            Source::File(path) => read_file(&path),
            Source::Stdin => match read_line(io::stdin().lock())? {
                Some(line) => Ok(line),
                None => bail!("no input received from stdin"),
            },
            Source::StdinOrEditMsg => {
                let stdin = io::stdin();
                if !stdin.is_terminal() {
                    if let Some(line) = read_line(stdin.lock())? {
                        return Ok(line);
                    }
                    tracing::debug!("stdin is empty, falling back to {COMMIT_EDITMSG}");
                }
                read_file(Path::new(COMMIT_EDITMSG))
            }
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "reading commit message from file");
    fs::read_to_string(path).with_context(|| format!("failed to read file {}", path.display()))
}

/// Read one line, without its line ending. `None` at end of input.
fn read_line(mut reader: impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("error scanning stdin")?;
    if read == 0 {
        return Ok(None);
    }

    let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
    Ok(Some(line.to_owned()))
}
