use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Export to {} failed: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Structural problems found while turning an input line into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    #[error("command `{command}` expects more arguments")]
    TooFewArguments { command: &'static str },

    #[error("`add` needs exactly one of `phone` or `email`")]
    MissingContactKind,

    #[error("`add` cannot take both `phone` and `email`")]
    AmbiguousContactKind,

    #[error("keyword `{keyword}` is not followed by a value")]
    MissingValue { keyword: &'static str },

    #[error("`add` is missing a name")]
    MissingName,
}
