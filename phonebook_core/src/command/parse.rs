//! Turning an input line into a [`Command`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AddContact, Command};
use crate::error::ParseError;
use crate::person::ContactKind;

/// Tokenizer settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Split on any run of whitespace instead of on every single space.
    ///
    /// When off, `show  bob` yields an empty argument and `add  bob ...`
    /// gains an extra empty token.
    #[serde(default)]
    pub collapse_whitespace: bool,
}

impl Command {
    /// Parse one line of input.
    ///
    /// The whole line is lower-cased first, so names and values are stored
    /// in lower case.
    pub fn parse(line: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let tokens = tokenize(line, options);
        debug!("Parsing tokens: {tokens:?}");

        let Some(verb) = tokens.first() else {
            return Err(ParseError::UnknownCommand(String::new()));
        };

        match verb.as_str() {
            "add" => parse_add(&tokens).map(Self::Add),
            "show" => argument(&tokens, "show").map(|name| Self::Show { name }),
            "find" => argument(&tokens, "find").map(|value| Self::Find { value }),
            "export" => argument(&tokens, "export").map(|path| Self::Export { path }),
            "help" => Ok(Self::Help),
            "exit" => Ok(Self::Exit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn tokenize(line: &str, options: &ParseOptions) -> Vec<String> {
    let line = line
        .strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l));
    let lower = line.to_lowercase();

    if options.collapse_whitespace {
        lower.split_whitespace().map(str::to_string).collect()
    } else {
        lower.split(' ').map(str::to_string).collect()
    }
}

fn argument(tokens: &[String], command: &'static str) -> Result<String, ParseError> {
    tokens
        .get(1)
        .cloned()
        .ok_or(ParseError::TooFewArguments { command })
}

fn parse_add(tokens: &[String]) -> Result<AddContact, ParseError> {
    if tokens.len() <= 3 {
        return Err(ParseError::TooFewArguments { command: "add" });
    }
    let entry = &tokens[1..];

    let mut present = ContactKind::ALL.into_iter().filter_map(|kind| {
        entry
            .iter()
            .position(|token| token == kind.keyword())
            .map(|at| (kind, at))
    });
    let (kind, at) = match (present.next(), present.next()) {
        (Some(found), None) => found,
        (None, _) => return Err(ParseError::MissingContactKind),
        (Some(_), Some(_)) => return Err(ParseError::AmbiguousContactKind),
    };

    let value = entry.get(at + 1).ok_or_else(|| ParseError::MissingValue {
        keyword: kind.keyword(),
    })?;

    let name = entry
        .iter()
        .enumerate()
        .find(|&(i, _)| i != at && i != at + 1)
        .map(|(_, token)| token)
        .filter(|token| !token.is_empty())
        .ok_or(ParseError::MissingName)?;

    Ok(AddContact {
        kind,
        name: name.clone(),
        value: value.clone(),
        arity: entry.len(),
    })
}
