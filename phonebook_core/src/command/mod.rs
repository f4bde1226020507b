//! The closed set of commands a session understands.
//!
//! Each command is validated with [`Command::is_valid`] before the session
//! calls [`Command::execute`]. `execute` itself never re-validates.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::json;
use crate::person::ContactKind;
use crate::session::Messages;
use crate::store::RecordStore;

mod parse;

pub use parse::ParseOptions;

pub const NOT_INITIALIZED: &str = "Phonebook is not initialized";

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Arguments of an `add` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddContact {
    pub kind: ContactKind,
    pub name: String,
    pub value: String,
    /// Number of tokens after `add`.
    pub arity: usize,
}

impl AddContact {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.kind.accepts(&self.value) && self.arity <= 3
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddContact),
    Show { name: String },
    Find { value: String },
    Export { path: String },
    Help,
    Exit,
}

impl Command {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Add(add) => add.is_valid(),
            Self::Show { .. } | Self::Find { .. } | Self::Export { .. } | Self::Help | Self::Exit => {
                true
            }
        }
    }

    /// Run the command against `store`, writing user-facing output to `out`.
    ///
    /// # Errors
    /// Returns [`Error::Export`] when the export file cannot be written and
    /// [`Error::Io`] when `out` fails.
    pub fn execute<W: Write>(
        &self,
        store: &mut RecordStore,
        messages: &Messages,
        out: &mut W,
    ) -> Result<Flow> {
        match self {
            Self::Add(add) => {
                store.add_contact(&add.name, add.kind, &add.value);
            }
            Self::Show { name } => show(store, name, out)?,
            Self::Find { value } => find(store, value, out)?,
            Self::Export { path } => export(store, path, out)?,
            Self::Help => writeln!(out, "{}", messages.help)?,
            Self::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }
}

fn show<W: Write>(store: &RecordStore, name: &str, out: &mut W) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "{NOT_INITIALIZED}")?;
    } else if let Some(person) = store.get(name) {
        writeln!(out, "{person}")?;
    } else {
        writeln!(out, "Person with name {name} was not found")?;
    }
    Ok(())
}

fn find<W: Write>(store: &RecordStore, value: &str, out: &mut W) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "{NOT_INITIALIZED}")?;
        return Ok(());
    }

    let persons = store.find_by_contact(value);
    debug!("Found {} record(s) holding {value}", persons.len());
    if persons.is_empty() {
        writeln!(out, "Person with {value} was not found")?;
    }
    for person in persons {
        writeln!(out, "{person}")?;
    }
    Ok(())
}

fn export<W: Write>(store: &RecordStore, path: &str, out: &mut W) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "{NOT_INITIALIZED}")?;
        return Ok(());
    }

    let text = json::render_store(store);
    std::fs::write(path, text).map_err(|source| Error::Export {
        path: PathBuf::from(path),
        source,
    })?;
    info!("Exported {} record(s) to {path}", store.len());
    writeln!(out, "JSON file {path} was created")?;
    Ok(())
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(add) => {
                let what = match add.kind {
                    ContactKind::Phone => "номером телефона",
                    ContactKind::Email => "адресом электронной почты",
                };
                write!(
                    f,
                    "Введена команда записи нового пользователя {} с {what} {}",
                    add.name, add.value
                )
            }
            Self::Show { .. } => f.write_str("Введена команда \"show\""),
            Self::Find { .. } => f.write_str("Введена команда \"find\""),
            Self::Export { .. } => f.write_str("Введена команда \"export\""),
            Self::Help => f.write_str("Вывод справочной информации"),
            Self::Exit => f.write_str("Введена команда \"exit\""),
        }
    }
}
