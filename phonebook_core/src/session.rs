//! Interactive read-eval-print loop over a [`RecordStore`].

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::command::{Command, Flow, ParseOptions};
use crate::error::{Error, Result};
use crate::store::RecordStore;

// The blank lines after the heading and before `add <Имя> email` end in spaces.
const DEFAULT_HELP: &str = concat!(
    "Перечень команд:\n",
    "        \n",
    r"exit - прекращение работы

help - справка

add <Имя> phone <Номер телефона>
- сохранение записи с введенными именем и номером телефона
  или добавление нового номера телефона к уже имеющейся
  записи
",
    " \n",
    r"add <Имя> email <Адрес электронной почты>
- сохранение записи с введенными именем и адрес
  электронной почты или добавление нового адреса
  электронной почты к уже имеющейся записи

show <Имя>
- выводит по введенному имени его телефоны
  и адреса электронной почты

find <параметр>
- выводит по введенному параметру (телефон или E-mail) имеющиеся записи

export </path/file.json>
- экспорт значений в JSON файл в директории </path/<file.json>"
);

/// User-facing texts printed by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    /// Printed, without a trailing newline, before every read.
    #[serde(default = "Messages::default_prompt")]
    pub prompt: String,
    #[serde(default = "Messages::default_help")]
    pub help: String,
    /// One-line diagnostic for malformed or invalid commands.
    #[serde(default = "Messages::default_error")]
    pub error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            prompt: Self::default_prompt(),
            help: Self::default_help(),
            error: Self::default_error(),
        }
    }
}

impl Messages {
    fn default_prompt() -> String {
        "\nВведите \"help\" для помощи\nили команду: ".to_string()
    }

    fn default_help() -> String {
        DEFAULT_HELP.to_string()
    }

    fn default_error() -> String {
        "Ошибка! Команда введена неверно. Список команд ниже".to_string()
    }
}

/// One interactive session. Owns the record store for its whole lifetime.
#[derive(Debug, Default)]
pub struct Session {
    store: RecordStore,
    messages: Messages,
    options: ParseOptions,
}

impl Session {
    #[must_use]
    pub fn new(messages: Messages, options: ParseOptions) -> Self {
        Self {
            store: RecordStore::new(),
            messages,
            options,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Parse, validate and execute a single input line.
    ///
    /// Malformed lines print the error message and fall back to `help`.
    /// Invalid commands print the error message and the help text without
    /// executing. A failed export is reported the same way and the session
    /// goes on.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let command = match Command::parse(line, &self.options) {
            Ok(command) => command,
            Err(e) => {
                debug!("Rejected input {:?}: {e}", line.trim_end());
                writeln!(out, "{}", self.messages.error)?;
                Command::Help
            }
        };

        if !command.is_valid() {
            debug!("Invalid command: {command:?}");
            writeln!(out, "{}", self.messages.error)?;
            writeln!(out, "{}", self.messages.help)?;
            return Ok(Flow::Continue);
        }

        writeln!(out, "{command}")?;
        match command.execute(&mut self.store, &self.messages, out) {
            Ok(flow) => Ok(flow),
            Err(e @ Error::Export { .. }) => {
                error!("{e}");
                writeln!(out, "{e}")?;
                writeln!(out, "{}", self.messages.help)?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    /// Prompt and process lines from `input` until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        loop {
            write!(out, "{}", self.messages.prompt)?;
            out.flush()?;

            // Bytes that are not UTF-8 become U+FFFD.
            let mut raw = Vec::new();
            if input.read_until(b'\n', &mut raw)? == 0 {
                info!("End of input, closing session");
                break;
            }
            let line = String::from_utf8_lossy(&raw);

            if self.handle_line(&line, &mut out)? == Flow::Exit {
                debug!("Exit requested");
                break;
            }
        }

        info!("Session ended with {} record(s)", self.store.len());
        Ok(())
    }

    /// Run over the process's stdin and stdout.
    pub fn run_interactive(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }
}
