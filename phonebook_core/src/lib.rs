#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! In-memory contact book driven by line-based commands.
//!
//! The crate is organised leaves first:
//! - [`person`] and [`validate`]: contact records and value patterns
//! - [`store`]: the record store owned by a session
//! - [`json`]: the export document model and its writer
//! - [`command`]: the command sum type and its line parser
//! - [`session`]: the read-eval-print loop

pub mod command;
pub mod error;
pub mod json;
pub mod person;
pub mod session;
pub mod store;
pub mod validate;

pub use command::{AddContact, Command, Flow, ParseOptions};
pub use error::{Error, ParseError, Result};
pub use person::{ContactKind, Person};
pub use session::{Messages, Session};
pub use store::RecordStore;
