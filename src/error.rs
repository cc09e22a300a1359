//! Crate error type.
//!
//! Per-row problems (bad input, unknown names, unexpected API statuses) are
//! reported and the run continues; transport and file I/O problems abort the
//! whole run.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Connection, TLS or timeout failure talking to the NSX Manager.
    #[error("transport error talking to NSX Manager: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status other than the one expected for the call.
    #[error("unexpected status {status} from {operation}")]
    UnexpectedStatus { operation: &'static str, status: u16 },

    /// A name lookup against the manager's listings came back empty.
    #[error("no {kind} named '{name}' found in scope")]
    NotFound { kind: &'static str, name: String },

    /// CSV record that does not have the expected 4-field shape.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// Dotted-decimal netmask that could not be parsed.
    #[error("invalid netmask '{0}'")]
    InvalidNetmask(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Errors that abort the run instead of failing a single row.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Io(_))
    }
}
