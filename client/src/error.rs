//! Error types for the Chorus client.
//!
//! # Design
//! Transport failures keep the underlying `ureq::Error` as their source and
//! are never retried. `MalformedResponse` covers both invalid JSON and a
//! login body missing the `response.session_id` field; the raw serde message
//! is carried for debugging.

use std::fmt;

/// Errors returned by the Chorus client.
#[derive(Debug)]
pub enum Error {
    /// The HTTP exchange itself failed (connect, DNS, timeout, I/O).
    Transport(ureq::Error),

    /// A verb name outside the supported GET/POST/DELETE set.
    UnsupportedMethod(String),

    /// The login response body was not JSON of the expected shape.
    MalformedResponse(String),

    /// The configuration document could not be loaded.
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport error: {e}"),
            Error::UnsupportedMethod(method) => {
                write!(f, "unsupported HTTP method: {method}")
            }
            Error::MalformedResponse(msg) => {
                write!(f, "malformed response: {msg}")
            }
            Error::InvalidConfig(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        Error::Transport(e)
    }
}
