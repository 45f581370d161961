//! Error types for the request client.
//!
//! # Design
//! Building a request can only fail on a missing parameter, and that failure
//! is the caller's to handle. Everything that goes wrong on the wire lands in
//! `Transport`, keeping the target URI alongside the underlying ureq error.

use std::fmt;

/// Errors returned by `RequestClient` build and send methods.
#[derive(Debug)]
pub enum ClientError {
    /// A required parameter was absent, empty or blank.
    MissingParameter(&'static str),

    /// The request could not be sent or its response could not be read.
    Transport { uri: String, source: ureq::Error },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::MissingParameter(name) => write!(f, "lack of parameter: {name}"),
            ClientError::Transport { uri, source } => {
                write!(f, "GET {uri} failed: {source}")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::MissingParameter(_) => None,
            ClientError::Transport { source, .. } => Some(source),
        }
    }
}
