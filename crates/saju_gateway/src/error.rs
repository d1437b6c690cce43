//! Gateway error types.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from a calendar conversion request.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GatewayError {
    /// Request failed before a response was received, or HTTP status was not 2xx.
    Transport(String),
    /// No response within the configured timeout.
    Timeout { secs: u64 },
    /// Service answered with a non-success result code.
    Api { code: String, message: String },
    /// Service answered successfully but returned no item.
    NoResult,
    /// Response body could not be interpreted.
    Parse(String),
    /// The environment variable holding the service key is unset or empty.
    MissingServiceKey(String),
    /// No gateway is configured.
    Unavailable,
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "request failed: {msg}"),
            Self::Timeout { secs } => write!(f, "request timed out after {secs}s"),
            Self::Api { code, message } => write!(f, "API error {code}: {message}"),
            Self::NoResult => write!(f, "no conversion result"),
            Self::Parse(msg) => write!(f, "response parse error: {msg}"),
            Self::MissingServiceKey(var) => {
                write!(f, "service key not found in environment variable {var}")
            }
            Self::Unavailable => write!(f, "no calendar conversion gateway configured"),
        }
    }
}

impl Error for GatewayError {}
