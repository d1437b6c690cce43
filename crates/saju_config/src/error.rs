//! Configuration errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Config file could not be read.
    Io(String),
    /// Config text is not valid TOML or does not match the schema.
    Parse(String),
    /// A value failed validation.
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config read error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ConfigError {}
