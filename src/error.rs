use async_openai::error::OpenAIError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub const CREDENTIAL_MISSING_MESSAGE: &str = "API key missing on server";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{}", CREDENTIAL_MISSING_MESSAGE)]
    CredentialMissing,

    #[error("{0}")]
    Upstream(String),

    #[error("Invalid upstream response: {0}")]
    Parse(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse failure classes, so callers can tell causes apart even though the
/// wire envelope is the same for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    CredentialMissing,
    Upstream,
    Parse,
    Config,
    Internal,
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::CredentialMissing => ErrorKind::CredentialMissing,
            Self::Upstream(_) => ErrorKind::Upstream,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Config(_) | Self::Yaml(_) | Self::AddrParse(_) => ErrorKind::Config,
            Self::Io(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<OpenAIError> for Error {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::JSONDeserialize(..) => Self::Parse(err.to_string()),
            other => Self::Upstream(other.to_string()),
        }
    }
}
