use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to open file: {resource} ({reason})")]
    Open { resource: String, reason: String },

    #[error("read error on '{resource}': {reason}")]
    Read { resource: String, reason: String },

    #[error("write error on '{resource}': {reason}")]
    Write { resource: String, reason: String },
}

impl Error {
    /// Name of the resource this error refers to, if any.
    pub fn resource(&self) -> Option<&str> {
        match self {
            Error::Open { resource, .. }
            | Error::Read { resource, .. }
            | Error::Write { resource, .. } => Some(resource),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e.to_string())
    }
}
