use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {kind}: {value}")]
    Validation { kind: &'static str, value: String },

    #[error("malformed entries file {}: {reason}", .path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("unable to determine role for node {0}")]
    RoleNotFound(String),

    #[error("invalid format: {0}. Please specify json, csv, yaml, or nft")]
    UnsupportedFormat(String),

    #[error("failed to write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to encode {format}: {reason}")]
    Encode { format: &'static str, reason: String },
}

impl Error {
    pub(crate) fn validation(kind: &'static str, value: &str) -> Self {
        Error::Validation { kind, value: value.to_owned() }
    }

    pub(crate) fn malformed<E: ToString>(path: impl Into<PathBuf>, err: E) -> Self {
        Error::MalformedInput { path: path.into(), reason: err.to_string() }
    }

    pub(crate) fn encode<E: ToString>(format: &'static str, err: E) -> Self {
        Error::Encode { format, reason: err.to_string() }
    }
}
