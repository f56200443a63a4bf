// this_file: crates/fontembed-core/src/error.rs

//! Error types for fontembed

use camino::Utf8PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FontEmbedError>;

/// Main error type for fontembed
#[derive(Debug, Error)]
pub enum FontEmbedError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid data URI: {0}")]
    DataUri(#[from] DataUriError),

    #[error("Invalid code point label: {0}")]
    Label(#[from] LabelError),
}

/// Data URI decoding errors
#[derive(Debug, Error)]
pub enum DataUriError {
    #[error("expected prefix {expected:?}")]
    MissingPrefix { expected: &'static str },

    #[error("base64 payload is malformed: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// `U+XXXX` label parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("{0:?} does not start with \"U+\"")]
    MissingPrefix(String),

    #[error("{0:?} needs at least 4 hex digits")]
    TooShort(String),

    #[error("{0:?} is not upper-case hexadecimal")]
    InvalidHex(String),

    #[error("U+{0:04X} is not a Unicode scalar value")]
    NotAScalar(u32),
}
