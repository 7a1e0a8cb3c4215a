//! Error types for each codec layer.
//!
//! Byte-level and structural failures are fatal to the call that hit them.
//! Unknown keys met while decoding are not errors (they are dropped); the same
//! keys met while encoding are reported through [`EncodeError`].

use std::io;

use thiserror::Error;

use crate::keys::Domain;

/// Failure of the byte transform between the container and its plaintext.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("container is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("compressed payload is corrupt or truncated: {0}")]
    Decompress(#[source] io::Error),

    #[error("failed to compress plaintext: {0}")]
    Compress(#[source] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagTreeErrorKind {
    /// The text ended while an element was still open.
    UnexpectedEof,
    /// The `<plist><dict>` root container is missing.
    MissingRoot,
    /// Character data appeared where an element was required.
    UnexpectedText,
    /// A tag could not be read (`<` without a closing `>`).
    MalformedTag,
    /// An element was expected but a different one was found.
    UnexpectedElement { expected: String, found: String },
}

/// Structural failure while parsing the plaintext tag format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tag tree error at byte {offset}: {kind}")]
pub struct TagTreeError {
    pub offset: usize,
    pub kind: TagTreeErrorKind,
}

impl TagTreeError {
    pub fn new(offset: usize, kind: TagTreeErrorKind) -> Self {
        Self { offset, kind }
    }
}

impl std::fmt::Display for TagTreeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEof => f.write_str("unexpected end of input"),
            Self::MissingRoot => f.write_str("missing <plist><dict> root"),
            Self::UnexpectedText => f.write_str("unexpected character data"),
            Self::MalformedTag => f.write_str("malformed tag"),
            Self::UnexpectedElement { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
        }
    }
}

/// A readable document that cannot be mapped back to terse keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("no {domain} key for readable name `{key}`")]
    UnknownKey { domain: Domain, key: String },

    #[error("`{value}` is not a known {field}")]
    UnknownEnumValue { field: &'static str, value: String },
}

impl EncodeError {
    /// The readable key or value that could not be encoded.
    pub fn offending(&self) -> &str {
        match self {
            Self::UnknownKey { key, .. } => key,
            Self::UnknownEnumValue { value, .. } => value,
        }
    }
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    TagTree(#[from] TagTreeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

pub type Result<T> = std::result::Result<T, CodecError>;
