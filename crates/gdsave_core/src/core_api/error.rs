use thiserror::Error;

use crate::error::CodecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    Transport,
    Parse,
    Encode,
    UnsupportedOperation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code:?}: {message}")]
pub struct CoreError {
    pub code: CoreErrorCode,
    pub message: String,
}

impl CoreError {
    pub fn new(code: CoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<CodecError> for CoreError {
    fn from(err: CodecError) -> Self {
        let code = match err {
            CodecError::Transport(_) => CoreErrorCode::Transport,
            CodecError::TagTree(_) => CoreErrorCode::Parse,
            CodecError::Encode(_) => CoreErrorCode::Encode,
        };
        Self::new(code, err.to_string())
    }
}
