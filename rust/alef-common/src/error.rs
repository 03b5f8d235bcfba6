use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(shape: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                shape: shape.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_key(key: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidKey {
                key: key.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn not_string_convertible(position: usize) -> Error {
        Error(ErrorKind::NotStringConvertible { position }.into())
    }

    pub fn empty_reduce() -> Error {
        Error(ErrorKind::EmptyReduce.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("cannot build a sequence from {shape}: {message}")]
    InvalidArgument { shape: String, message: String },

    #[error("invalid sequence key {key}: {message}")]
    InvalidKey { key: String, message: String },

    #[error("element at position {position} has no textual representation")]
    NotStringConvertible { position: usize },

    #[error("reduce of an empty sequence with no initial value")]
    EmptyReduce,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
