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

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// A value whose runtime type is outside the closed set of supported kinds.
    pub fn unsupported_type(type_name: impl Into<String>) -> Error {
        Error(
            ErrorKind::UnsupportedType {
                type_name: type_name.into(),
            }
            .into(),
        )
    }

    /// A kind tag that cannot be the target of a conversion.
    pub fn invalid_kind(name: impl Into<String>) -> Error {
        Error(ErrorKind::InvalidKind { name: name.into() }.into())
    }

    pub fn index_out_of_range(position: usize, len: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { position, len }.into())
    }

    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::IndexOutOfRange { .. })
    }

    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnsupportedType { .. })
    }

    pub fn is_invalid_kind(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidKind { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("type not supported: {type_name}")]
    UnsupportedType { type_name: String },

    #[error("invalid kind '{name}': must supply one of float, int, string, bool, datetime, generic")]
    InvalidKind { name: String },

    #[error("position {position} is out of range (len: {len})")]
    IndexOutOfRange { position: usize, len: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
