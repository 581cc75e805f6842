use std::{fmt, io};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub inner: Inner,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Inner {
    /// A style name outside the closed set.
    StyleError { name: String },
    /// Standard output refused the document.
    OutputError { message: String },
}

impl Error {
    pub fn into_inner(&self) -> Inner {
        self.inner.clone()
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error {
            inner: Inner::OutputError {
                message: value.to_string(),
            },
        }
    }
}

impl From<Error> for io::Error {
    fn from(value: Error) -> Self {
        match value.into_inner() {
            Inner::StyleError { name } => {
                io::Error::new(io::ErrorKind::InvalidInput, format!("unknown style `{name}`"))
            }
            Inner::OutputError { message } => io::Error::other(message),
        }
    }
}

/// Converts an unknown style name to an Error with inner type StyleError.
#[macro_export]
macro_rules! style_error {
    ($name:expr) => {
        Err($crate::Error {
            inner: $crate::Inner::StyleError {
                name: $name.to_string(),
            },
        })
    };
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Inner::StyleError { name } => {
                write!(f, "unknown style `{name}`")
            }
            Inner::OutputError { message } => {
                write!(f, "failed writing help screen: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}
