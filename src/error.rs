use std::fmt;

/// Errors raised by blogpatch.
///
/// A tag that fails to match, or a value without a rewritable URL, is not
/// an error; it simply leaves the input untouched.
#[derive(Debug)]
pub enum Error {
    /// A required input was absent or unusable.
    InvalidArgument(String),
    /// The writer passed to serialization failed.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
            Error::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
