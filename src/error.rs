use core::fmt;
use core::str::Utf8Error;

/// Faults crossing the native decoder boundary.
#[derive(Debug)]
#[non_exhaustive]
pub enum DecodeError {
    /// The native routine returned no result string.
    NullResult,
    /// The native routine returned a string that was not valid UTF-8.
    InvalidUtf8(Utf8Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullResult => f.write_str("native decoder returned no result"),
            Self::InvalidUtf8(e) => write!(f, "native decoder returned invalid UTF-8: {e}"),
        }
    }
}

impl core::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidUtf8(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Utf8Error> for DecodeError {
    fn from(e: Utf8Error) -> Self {
        Self::InvalidUtf8(e)
    }
}
