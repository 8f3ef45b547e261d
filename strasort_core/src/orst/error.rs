use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

/// Alias for `Result<T, orst::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// Boxed error produced by a fallible key function.
pub type KeyError = Box<dyn StdError + Send + Sync + 'static>;

/// Represents all possible errors which can abort a sort.
///
/// A sort never returns a partially sorted sequence. The first failure stops the algorithm and is
/// handed back to the caller unchanged.
#[derive(Debug)]
pub enum Error {
    /// Raised when the key function fails on an item.
    Key(KeyError),

    /// Raised when two keys have no defined order relative to each other, e.g. a `NaN` float
    /// key compared against anything.
    Incomparable,
}

impl Error {
    pub fn key(error: impl Into<KeyError>) -> Self {
        Error::Key(error.into())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::Key(ref error) => Some(error.as_ref()),
            Error::Incomparable => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Key(ref error) => write!(f, "Key function failed: {error}"),
            Error::Incomparable => f.write_str("Keys cannot be ordered against each other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_error_keeps_its_source() {
        let parse = "x".parse::<i32>().unwrap_err();
        let error = Error::key(parse.clone());

        assert_eq!(
            error.source().map(|s| s.to_string()),
            Some(parse.to_string())
        );
        assert!(error.to_string().starts_with("Key function failed"));
    }

    #[test]
    fn incomparable_has_no_source() {
        assert!(Error::Incomparable.source().is_none());
    }
}
