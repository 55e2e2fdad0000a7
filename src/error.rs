use std::{
    error::Error as StdError,
    fmt, io,
    path::{Path, PathBuf},
};

///
/// Reason why a cleaned line doesn't end up in the mapping.
///
/// These never reach the caller, malformed lines are skipped.
///
#[derive(Debug, PartialEq)]
pub enum PairError {
    EmptyPair,
    MissingSeparator(String),
    EmptyKey(String),
}

impl fmt::Display for PairError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PairError::EmptyPair => write!(fmt, "pair format empty"),
            PairError::MissingSeparator(line) => write!(fmt, "no separator in line {:?}", line),
            PairError::EmptyKey(line) => write!(fmt, "empty key in line {:?}", line),
        }
    }
}

impl StdError for PairError {
    #[inline]
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        None
    }
}

#[derive(Debug)]
pub enum Error {
    ReadError(PathBuf, io::Error),
    EmptyFile(PathBuf),
}

impl Error {
    /// Path of the file that caused the error.
    #[inline]
    pub fn path(&self) -> &Path {
        match self {
            Error::ReadError(path, _) => path,
            Error::EmptyFile(path) => path,
        }
    }

    #[inline]
    pub fn is_empty_file(&self) -> bool {
        matches!(self, Error::EmptyFile(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ReadError(path, e) => {
                write!(fmt, "could not read file {}: {}", path.display(), e)
            }
            Error::EmptyFile(path) => write!(fmt, "file is empty: {}", path.display()),
        }
    }
}

impl StdError for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::ReadError(_, e) => Some(e),
            Error::EmptyFile(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
