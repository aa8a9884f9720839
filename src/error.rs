use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Outcomes of [`OrderedStore`](crate::store::OrderedStore) operations that
/// leave the tree untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum StoreError {
    #[error("key is already present")]
    DuplicateKey,

    #[error("key not found")]
    NotFound,

    #[error("replacement record carries a different key")]
    KeyMismatch,
}

#[derive(Debug, ThisError, PartialEq, Clone)]
pub enum Error {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("csv error: {0}")]
    Csv(String),

    #[error("sqlite error: {0}")]
    Sqlite(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(format!("{}", error))
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Error::Sqlite(format!("{}", error))
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(format!("{}", error))
    }
}
