use std::io::ErrorKind;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RouteError {
    #[error("source <{0}> has not been found")]
    SourceNotFound(String),
    #[error("target <{0}> has not been found")]
    TargetNotFound(String),
    // the field is named origin: thiserror reserves `source` for Error::source()
    #[error("no route has been found between {origin} - {target}")]
    NoRouteFound { origin: String, target: String },
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TableError {
    #[error("cannot access table {path}: {kind:?}")]
    Io { path: String, kind: ErrorKind },
    #[error("row {row}: expected origin, destination and cost fields")]
    MissingFields { row: usize },
    #[error("row {row}: cost <{value}> is not a non-negative integer")]
    MalformedCost { row: usize, value: String },
}

impl TableError {
    pub(crate) fn io(path: &std::path::Path, error: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            kind: error.kind(),
        }
    }
}
