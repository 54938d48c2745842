//! Error types shared by the loaders, the search engines and the binary.

use crate::parsed_types::StateName;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a state space or heuristic file into its in-memory form.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {what} at line {line}")]
    Parse { what: &'static str, line: usize },
}

/// Failure during a search or a heuristic check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("no heuristic value for state {0}")]
    MissingHeuristic(StateName),
}

/// A reported path that does not replay in its state space.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("path starts at {found} instead of the start state {start}")]
    WrongStart { found: StateName, start: StateName },
    #[error("there is no transition from {from} to {to}")]
    MissingTransition { from: StateName, to: StateName },
    #[error("path ends at {0}, which is not a goal state")]
    NotAGoal(StateName),
}

/// Everything that can make the binary fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("{0}")]
    Usage(String),
    #[error("reported path is invalid")]
    InvalidPath(#[from] PathError),
    #[error("failed to serialise report")]
    Serialise(#[from] serde_json::Error),
    #[error("failed to write report to {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
