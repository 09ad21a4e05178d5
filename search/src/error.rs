use thiserror::Error;

use crate::board::Square;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("square {0} is not on the board")]
    InvalidSquare(Square),

    #[error("no path from {start} to {target}")]
    NoPathFound { start: Square, target: Square },

    #[error("cannot parse square from '{0}', expected 'file,rank'")]
    ParseSquare(String),
}
