use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("row {row}, column {col}: expected a digit, found {found:?}")]
    InvalidDigit { row: usize, col: usize, found: char },

    #[error("input contains no rows")]
    EmptyInput,

    #[error("insufficient basins: need at least 3 low points, found {found}")]
    InsufficientBasins { found: usize },
}
