use derive_more::From;
use thiserror::Error;

/// The file as a whole could not be read.
#[non_exhaustive]
#[derive(Debug, Error, From)]
pub enum AtlasError {
    #[error("io error: {0}")]
    Io(std::io::Error),

    #[error("csv error: {0}")]
    Csv(csv::Error),
}

/// Why a single row was left out of the dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("unreadable row: {0}")]
    Unreadable(String),

    #[error("empty rock name")]
    EmptyRock,

    #[error("{column} is not a coordinate in range: {value:?}")]
    BadCoordinate { column: &'static str, value: String },

    #[error("invalid coordinates")]
    ZeroCoordinate,
}
