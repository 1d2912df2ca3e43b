use crate::geo::LocationId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouteError>;

#[derive(Error, Debug)]
pub enum RouteError {
    /// A solved path referenced a location the catalog does not hold.
    /// The graph and catalog have diverged, which is a defect rather
    /// than a routing outcome.
    #[error("location {0} is present in the graph but missing from the catalog")]
    MissingLocation(LocationId),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog contains no locations")]
    Empty,

    #[error("location id {0} appears more than once")]
    DuplicateId(LocationId),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("neighbor count must be at least 1")]
    ZeroNeighbors,

    #[error("{key} is not a valid number: {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{value:?} is not a known neighbor strategy")]
    InvalidStrategy { value: String },

    #[error("{key} is not a valid flag: {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}
