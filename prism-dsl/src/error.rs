use crate::base::Family;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A structured argument was not a node of the required family.
    #[error("Type mismatch: expected {expected} node, got {actual}")]
    TypeMismatch { expected: Family, actual: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
