//! Store-level sentinel errors
//!
//! These are the domain failures a repository can return. They carry no
//! caller-facing classification; the use case layer maps them onto the
//! `UseCaseError` taxonomy.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("data not found")]
    DataNotFound,

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("storage error: {0}")]
    Storage(String),
}
