//! Error types for availability queries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Event source failure: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
