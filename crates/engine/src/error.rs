//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`Validation`] returned when a calculation request cannot be computed
//!   (no selected item, no attendee).
//! - [`KeyNotFound`] returned when an item or a calculation is not found.
//!
//! Degenerate allocations (a category whose rate sum is zero) are **not**
//! errors: the affected items simply get a zero quantity.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid item: {0}")]
    InvalidItem(String),
    #[error("Invalid consumption params: {0}")]
    InvalidParams(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InvalidItem(a), Self::InvalidItem(b)) => a == b,
            (Self::InvalidParams(a), Self::InvalidParams(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::Serialization(a), Self::Serialization(b)) => a.to_string() == b.to_string(),
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
