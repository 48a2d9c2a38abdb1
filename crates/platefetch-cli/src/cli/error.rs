//! Errors surfaced by the service layer.
//!
//! These wrap the library's typed failures and add the input checks that
//! belong in front of the library (an empty URL list, a zero limit). Every
//! variant renders as a message fit to show the user directly.

use platefetch::{DispatchError, PlateError};

pub type Result<T> = core::result::Result<T, ServiceError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// No URLs were supplied.
    #[error("The URL list cannot be empty.")]
    EmptyTargets,

    /// The concurrency limit was zero.
    #[error("Concurrency limit must be a number greater than 0.")]
    InvalidLimit,

    /// The plate codec rejected the input.
    #[error(transparent)]
    Plate(#[from] PlateError),

    /// The dispatch session failed as a whole.
    #[error("Dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}
