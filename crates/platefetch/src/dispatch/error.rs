/// Why a single target was rejected.
///
/// These never escape a dispatch call as an `Err`; they are stored in
/// [`Outcome::Rejected`](crate::Outcome::Rejected) next to the target that
/// produced them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The request could not be completed.
    #[error("{message}")]
    Transport { message: String },

    /// The request completed with an unsuccessful status.
    #[error("HTTP Error: {status} at {target}")]
    Status { status: u16, target: String },

    /// The response body could not be decoded.
    #[error("Decode error: {message}")]
    Decode { message: String },
}

/// Failures that abort a whole dispatch session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// A worker task panicked or was cancelled before it finished.
    #[error("Worker {worker_id} failed: {message}")]
    Worker { worker_id: usize, message: String },

    /// A target was never settled by any worker.
    #[error("Target at index {index} was never settled")]
    Unsettled { index: usize },
}
