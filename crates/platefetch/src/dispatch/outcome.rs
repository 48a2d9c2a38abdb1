use super::FetchError;

/// The settled result for one target, at the same position as its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The request succeeded and its payload was decoded.
    Fulfilled {
        /// The target this outcome belongs to.
        target: String,
        /// The decoded payload.
        value: T,
    },
    /// The request failed.
    Rejected {
        /// The target this outcome belongs to.
        target: String,
        /// What went wrong.
        reason: FetchError,
    },
}

impl<T> Outcome<T> {
    /// The target this outcome was produced for.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Fulfilled { target, .. } | Self::Rejected { target, .. } => target,
        }
    }

    #[must_use]
    pub const fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled { .. })
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The payload, if fulfilled.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Fulfilled { value, .. } => Some(value),
            Self::Rejected { .. } => None,
        }
    }

    /// The rejection reason, if rejected.
    #[must_use]
    pub const fn reason(&self) -> Option<&FetchError> {
        match self {
            Self::Fulfilled { .. } => None,
            Self::Rejected { reason, .. } => Some(reason),
        }
    }

    /// Converts into a plain `Result`, dropping the target.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of a rejected outcome.
    pub fn into_result(self) -> Result<T, FetchError> {
        match self {
            Self::Fulfilled { value, .. } => Ok(value),
            Self::Rejected { reason, .. } => Err(reason),
        }
    }

    pub(crate) fn settle(target: &str, result: Result<T, FetchError>) -> Self {
        let target = target.to_owned();
        match result {
            Ok(value) => Self::Fulfilled { target, value },
            Err(reason) => Self::Rejected { target, reason },
        }
    }
}
