use crate::cli::error::{Result, ServiceError};
use core::num::NonZeroUsize;
use platefetch::{Dispatcher, Fetch, Outcome, Payload};

/// Fetches a list of URLs through a [`Dispatcher`] after validating input.
pub struct FetchUrls<F> {
    dispatcher: Dispatcher<F>,
}

impl<F: Fetch> FetchUrls<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            dispatcher: Dispatcher::new(fetcher),
        }
    }

    /// Dispatches `urls` with at most `limit` requests in flight.
    ///
    /// Validation happens before anything is requested: an empty list or a
    /// zero limit fails immediately with no partial dispatch.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::EmptyTargets`] if `urls` is empty.
    /// - [`ServiceError::InvalidLimit`] if `limit` is zero.
    /// - [`ServiceError::Dispatch`] if the session itself failed.
    pub async fn execute(
        &self,
        urls: Vec<String>,
        limit: usize,
    ) -> Result<Vec<Outcome<Payload<F>>>> {
        if urls.is_empty() {
            return Err(ServiceError::EmptyTargets);
        }
        let limit = NonZeroUsize::new(limit).ok_or(ServiceError::InvalidLimit)?;

        tracing::info!(urls = urls.len(), limit, "Fetching");
        let outcomes = self.dispatcher.dispatch(urls, limit).await?;

        let rejected = outcomes.iter().filter(|o| o.is_rejected()).count();
        if rejected > 0 {
            tracing::warn!(rejected, total = outcomes.len(), "Some URLs were rejected");
        }
        Ok(outcomes)
    }
}
