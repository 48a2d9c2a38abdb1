use super::{DispatchError, DispatchSession, Fetch, Outcome, Payload};
use core::num::NonZeroUsize;
use std::sync::Arc;

/// Runs batches of targets through a shared [`Fetch`] capability with a
/// concurrency ceiling.
///
/// A `Dispatcher` holds no per-call state: every [`Dispatcher::dispatch`]
/// builds its own [`DispatchSession`], so concurrent calls on the same
/// dispatcher never interfere. Cloning is cheap.
///
/// # Example
///
/// ```
/// use core::{convert::Infallible, num::NonZeroUsize};
/// use platefetch::{Dispatcher, Fetch, FetchResponse};
///
/// struct Echo;
/// struct EchoResponse(String);
///
/// impl FetchResponse for EchoResponse {
///     type Payload = String;
///     type Error = Infallible;
///     fn is_success(&self) -> bool { true }
///     fn status(&self) -> u16 { 200 }
///     async fn decode(self) -> Result<String, Infallible> { Ok(self.0) }
/// }
///
/// impl Fetch for Echo {
///     type Response = EchoResponse;
///     type Error = Infallible;
///     async fn fetch(&self, target: &str) -> Result<EchoResponse, Infallible> {
///         Ok(EchoResponse(target.to_uppercase()))
///     }
/// }
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let dispatcher = Dispatcher::new(Echo);
/// let outcomes = dispatcher
///     .dispatch(["a", "b", "a"], NonZeroUsize::new(2).unwrap())
///     .await
///     .unwrap();
/// let values: Vec<_> = outcomes.iter().filter_map(|o| o.value()).collect();
/// assert_eq!(values, ["A", "B", "A"]);
/// # });
/// ```
pub struct Dispatcher<F> {
    fetcher: Arc<F>,
}

impl<F: Fetch> Dispatcher<F> {
    /// Wraps a fetch capability.
    pub fn new(fetcher: F) -> Self {
        Self::from_shared(Arc::new(fetcher))
    }

    /// Wraps a fetch capability that is already shared elsewhere.
    pub const fn from_shared(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// The underlying capability.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Requests every target exactly once with at most `limit` in flight.
    ///
    /// Outcomes come back in input order, one per target; duplicates are
    /// requested and reported independently. An empty input returns an empty
    /// vector without issuing any request.
    ///
    /// # Errors
    ///
    /// Only fails as a whole if a worker task panics; individual request
    /// failures are reported as [`Outcome::Rejected`].
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, fields(limit = limit.get())))]
    pub async fn dispatch<I>(
        &self,
        targets: I,
        limit: NonZeroUsize,
    ) -> Result<Vec<Outcome<Payload<F>>>, DispatchError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let targets = targets.into_iter().map(Into::into).collect();
        DispatchSession::new(Arc::clone(&self.fetcher), targets, limit)
            .run()
            .await
    }
}

impl<F> Clone for Dispatcher<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

/// One-shot form of [`Dispatcher::dispatch`].
///
/// # Errors
///
/// See [`Dispatcher::dispatch`].
pub async fn dispatch<F, I>(
    fetcher: F,
    targets: I,
    limit: NonZeroUsize,
) -> Result<Vec<Outcome<Payload<F>>>, DispatchError>
where
    F: Fetch,
    I: IntoIterator,
    I::Item: Into<String>,
{
    Dispatcher::new(fetcher).dispatch(targets, limit).await
}
