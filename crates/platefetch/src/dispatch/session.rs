//! One bounded-concurrency dispatch call.
//!
//! A [`DispatchSession`] owns everything a single call needs: the targets, the
//! claim cursor, and the fetch capability. [`DispatchSession::run`] spawns
//! `min(limit, targets)` worker tasks that pull indices from the shared cursor
//! until it runs dry. Each worker returns the `(index, outcome)` pairs it
//! settled, and the session drops them into pre-sized slots, so output order
//! is input order no matter which worker finished first.

use super::{
    DispatchError, Fetch, FetchError, FetchResponse, Outcome, Payload, cursor::Cursor,
};
use core::{
    num::NonZeroUsize,
    pin::Pin,
    task::{Context, Poll},
};
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};

/// State scoped to a single dispatch call.
pub struct DispatchSession<F> {
    targets: Vec<String>,
    cursor: Cursor,
    limit: NonZeroUsize,
    fetcher: Arc<F>,
}

impl<F: Fetch> DispatchSession<F> {
    /// Prepares a session. Nothing is requested until [`Self::run`].
    pub fn new(fetcher: Arc<F>, targets: Vec<String>, limit: NonZeroUsize) -> Self {
        Self {
            cursor: Cursor::new(targets.len()),
            targets,
            limit,
            fetcher,
        }
    }

    /// Number of worker tasks this session will spawn.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.limit.get().min(self.targets.len())
    }

    /// Runs every target to completion and returns outcomes in input order.
    ///
    /// Must be called from within a Tokio runtime. On the multi-threaded
    /// runtime workers run in parallel; at most `limit` requests are ever in
    /// flight.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Worker`] if a worker task panicked. All other
    /// workers are still awaited first, and no partial results are returned.
    pub async fn run(self) -> Result<Vec<Outcome<Payload<F>>>, DispatchError> {
        let total = self.targets.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let workers = self.worker_count();
        #[cfg(feature = "tracing")]
        tracing::debug!(total, workers, "Starting dispatch session");

        let session = Arc::new(self);
        let handles = (0..workers).map(|worker_id| {
            let fut = worker_loop(worker_id, Arc::clone(&session));
            #[cfg(feature = "tracing")]
            let fut = {
                use tracing::Instrument;
                fut.instrument(tracing::debug_span!("worker", worker_id))
            };
            AbortOnDrop(tokio::spawn(fut))
        });
        let joined = futures::future::join_all(handles).await;

        let mut slots: Vec<Option<Outcome<Payload<F>>>> =
            core::iter::repeat_with(|| None).take(total).collect();
        for (worker_id, result) in joined.into_iter().enumerate() {
            let settled = result.map_err(|e| DispatchError::Worker {
                worker_id,
                message: e.to_string(),
            })?;
            for (index, outcome) in settled {
                slots[index] = Some(outcome);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(total, claimed = session.cursor.claimed(), "Dispatch session complete");

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.ok_or(DispatchError::Unsettled { index }))
            .collect()
    }
}

/// A worker handle that aborts its task when dropped.
///
/// If the caller drops [`DispatchSession::run`] before it resolves, the
/// pending `join_all` drops these and no worker claims another target.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Future for AbortOnDrop<T> {
    type Output = Result<T, JoinError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.0).poll(cx)
    }
}

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Claims targets until the cursor is exhausted, settling each one.
async fn worker_loop<F: Fetch>(
    _worker_id: usize,
    session: Arc<DispatchSession<F>>,
) -> Vec<(usize, Outcome<Payload<F>>)> {
    #[cfg(feature = "tracing")]
    tracing::trace!("Worker {_worker_id} started");

    let mut settled = Vec::new();
    while let Some(index) = session.cursor.claim() {
        let target = session.targets[index].as_str();
        let result = request(session.fetcher.as_ref(), target).await;

        #[cfg(feature = "tracing")]
        {
            if let Err(e) = &result {
                tracing::debug!(index, url = target, "Target rejected: {e}");
            }
        }

        settled.push((index, Outcome::settle(target, result)));
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("Worker {_worker_id} stopped after {} targets", settled.len());

    settled
}

/// Performs exactly one request for `target` and decodes the payload.
async fn request<F: Fetch>(fetcher: &F, target: &str) -> Result<Payload<F>, FetchError> {
    let response = fetcher
        .fetch(target)
        .await
        .map_err(|e| FetchError::Transport {
            message: e.to_string(),
        })?;

    if !response.is_success() {
        return Err(FetchError::Status {
            status: response.status(),
            target: target.to_owned(),
        });
    }

    response.decode().await.map_err(|e| FetchError::Decode {
        message: e.to_string(),
    })
}
