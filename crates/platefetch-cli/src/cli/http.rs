//! The HTTP capability handed to the dispatcher.

use anyhow::Context;
use core::time::Duration;
use platefetch::{Fetch, FetchResponse};

/// Issues `GET` requests and decodes JSON bodies.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    type Response = HttpResponse;
    type Error = reqwest::Error;

    async fn fetch(&self, target: &str) -> Result<HttpResponse, reqwest::Error> {
        self.client.get(target).send().await.map(HttpResponse)
    }
}

/// A completed response whose body has not been read yet.
#[derive(Debug)]
pub struct HttpResponse(reqwest::Response);

impl FetchResponse for HttpResponse {
    type Payload = serde_json::Value;
    type Error = reqwest::Error;

    fn is_success(&self) -> bool {
        self.0.status().is_success()
    }

    fn status(&self) -> u16 {
        self.0.status().as_u16()
    }

    async fn decode(self) -> Result<serde_json::Value, reqwest::Error> {
        self.0.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::num::NonZeroUsize;
    use platefetch::FetchError;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn unusable_urls_are_transport_rejections() {
        let fetcher = HttpFetcher::new(Duration::from_secs(1), "platefetch-test").unwrap();
        let limit = NonZeroUsize::new(2).unwrap();
        let outcomes = platefetch::dispatch(fetcher, ["not a url", "ftp//missing-scheme"], limit)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        for (outcome, target) in outcomes.iter().zip(["not a url", "ftp//missing-scheme"]) {
            assert_eq!(outcome.target(), target);
            assert!(matches!(outcome.reason(), Some(FetchError::Transport { .. })));
        }
    }
}
