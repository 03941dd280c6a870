//! Remote lottie animation fetcher.
//!
//! One GET per render. Anything other than a successful response with a JSON
//! body yields `None`; the page then omits the animation widget.

use std::time::Duration;

use reqwest::Client;

/// User agent sent with animation requests.
pub const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// HTTP client for animation descriptors.
#[derive(Clone)]
pub struct AnimationFetcher {
    client: Client,
}

impl AnimationFetcher {
    /// Create a fetcher. `timeout` of `None` leaves requests unbounded.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(USER_AGENT).gzip(true).brotli(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Fetch the descriptor at `url`.
    pub async fn fetch(&self, url: &str) -> Option<serde_json::Value> {
        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Animation request to {} failed: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Animation request to {} returned {}", url, status);
            return None;
        }

        match response.json::<serde_json::Value>().await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Animation from {} is not valid JSON: {}", url, e);
                None
            }
        }
    }
}
