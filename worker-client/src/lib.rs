//! Worker HTTP Client
//!
//! A small HTTP client for poking the target host's worker endpoint.
//!
//! The target host owns all scheduling logic; this client only needs to
//! deliver a bare `POST /api/worker` and report whether the exchange
//! completed. Any response the server sends back, including 4xx and 5xx
//! statuses, counts as a completed exchange.
//!
//! # Example
//!
//! ```no_run
//! use worker_client::TargetClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = TargetClient::new("http://localhost:3000");
//!
//!     let status = client.trigger_worker().await?;
//!     println!("Worker endpoint answered with {}", status);
//!     Ok(())
//! }
//! ```

pub mod error;
mod worker;

pub use error::{ClientError, Result};
pub use worker::WORKER_PATH;

use reqwest::Client;

/// HTTP client for the target host
#[derive(Debug, Clone)]
pub struct TargetClient {
    /// Base URL of the target host (e.g., "http://localhost:3000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl TargetClient {
    /// Create a new target client
    ///
    /// The base URL is used exactly as given. It is not validated here; a
    /// malformed value surfaces as a request error on every call.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the target host (e.g., "http://localhost:3000")
    ///
    /// # Example
    /// ```
    /// use worker_client::TargetClient;
    ///
    /// let client = TargetClient::new("http://localhost:3000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Create a new target client with a custom HTTP client
    ///
    /// The default client sets no request timeout. Use this to configure
    /// one, or proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use worker_client::TargetClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = TargetClient::with_client("http://localhost:3000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Get the base URL of the target host
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
