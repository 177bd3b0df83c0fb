//! Worker endpoint calls

use crate::TargetClient;
use crate::error::Result;
use reqwest::StatusCode;
use tracing::debug;

/// Path of the worker endpoint, appended to the base URL as-is
pub const WORKER_PATH: &str = "/api/worker";

impl TargetClient {
    /// Full URL of the worker endpoint
    pub fn worker_url(&self) -> String {
        format!("{}{}", self.base_url, WORKER_PATH)
    }

    /// Trigger one worker cycle on the target host
    ///
    /// Sends `POST {base_url}/api/worker` with an empty body and the HTTP
    /// client's default headers.
    ///
    /// # Returns
    /// The status code of whatever response came back. The body is read to
    /// the end and discarded.
    ///
    /// # Errors
    /// `ClientError::RequestFailed` if the exchange did not complete: no
    /// response at all, or a body cut off before its end.
    pub async fn trigger_worker(&self) -> Result<StatusCode> {
        let url = self.worker_url();
        debug!("POST {}", url);

        let response = self.client.post(&url).send().await?;
        let status = response.status();
        response.bytes().await?;

        Ok(status)
    }
}
