//! Worker poller
//!
//! Repeatedly triggers the target host's worker endpoint. Every attempt is
//! followed by a fixed wait: a short one if a response came back (whatever
//! its status), a long one if the request failed. Failures are logged and
//! never stop the loop.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{debug, error, info};

use crate::config::Config;
use worker_client::TargetClient;

/// Something the poller can trigger once per cycle
#[async_trait]
pub trait WorkerEndpoint: Send + Sync {
    /// Performs one request against the endpoint
    ///
    /// Returns `Ok` whenever a response was received, regardless of status.
    async fn trigger(&self) -> Result<()>;
}

#[async_trait]
impl WorkerEndpoint for TargetClient {
    async fn trigger(&self) -> Result<()> {
        let status = self.trigger_worker().await?;
        debug!("Worker endpoint answered with {}", status);
        Ok(())
    }
}

/// How a single attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// A response came back
    Delivered,
    /// The request failed before any response arrived
    Failed,
}

/// Poller that triggers the worker endpoint forever
pub struct Poller {
    config: Config,
    endpoint: Arc<dyn WorkerEndpoint>,
}

impl Poller {
    /// Creates a new poller
    pub fn new(config: Config, endpoint: Arc<dyn WorkerEndpoint>) -> Self {
        Self { config, endpoint }
    }

    /// Starts the polling loop
    ///
    /// Never returns. The process is stopped from outside.
    pub async fn run(&self) {
        info!("Starting worker...");
        info!("Target host: {}", self.config.target_host);

        loop {
            let outcome = self.poll_once().await;
            time::sleep(self.delay_for(outcome)).await;
        }
    }

    /// Performs a single attempt
    ///
    /// The request runs in its own task so that a panic while issuing it is
    /// reported like any other failure instead of tearing down the loop.
    pub async fn poll_once(&self) -> PollOutcome {
        let endpoint = Arc::clone(&self.endpoint);
        let attempt = tokio::spawn(async move { endpoint.trigger().await });

        match attempt.await {
            Ok(Ok(())) => PollOutcome::Delivered,
            Ok(Err(e)) => {
                error!("Worker request failed: {:#}", e);
                PollOutcome::Failed
            }
            Err(e) => {
                error!("Worker request task panicked: {}", e);
                PollOutcome::Failed
            }
        }
    }

    /// Wait before the next attempt
    pub fn delay_for(&self, outcome: PollOutcome) -> Duration {
        match outcome {
            PollOutcome::Delivered => self.config.success_interval,
            PollOutcome::Failed => self.config.failure_interval,
        }
    }
}
