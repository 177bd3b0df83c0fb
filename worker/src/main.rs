//! Worker
//!
//! Keeps the target host's scheduler ticking by hitting its worker endpoint
//! on a fixed cadence.
//!
//! Architecture:
//! - Configuration: Resolve the target host from the environment or the default
//! - Scheduler: The request loop and its fixed waits
//!
//! The worker runs until the process is terminated from outside.

mod config;
mod scheduler;

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::scheduler::Poller;
use worker_client::TargetClient;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worker=info,worker_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let client = Arc::new(TargetClient::new(config.target_host.clone()));

    Poller::new(config, client).run().await;
}
