//! Scheduler layer for the worker
//!
//! Drives the request loop against the target host: one attempt at a
//! time, followed by a fixed wait that depends on how the attempt went.

pub mod poller;

pub use poller::Poller;
