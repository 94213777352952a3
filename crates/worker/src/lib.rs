//! The mint worker: a single long-lived process that drains the mint
//! job queue sequentially.
//!
//! Minting is deliberately not parallelized, across jobs or within one:
//! the ledger serializes transactions per submitting account, and
//! parallel submission from the platform wallet would race on sequence
//! numbers.

pub mod config;
pub mod mint_job;
pub mod runner;

pub use config::WorkerConfig;
pub use mint_job::{run_job, JobError};
pub use runner::MintWorker;
