//! Domain types and pure business logic for the soundmint backend.
//!
//! This crate has no I/O. Database access lives in `soundmint-db`,
//! ledger access in `soundmint-ledger`.

pub mod counters;
pub mod editions;
pub mod error;
pub mod minting;
pub mod token_uri;
pub mod types;
