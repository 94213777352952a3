//! XRPL client adapter.
//!
//! Wraps the rippled JSON-RPC API behind the [`LedgerClient`] trait:
//! paginated account-NFT listing, mint submission with validation
//! polling, and minter-delegation checks. The worker and reconciliation
//! engine depend only on the trait, so tests swap in a mock.

pub mod client;
pub mod config;
pub mod error;
pub mod meta;

pub use client::{JsonRpcLedgerClient, LedgerClient, LedgerNft, MintOutcome, MintRequest};
pub use config::LedgerConfig;
pub use error::LedgerError;
