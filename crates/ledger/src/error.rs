/// Errors from the ledger adapter.
///
/// The worker treats [`Rejected`](LedgerError::Rejected) and
/// [`Timeout`](LedgerError::Timeout) on a mint as per-unit failures;
/// everything is recoverable at the job level except a failed
/// authorization precondition, which the worker checks separately.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Network-level failure reaching the JSON-RPC endpoint.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The RPC call itself failed (e.g. `actNotFound`).
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The ledger rejected the transaction with an engine result.
    #[error("Transaction rejected: {engine_result}: {message}")]
    Rejected {
        engine_result: String,
        message: String,
    },

    /// The transaction was submitted but did not validate in time.
    /// Its fate is unknown; the caller counts it as a failed unit.
    #[error("Transaction {tx_hash} not validated within the submit timeout")]
    Timeout { tx_hash: String },

    /// The response did not have the expected shape.
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl From<reqwest::Error> for LedgerError {
    fn from(err: reqwest::Error) -> Self {
        LedgerError::Transport(err.to_string())
    }
}
