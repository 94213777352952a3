//! JSON-RPC client for rippled.
//!
//! [`JsonRpcLedgerClient`] implements [`LedgerClient`] against a rippled
//! node in sign-and-submit mode: the node signs with the platform seed,
//! so no local key material or binary codec is needed. Submitted
//! transactions are polled until they appear in a validated ledger.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use soundmint_core::types::{LedgerAddress, TokenId};

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::meta::extract_minted_token_id;

/// `tfTransferable`: minted tokens can be sold on to third parties.
const TF_TRANSFERABLE: u32 = 0x0000_0008;

/// Delay between `tx` polls while waiting for validation. Ledgers close
/// every few seconds, so finer polling only burns requests.
const VALIDATION_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// One NFT from an `account_nfts` page.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerNft {
    #[serde(rename = "NFTokenID")]
    pub token_id: TokenId,
    #[serde(rename = "Issuer")]
    pub issuer: LedgerAddress,
    /// Hex-encoded URI; absent for tokens minted without one.
    #[serde(rename = "URI")]
    pub uri_hex: Option<String>,
    #[serde(rename = "NFTokenTaxon")]
    pub taxon: u32,
    pub nft_serial: u32,
}

/// Parameters for one mint transaction.
#[derive(Debug, Clone)]
pub struct MintRequest {
    /// Artist account recorded as the token's issuer, when different
    /// from the platform wallet. Requires the artist to have delegated
    /// minting to the platform (`verify_minter`).
    pub issuer: Option<LedgerAddress>,
    /// Hex-encoded `ipfs://<cid>` metadata pointer.
    pub uri_hex: String,
    /// Royalty on secondary sales, in basis points.
    pub transfer_fee_bps: u16,
    /// Group tag shared by all editions of one release.
    pub taxon: u32,
}

/// Result of a validated mint.
#[derive(Debug, Clone)]
pub struct MintOutcome {
    /// The new token's ID, when it could be located in the transaction
    /// metadata. `None` means minted but unindexed: recoverable, logged.
    pub token_id: Option<TokenId>,
    pub tx_hash: String,
}

/// Operations the marketplace needs from the ledger.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Every NFT currently held by `address`, paging internally until
    /// the marker is exhausted. A page failure surfaces as an error;
    /// a truncated list is never returned silently.
    async fn account_nfts(&self, address: &str) -> Result<Vec<LedgerNft>, LedgerError>;

    /// Build, sign, submit, and wait for a mint to validate.
    async fn mint_nft(&self, request: &MintRequest) -> Result<MintOutcome, LedgerError>;

    /// Whether `issuer` has delegated minting rights to `expected_minter`.
    async fn verify_minter(&self, issuer: &str, expected_minter: &str)
        -> Result<bool, LedgerError>;
}

/// [`LedgerClient`] backed by a rippled JSON-RPC endpoint.
pub struct JsonRpcLedgerClient {
    http: reqwest::Client,
    config: LedgerConfig,
}

impl JsonRpcLedgerClient {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The platform wallet this client submits from.
    pub fn wallet_address(&self) -> &str {
        &self.config.wallet_address
    }

    /// Issue one JSON-RPC call and unwrap its `result` envelope.
    async fn rpc(&self, method: &str, params: Value) -> Result<Value, LedgerError> {
        let body = json!({ "method": method, "params": [params] });
        let response = self
            .http
            .post(&self.config.json_rpc_url)
            .json(&body)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| LedgerError::Transport(e.to_string()))?;

        let envelope: Value = response.json().await?;
        let result = envelope
            .get("result")
            .cloned()
            .ok_or_else(|| LedgerError::Protocol("response has no result field".to_string()))?;

        if result.get("status").and_then(Value::as_str) == Some("error") {
            let message = result
                .get("error_message")
                .or_else(|| result.get("error"))
                .and_then(Value::as_str)
                .unwrap_or("unknown RPC error");
            return Err(LedgerError::Rpc(message.to_string()));
        }

        Ok(result)
    }

    /// Poll `tx` until the transaction validates or the submit timeout
    /// elapses. Returns the validated transaction's `meta`.
    async fn wait_for_validation(&self, tx_hash: &str) -> Result<Value, LedgerError> {
        let deadline =
            tokio::time::Instant::now() + Duration::from_secs(self.config.submit_timeout_secs);

        loop {
            if tokio::time::Instant::now() >= deadline {
                return Err(LedgerError::Timeout {
                    tx_hash: tx_hash.to_string(),
                });
            }
            tokio::time::sleep(VALIDATION_POLL_INTERVAL).await;

            let result = match self.rpc("tx", json!({ "transaction": tx_hash })).await {
                Ok(result) => result,
                // Not indexed yet; keep waiting until the deadline.
                Err(LedgerError::Rpc(_)) => continue,
                Err(other) => return Err(other),
            };

            if result.get("validated").and_then(Value::as_bool) != Some(true) {
                continue;
            }

            let meta = result
                .get("meta")
                .cloned()
                .ok_or_else(|| LedgerError::Protocol("validated tx has no meta".to_string()))?;

            let tx_result = meta
                .get("TransactionResult")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            if tx_result != "tesSUCCESS" {
                return Err(LedgerError::Rejected {
                    engine_result: tx_result.to_string(),
                    message: "transaction failed in a validated ledger".to_string(),
                });
            }

            return Ok(meta);
        }
    }
}

#[async_trait]
impl LedgerClient for JsonRpcLedgerClient {
    async fn account_nfts(&self, address: &str) -> Result<Vec<LedgerNft>, LedgerError> {
        let mut tokens: Vec<LedgerNft> = Vec::new();
        let mut marker: Option<Value> = None;

        loop {
            let mut params = json!({
                "account": address,
                "ledger_index": "validated",
                "limit": self.config.page_limit,
            });
            if let Some(m) = &marker {
                params["marker"] = m.clone();
            }

            let result = self.rpc("account_nfts", params).await?;

            let page = result
                .get("account_nfts")
                .cloned()
                .ok_or_else(|| LedgerError::Protocol("missing account_nfts field".to_string()))?;
            let page: Vec<LedgerNft> = serde_json::from_value(page)
                .map_err(|e| LedgerError::Protocol(format!("malformed account_nfts page: {e}")))?;
            tokens.extend(page);

            match result.get("marker") {
                Some(m) if !m.is_null() => marker = Some(m.clone()),
                _ => break,
            }
        }

        tracing::debug!(address, count = tokens.len(), "Listed account NFTs");
        Ok(tokens)
    }

    async fn mint_nft(&self, request: &MintRequest) -> Result<MintOutcome, LedgerError> {
        let mut tx_json = json!({
            "TransactionType": "NFTokenMint",
            "Account": self.config.wallet_address,
            "URI": request.uri_hex,
            "NFTokenTaxon": request.taxon,
            // The ledger's TransferFee unit is 1/1000 of a percent.
            "TransferFee": u32::from(request.transfer_fee_bps) * 10,
            "Flags": TF_TRANSFERABLE,
        });
        if let Some(issuer) = &request.issuer {
            if issuer != &self.config.wallet_address {
                tx_json["Issuer"] = json!(issuer);
            }
        }

        let result = self
            .rpc(
                "submit",
                json!({
                    "tx_json": tx_json,
                    "secret": self.config.wallet_seed,
                    "fail_hard": true,
                }),
            )
            .await?;

        let engine_result = result
            .get("engine_result")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        if !engine_result.starts_with("tes") {
            let message = result
                .get("engine_result_message")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            return Err(LedgerError::Rejected {
                engine_result,
                message,
            });
        }

        let tx_hash = result
            .get("tx_json")
            .and_then(|t| t.get("hash"))
            .and_then(Value::as_str)
            .ok_or_else(|| LedgerError::Protocol("submit result has no tx hash".to_string()))?
            .to_string();

        let meta = self.wait_for_validation(&tx_hash).await?;
        let token_id = extract_minted_token_id(&meta);
        if token_id.is_none() {
            tracing::warn!(%tx_hash, "Mint validated but NFTokenID not found in metadata");
        }

        Ok(MintOutcome { token_id, tx_hash })
    }

    async fn verify_minter(
        &self,
        issuer: &str,
        expected_minter: &str,
    ) -> Result<bool, LedgerError> {
        let result = self
            .rpc(
                "account_info",
                json!({ "account": issuer, "ledger_index": "validated" }),
            )
            .await?;

        let minter = result
            .get("account_data")
            .and_then(|a| a.get("NFTokenMinter"))
            .and_then(Value::as_str);
        Ok(minter == Some(expected_minter))
    }
}

/// Count platform-held tokens per decoded URI.
///
/// A track's metadata maps to one URI shared by every edition, so this
/// grouping is how reconciliation measures per-track custody. Tokens
/// without a URI, or with undecodable hex, are grouped under nothing
/// and simply never match a track.
pub fn count_tokens_by_uri(tokens: &[LedgerNft]) -> HashMap<String, i32> {
    let mut counts: HashMap<String, i32> = HashMap::new();
    for token in tokens {
        let Some(uri_hex) = &token.uri_hex else {
            continue;
        };
        if let Ok(uri) = soundmint_core::token_uri::decode_token_uri(uri_hex) {
            *counts.entry(uri).or_insert(0) += 1;
        }
    }
    counts
}
