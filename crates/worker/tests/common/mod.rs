//! Test fixtures: a scripted ledger and row builders.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use soundmint_core::minting::MintJobPayload;
use soundmint_core::types::DbId;
use soundmint_db::models::mint_job::EnqueueMintJob;
use soundmint_db::models::release::CreateRelease;
use soundmint_db::models::track::CreateTrack;
use soundmint_ledger::{LedgerClient, LedgerError, LedgerNft, MintOutcome, MintRequest};
use soundmint_worker::WorkerConfig;

pub const ARTIST: &str = "rArtistArtistArtistArtistArtist";
pub const PLATFORM: &str = "rPlatformPlatformPlatformPlatfo";

/// A ledger that replays a scripted sequence of mint outcomes.
pub struct ScriptedLedger {
    authorized: bool,
    outcomes: Mutex<VecDeque<Result<MintOutcome, LedgerError>>>,
    pub mint_calls: AtomicUsize,
}

impl ScriptedLedger {
    pub fn new(authorized: bool, outcomes: Vec<Result<MintOutcome, LedgerError>>) -> Self {
        Self {
            authorized,
            outcomes: Mutex::new(outcomes.into()),
            mint_calls: AtomicUsize::new(0),
        }
    }
}

/// A successful mint of the given token.
pub fn minted(token_id: &str) -> Result<MintOutcome, LedgerError> {
    Ok(MintOutcome {
        token_id: Some(token_id.to_string()),
        tx_hash: format!("HASH{token_id}"),
    })
}

/// A mint that validated but whose token ID could not be extracted.
pub fn minted_unindexed() -> Result<MintOutcome, LedgerError> {
    Ok(MintOutcome {
        token_id: None,
        tx_hash: "HASHLOST".to_string(),
    })
}

#[async_trait]
impl LedgerClient for ScriptedLedger {
    async fn account_nfts(&self, _address: &str) -> Result<Vec<LedgerNft>, LedgerError> {
        Ok(Vec::new())
    }

    async fn mint_nft(&self, _request: &MintRequest) -> Result<MintOutcome, LedgerError> {
        self.mint_calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LedgerError::Rpc("script exhausted".into())))
    }

    async fn verify_minter(
        &self,
        _issuer: &str,
        _expected_minter: &str,
    ) -> Result<bool, LedgerError> {
        Ok(self.authorized)
    }
}

/// Config with no throttle so tests run instantly.
pub fn test_config() -> WorkerConfig {
    WorkerConfig {
        poll_interval: Duration::from_millis(10),
        mint_throttle: Duration::ZERO,
    }
}

pub fn new_release(title: &str) -> CreateRelease {
    CreateRelease {
        title: title.to_string(),
        artist_address: ARTIST.to_string(),
        release_type: None,
        mint_fee_paid: Some(true),
    }
}

pub fn new_track(release_id: DbId, index: i32) -> CreateTrack {
    CreateTrack {
        release_id,
        title: format!("Track {index}"),
        track_index: index,
        metadata_uri: Some(format!("ipfs://QmTrack{index}")),
    }
}

pub fn new_job(release_id: DbId, total_units: i32, quantity: u32) -> EnqueueMintJob {
    EnqueueMintJob {
        release_id,
        total_units,
        payload: MintJobPayload {
            artist_address: ARTIST.to_string(),
            quantity,
            transfer_fee_bps: 500,
        },
    }
}
