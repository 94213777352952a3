//! Test fixtures: an in-memory ledger and row builders.

use async_trait::async_trait;
use soundmint_core::token_uri::encode_token_uri;
use soundmint_core::types::DbId;
use soundmint_db::models::release::CreateRelease;
use soundmint_db::models::sale::CreateSale;
use soundmint_db::models::track::CreateTrack;
use soundmint_ledger::{LedgerClient, LedgerError, LedgerNft, MintOutcome, MintRequest};

pub const ARTIST: &str = "rArtistArtistArtistArtistArtist";
pub const BUYER: &str = "rBuyerBuyerBuyerBuyerBuyerBuyer";
pub const PLATFORM: &str = "rPlatformPlatformPlatformPlatfo";

/// A ledger whose wallet holdings are fixed up front. Minting is not
/// part of reconciliation, so it is unsupported here.
pub struct FixedLedger {
    pub wallet_tokens: Vec<LedgerNft>,
}

#[async_trait]
impl LedgerClient for FixedLedger {
    async fn account_nfts(&self, _address: &str) -> Result<Vec<LedgerNft>, LedgerError> {
        Ok(self.wallet_tokens.clone())
    }

    async fn mint_nft(&self, _request: &MintRequest) -> Result<MintOutcome, LedgerError> {
        Err(LedgerError::Rpc("minting not supported by FixedLedger".into()))
    }

    async fn verify_minter(
        &self,
        _issuer: &str,
        _expected_minter: &str,
    ) -> Result<bool, LedgerError> {
        Ok(true)
    }
}

/// A wallet-held token carrying the given plain URI.
pub fn wallet_token(id: &str, uri: &str) -> LedgerNft {
    LedgerNft {
        token_id: id.to_string(),
        issuer: ARTIST.to_string(),
        uri_hex: Some(encode_token_uri(uri)),
        taxon: 0,
        nft_serial: 1,
    }
}

pub fn new_release(title: &str, release_type: &str) -> CreateRelease {
    CreateRelease {
        title: title.to_string(),
        artist_address: ARTIST.to_string(),
        release_type: Some(release_type.to_string()),
        mint_fee_paid: None,
    }
}

pub fn new_track(release_id: DbId, index: i32, uri: &str) -> CreateTrack {
    CreateTrack {
        release_id,
        title: format!("Track {index}"),
        track_index: index,
        metadata_uri: Some(uri.to_string()),
    }
}

pub fn new_sale(track_id: DbId, release_id: DbId, token_id: &str) -> CreateSale {
    CreateSale {
        track_id,
        release_id,
        token_id: token_id.to_string(),
        buyer_address: BUYER.to_string(),
        seller_address: PLATFORM.to_string(),
        price_drops: 25_000_000,
        fee_drops: None,
        tx_hash: None,
        sale_type: None,
    }
}
