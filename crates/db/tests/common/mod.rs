//! Shared fixtures for repository integration tests.

use soundmint_core::minting::MintJobPayload;
use soundmint_core::types::DbId;
use soundmint_db::models::mint_job::EnqueueMintJob;
use soundmint_db::models::release::CreateRelease;
use soundmint_db::models::sale::CreateSale;
use soundmint_db::models::track::CreateTrack;

pub const ARTIST: &str = "rArtistArtistArtistArtistArtist";
pub const BUYER: &str = "rBuyerBuyerBuyerBuyerBuyerBuyer";
pub const PLATFORM: &str = "rPlatformPlatformPlatformPlatfo";

pub fn new_release(title: &str) -> CreateRelease {
    CreateRelease {
        title: title.to_string(),
        artist_address: ARTIST.to_string(),
        release_type: None,
        mint_fee_paid: None,
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

pub fn new_sale(track_id: DbId, release_id: DbId, token_id: &str) -> CreateSale {
    CreateSale {
        track_id,
        release_id,
        token_id: token_id.to_string(),
        buyer_address: BUYER.to_string(),
        seller_address: PLATFORM.to_string(),
        price_drops: 10_000_000,
        fee_drops: None,
        tx_hash: None,
        sale_type: None,
    }
}
