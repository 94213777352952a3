//! Shared test harness: router construction and request helpers.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use soundmint_api::config::ServerConfig;
use soundmint_api::router::build_app_router;
use soundmint_api::state::AppState;
use soundmint_ledger::{LedgerClient, LedgerError, LedgerNft, MintOutcome, MintRequest};

pub const PLATFORM: &str = "rPlatformPlatformPlatformPlatfo";

/// A ledger stub for endpoints that never reach the ledger. The
/// reconciliation trigger sees an empty wallet.
pub struct NullLedger;

#[async_trait]
impl LedgerClient for NullLedger {
    async fn account_nfts(&self, _address: &str) -> Result<Vec<LedgerNft>, LedgerError> {
        Ok(Vec::new())
    }

    async fn mint_nft(&self, _request: &MintRequest) -> Result<MintOutcome, LedgerError> {
        Err(LedgerError::Rpc("no ledger in tests".into()))
    }

    async fn verify_minter(
        &self,
        _issuer: &str,
        _expected_minter: &str,
    ) -> Result<bool, LedgerError> {
        Ok(true)
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        unit_cap: 500,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through [`build_app_router`] so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ledger: Arc::new(NullLedger),
        platform_wallet: PLATFORM.to_string(),
    };
    build_app_router(state, &config)
}

pub fn new_release(title: &str, artist_address: &str) -> soundmint_db::models::release::CreateRelease {
    soundmint_db::models::release::CreateRelease {
        title: title.to_string(),
        artist_address: artist_address.to_string(),
        release_type: None,
        mint_fee_paid: Some(true),
    }
}

pub fn new_track(release_id: i64, index: i32) -> soundmint_db::models::track::CreateTrack {
    soundmint_db::models::track::CreateTrack {
        release_id,
        title: format!("Track {index}"),
        track_index: index,
        metadata_uri: Some(format!("ipfs://QmTrack{index}")),
    }
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response's status and return its parsed JSON body.
pub async fn assert_status_json(
    response: Response<Body>,
    expected: StatusCode,
) -> serde_json::Value {
    assert_eq!(response.status(), expected);
    body_json(response).await
}
