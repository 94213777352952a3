//! Handlers for the `/releases` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use soundmint_core::error::CoreError;
use soundmint_core::minting::{validate_mint_request, MintJobPayload};
use soundmint_core::types::DbId;
use soundmint_db::models::mint_job::EnqueueMintJob;
use soundmint_db::repositories::{MintJobRepo, ReleaseRepo, TrackRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for enqueueing a batch mint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnqueueMintBody {
    /// Editions to mint per track.
    pub quantity: u32,
    /// Royalty on secondary sales, in basis points.
    #[serde(default)]
    pub transfer_fee_bps: u16,
}

/// Response body: the job handle clients poll with.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintEnqueued {
    pub job_id: String,
    pub total_units: i32,
}

/// POST /api/v1/releases/{id}/mint
///
/// Validate the request, enqueue a mint job, and return 202 with the job
/// handle. The ledger is never touched here; the worker picks the job up
/// on its next poll.
pub async fn enqueue_mint(
    State(state): State<AppState>,
    Path(release_id): Path<DbId>,
    Json(body): Json<EnqueueMintBody>,
) -> AppResult<impl IntoResponse> {
    let release = ReleaseRepo::find_by_id(&state.pool, release_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Release",
            id: release_id,
        }))?;

    let tracks = TrackRepo::for_release(&state.pool, release.id).await?;
    let total_units = validate_mint_request(
        tracks.len(),
        body.quantity,
        body.transfer_fee_bps,
        state.config.unit_cap,
    )?;

    let job = MintJobRepo::enqueue(
        &state.pool,
        &EnqueueMintJob {
            release_id: release.id,
            total_units: total_units as i32,
            payload: MintJobPayload {
                artist_address: release.artist_address.clone(),
                quantity: body.quantity,
                transfer_fee_bps: body.transfer_fee_bps,
            },
        },
    )
    .await?;

    tracing::info!(
        job_id = job.id,
        release_id = release.id,
        total_units = job.total_units,
        "Mint job enqueued",
    );

    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse {
            data: MintEnqueued {
                job_id: job.id.to_string(),
                total_units: job.total_units,
            },
        }),
    ))
}
