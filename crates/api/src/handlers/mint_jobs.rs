//! Handlers for the `/mint-jobs` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use soundmint_core::error::CoreError;
use soundmint_core::types::{DbId, Timestamp};
use soundmint_db::models::mint_job::MintJob;
use soundmint_db::models::status::MintJobStatus;
use soundmint_db::repositories::MintJobRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Live progress of a mint job, shaped for polling clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintJobProgress {
    pub job_id: String,
    pub status: &'static str,
    pub minted: i32,
    pub total: i32,
    /// Seconds since the worker claimed the job; frozen once terminal.
    pub elapsed_secs: i64,
    pub error: Option<String>,
}

impl MintJobProgress {
    fn from_job(job: MintJob) -> Self {
        let elapsed_secs = match (job.started_at, job.completed_at) {
            (Some(start), Some(end)) => (end - start).num_seconds(),
            (Some(start), None) => (Utc::now() - start).num_seconds(),
            _ => 0,
        };

        Self {
            job_id: job.id.to_string(),
            status: status_str(job.status_id),
            minted: job.minted_count,
            total: job.total_units,
            elapsed_secs,
            error: job.error_message,
        }
    }
}

/// A job in the artist notification feed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintJobNotification {
    pub job_id: String,
    pub status: &'static str,
    pub minted: i32,
    pub total: i32,
    pub error: Option<String>,
    pub seen: bool,
    pub created_at: Timestamp,
}

fn status_str(status_id: i16) -> &'static str {
    MintJobStatus::from_id(status_id)
        .map(MintJobStatus::as_str)
        .unwrap_or("unknown")
}

/// GET /api/v1/mint-jobs/{id}
///
/// Live progress for one job. Clients poll this between worker attempts;
/// `minted` only ever grows.
pub async fn get_progress(
    State(state): State<AppState>,
    Path(job_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let job = MintJobRepo::find_by_id(&state.pool, job_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MintJob",
            id: job_id,
        }))?;

    Ok(Json(DataResponse {
        data: MintJobProgress::from_job(job),
    }))
}

/// Query parameters for the notification feed.
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    /// Artist ledger address the feed belongs to.
    pub artist: String,
}

/// GET /api/v1/mint-jobs?artist={address}
///
/// The artist's notification feed: jobs from the last seven days, newest
/// first, with their dismissal flags.
pub async fn list_for_artist(
    State(state): State<AppState>,
    Query(params): Query<FeedQuery>,
) -> AppResult<impl IntoResponse> {
    let jobs = MintJobRepo::list_recent_for_artist(&state.pool, &params.artist).await?;

    let feed: Vec<MintJobNotification> = jobs
        .into_iter()
        .map(|job| MintJobNotification {
            job_id: job.id.to_string(),
            status: status_str(job.status_id),
            minted: job.minted_count,
            total: job.total_units,
            error: job.error_message,
            seen: job.seen,
            created_at: job.created_at,
        })
        .collect();

    Ok(Json(DataResponse { data: feed }))
}

/// Request body for dismissing a notification.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkSeenBody {
    pub artist_address: String,
}

/// POST /api/v1/mint-jobs/{id}/seen
///
/// Dismiss a job notification. Authorization is address matching: the
/// caller's address must equal the artist address in the job payload.
/// Returns 204 on success, 403 on mismatch.
pub async fn mark_seen(
    State(state): State<AppState>,
    Path(job_id): Path<DbId>,
    Json(body): Json<MarkSeenBody>,
) -> AppResult<impl IntoResponse> {
    MintJobRepo::find_by_id(&state.pool, job_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MintJob",
            id: job_id,
        }))?;

    let updated = MintJobRepo::mark_seen(&state.pool, job_id, &body.artist_address).await?;
    if !updated {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot dismiss another artist's notification".into(),
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
