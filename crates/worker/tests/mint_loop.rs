//! Integration tests for the per-job mint loop.
//!
//! Jobs are enqueued and claimed against a real database; the ledger is
//! a scripted mock, so every path through the edition loop is driven by
//! the outcomes we feed it.

mod common;

use std::sync::atomic::Ordering;

use common::{
    minted, minted_unindexed, new_job, new_release, new_track, test_config, ScriptedLedger, ARTIST,
    PLATFORM,
};
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;
use soundmint_db::models::mint_job::MintJob;
use soundmint_db::models::status::MintJobStatus;
use soundmint_db::repositories::{MintJobRepo, NftRepo, ReleaseRepo, TrackRepo};
use soundmint_ledger::LedgerError;
use soundmint_worker::run_job;

async fn enqueue_and_claim(pool: &PgPool, release_id: i64, total: i32, quantity: u32) -> MintJob {
    MintJobRepo::enqueue(pool, &new_job(release_id, total, quantity))
        .await
        .unwrap();
    MintJobRepo::claim_next_pending(pool).await.unwrap().unwrap()
}

async fn nft_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM nfts")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn full_batch_mints_every_edition(pool: PgPool) {
    let release = ReleaseRepo::create(&pool, &new_release("Album")).await.unwrap();
    let track_a = TrackRepo::create(&pool, &new_track(release.id, 1)).await.unwrap();
    let track_b = TrackRepo::create(&pool, &new_track(release.id, 2)).await.unwrap();

    let ledger = ScriptedLedger::new(
        true,
        (1..=6).map(|n| minted(&format!("000TOKEN{n:04}"))).collect(),
    );
    let job = enqueue_and_claim(&pool, release.id, 6, 3).await;

    let cancel = CancellationToken::new();
    run_job(&pool, &ledger, &test_config(), PLATFORM, job.clone(), &cancel).await;

    let row = MintJobRepo::find_by_id(&pool, job.id).await.unwrap().unwrap();
    assert_eq!(row.status_id, MintJobStatus::Complete.id());
    assert_eq!(row.minted_count, 6);
    assert!(row.completed_at.is_some());

    assert_eq!(nft_count(&pool).await, 6);
    assert_eq!(ledger.mint_calls.load(Ordering::SeqCst), 6);

    // Editions 1..=3 per track, track and release totals updated.
    for (i, track_id) in [track_a.id, track_b.id].into_iter().enumerate() {
        let track = TrackRepo::for_release(&pool, release.id).await.unwrap()[i].clone();
        assert_eq!(track.total_editions, 3);
        for edition in 1..=3 {
            let token = format!("000TOKEN{:04}", i * 3 + edition);
            let unit = NftRepo::find_by_token_id(&pool, &token).await.unwrap().unwrap();
            assert_eq!(unit.track_id, track_id);
            assert_eq!(unit.edition_number, edition as i32);
            assert_eq!(unit.owner_address, PLATFORM);
        }
    }
    let release = ReleaseRepo::find_by_id(&pool, release.id).await.unwrap().unwrap();
    assert_eq!(release.total_editions, 6);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unauthorized_artist_fails_before_any_mint(pool: PgPool) {
    let release = ReleaseRepo::create(&pool, &new_release("Single")).await.unwrap();
    TrackRepo::create(&pool, &new_track(release.id, 1)).await.unwrap();

    let ledger = ScriptedLedger::new(false, vec![]);
    let job = enqueue_and_claim(&pool, release.id, 3, 3).await;

    run_job(&pool, &ledger, &test_config(), PLATFORM, job.clone(), &CancellationToken::new())
        .await;

    let row = MintJobRepo::find_by_id(&pool, job.id).await.unwrap().unwrap();
    assert_eq!(row.status_id, MintJobStatus::Failed.id());
    assert_eq!(row.minted_count, 0);
    assert!(row.error_message.unwrap().contains("authorized"));

    assert_eq!(nft_count(&pool).await, 0);
    assert_eq!(ledger.mint_calls.load(Ordering::SeqCst), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn platform_owned_release_skips_delegation_check(pool: PgPool) {
    let release = ReleaseRepo::create(&pool, &new_release("House Single")).await.unwrap();
    TrackRepo::create(&pool, &new_track(release.id, 1)).await.unwrap();

    // verify_minter would say no, but the artist IS the platform wallet.
    let ledger = ScriptedLedger::new(false, vec![minted("000TOKENSELF")]);
    let job = enqueue_and_claim(&pool, release.id, 1, 1).await;

    run_job(&pool, &ledger, &test_config(), ARTIST, job.clone(), &CancellationToken::new()).await;

    let row = MintJobRepo::find_by_id(&pool, job.id).await.unwrap().unwrap();
    assert_eq!(row.status_id, MintJobStatus::Complete.id());
    assert_eq!(row.minted_count, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn failed_unit_is_skipped_and_job_still_completes(pool: PgPool) {
    let release = ReleaseRepo::create(&pool, &new_release("Single")).await.unwrap();
    TrackRepo::create(&pool, &new_track(release.id, 1)).await.unwrap();

    let ledger = ScriptedLedger::new(
        true,
        vec![
            minted("000TOKEN0001"),
            Err(LedgerError::Timeout {
                tx_hash: "HASHSTUCK".into(),
            }),
            minted("000TOKEN0003"),
        ],
    );
    let job = enqueue_and_claim(&pool, release.id, 3, 3).await;

    run_job(&pool, &ledger, &test_config(), PLATFORM, job.clone(), &CancellationToken::new())
        .await;

    let row = MintJobRepo::find_by_id(&pool, job.id).await.unwrap().unwrap();
    assert_eq!(row.status_id, MintJobStatus::Complete.id());
    assert_eq!(row.minted_count, 2);

    // Only validated mints have inventory rows or count as editions.
    assert_eq!(nft_count(&pool).await, 2);
    let track = &TrackRepo::for_release(&pool, release.id).await.unwrap()[0];
    assert_eq!(track.total_editions, 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unindexed_token_counts_without_inventory_row(pool: PgPool) {
    let release = ReleaseRepo::create(&pool, &new_release("Single")).await.unwrap();
    TrackRepo::create(&pool, &new_track(release.id, 1)).await.unwrap();

    let ledger = ScriptedLedger::new(true, vec![minted("000TOKEN0001"), minted_unindexed()]);
    let job = enqueue_and_claim(&pool, release.id, 2, 2).await;

    run_job(&pool, &ledger, &test_config(), PLATFORM, job.clone(), &CancellationToken::new())
        .await;

    let row = MintJobRepo::find_by_id(&pool, job.id).await.unwrap().unwrap();
    assert_eq!(row.status_id, MintJobStatus::Complete.id());
    // The mint validated on-ledger, so it counts toward progress even
    // though no inventory row could be written.
    assert_eq!(row.minted_count, 2);
    assert_eq!(nft_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_token_id_is_recorded_once(pool: PgPool) {
    let release = ReleaseRepo::create(&pool, &new_release("Single")).await.unwrap();
    TrackRepo::create(&pool, &new_track(release.id, 1)).await.unwrap();

    let ledger = ScriptedLedger::new(true, vec![minted("000TOKENDUP"), minted("000TOKENDUP")]);
    let job = enqueue_and_claim(&pool, release.id, 2, 2).await;

    run_job(&pool, &ledger, &test_config(), PLATFORM, job.clone(), &CancellationToken::new())
        .await;

    let row = MintJobRepo::find_by_id(&pool, job.id).await.unwrap().unwrap();
    assert_eq!(row.status_id, MintJobStatus::Complete.id());
    assert_eq!(row.minted_count, 2);
    assert_eq!(nft_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn shutdown_mid_job_lands_in_failed(pool: PgPool) {
    let release = ReleaseRepo::create(&pool, &new_release("Single")).await.unwrap();
    TrackRepo::create(&pool, &new_track(release.id, 1)).await.unwrap();

    let ledger = ScriptedLedger::new(true, vec![]);
    let job = enqueue_and_claim(&pool, release.id, 3, 3).await;

    let cancel = CancellationToken::new();
    cancel.cancel();
    run_job(&pool, &ledger, &test_config(), PLATFORM, job.clone(), &cancel).await;

    let row = MintJobRepo::find_by_id(&pool, job.id).await.unwrap().unwrap();
    assert_eq!(row.status_id, MintJobStatus::Failed.id());
    assert!(row.error_message.unwrap().contains("shutting down"));
    assert_eq!(ledger.mint_calls.load(Ordering::SeqCst), 0);
}
