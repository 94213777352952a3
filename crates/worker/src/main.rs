use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soundmint_ledger::{JsonRpcLedgerClient, LedgerConfig};
use soundmint_worker::{MintWorker, WorkerConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soundmint_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = soundmint_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    let ledger_config = LedgerConfig::from_env();
    let platform_wallet = ledger_config.wallet_address.clone();
    let ledger = Arc::new(JsonRpcLedgerClient::new(ledger_config));

    let worker = MintWorker::new(pool, ledger, WorkerConfig::from_env(), platform_wallet);

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    worker.run(cancel).await;
}
