//! Postgres-backed session store

use std::time::Duration;

use sqlx::PgPool;
use tokio::task::JoinHandle;
use tower_sessions::session_store::ExpiredDeletion;
use tower_sessions_sqlx_store::PostgresStore;
use tracing::{error, info};

const EXPIRED_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Migrate the session table and start sweeping expired records.
pub async fn postgres_session_store(
    pool: PgPool,
) -> Result<(PostgresStore, JoinHandle<()>), sqlx::Error> {
    let store = PostgresStore::new(pool);
    store.migrate().await?;
    info!("Session store table ready");

    let sweeper = store.clone();
    let handle = tokio::spawn(async move {
        if let Err(e) = sweeper
            .continuously_delete_expired(EXPIRED_SWEEP_INTERVAL)
            .await
        {
            error!("Expired session sweep stopped: {}", e);
        }
    });

    Ok((store, handle))
}
