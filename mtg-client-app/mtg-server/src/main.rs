use std::net::SocketAddr;
use std::sync::Arc;

use tower_sessions::MemoryStore;
use tracing::{error, info};

use mtg_api::{build_router, AppState};
use mtg_core::SystemClock;
use mtg_infrastructure::{create_pool, postgres_session_store, run_migrations, PgUserRepository};
use mtg_shared::config::{AppConfig, SessionStoreKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    mtg_shared::telemetry::init_telemetry();

    info!("MTG server starting...");

    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Connecting to database...");
    let pool = create_pool(&config.database).await?;
    run_migrations(&pool).await?;
    info!("Database connection established.");

    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let state = AppState::new(users, Arc::new(SystemClock), &config.session)?;

    let app = match config.session.store {
        SessionStoreKind::Memory => {
            info!("Using in-memory session store");
            build_router(state, MemoryStore::default(), &config.session, &config.app.static_dir)
        }
        SessionStoreKind::Postgres => {
            let (store, _sweeper) = postgres_session_store(pool).await?;
            info!("Using Postgres session store");
            build_router(state, store, &config.session, &config.app.static_dir)
        }
    };

    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
