//! # MTG Infrastructure
//! 
//! Database and session store implementations (adapters).

pub mod database;
pub mod sessions;

pub use database::{create_pool, run_migrations, PgUserRepository};
pub use sessions::postgres_session_store;
