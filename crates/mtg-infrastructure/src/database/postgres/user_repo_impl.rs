// ============================================================================
// MTG Infrastructure - PostgreSQL User Repository
// File: crates/mtg-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;
use tracing::{debug, info, error};
use chrono::{DateTime, Utc};

use mtg_core::domain::User;
use mtg_core::error::DomainError;
use mtg_core::repositories::UserRepository;
use mtg_shared::utils::mask_email;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding user by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding user by email: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, user: &User) -> Result<User, DomainError> {
        info!("Creating user with email: {}", mask_email(&user.email));

        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, created_at
            "#
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating user: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                if msg.contains("email") {
                    DomainError::EmailAlreadyExists(user.email.clone())
                } else {
                    DomainError::UsernameAlreadyExists(user.username.clone())
                }
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        info!("User created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e: sqlx::Error| {
            error!("Database error starting delete: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting user: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        tx.commit().await.map_err(|e: sqlx::Error| {
            error!("Database error committing user delete: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            // A concurrent request already removed it.
            debug!("User {} was already deleted", id);
        }
        Ok(())
    }
}
