// ============================================================================
// MTG Core - Session Lifecycle Service
// File: crates/mtg-core/src/services/session_lifecycle.rs
// ============================================================================
//! Principal resolution and idle-expiry handling for the request guard

use std::sync::Arc;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use mtg_shared::parse_id;
use mtg_shared::utils::mask_email;

use crate::domain::User;
use crate::error::DomainError;
use crate::repositories::UserRepository;
use crate::services::{DemoAccountPolicy, IdlePolicy, SessionState};

/// What happened to the principal when its session expired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryOutcome {
    SessionCleared,
    DemoAccountDeleted,
}

pub struct SessionLifecycle<R: UserRepository + ?Sized> {
    users: Arc<R>,
    idle: IdlePolicy,
    demo: DemoAccountPolicy,
}

impl<R: UserRepository + ?Sized> SessionLifecycle<R> {
    pub fn new(users: Arc<R>, idle: IdlePolicy, demo: DemoAccountPolicy) -> Self {
        Self { users, idle, demo }
    }

    pub fn idle_policy(&self) -> &IdlePolicy {
        &self.idle
    }

    /// Look up the user a session points at.
    ///
    /// A missing, malformed, or dangling id resolves to `None`; only
    /// repository failures are errors.
    pub async fn resolve_principal(&self, raw_user_id: Option<&str>) -> Result<Option<User>, DomainError> {
        let Some(raw) = raw_user_id else {
            return Ok(None);
        };

        let Some(id) = parse_id(raw) else {
            debug!("Session holds an unreadable user id, treating as anonymous");
            return Ok(None);
        };

        let user = self.users.find_by_id(&id).await?;
        if user.is_none() {
            debug!("Session user {} no longer exists, treating as anonymous", id);
        }
        Ok(user)
    }

    pub fn check(&self, raw_last_activity: Option<&str>, now: DateTime<Utc>) -> SessionState {
        self.idle.evaluate_raw(raw_last_activity, now)
    }

    /// Run the expiry side effects for the session's principal.
    pub async fn expire(&self, principal: Option<&User>) -> Result<ExpiryOutcome, DomainError> {
        match principal {
            Some(user) if self.demo.is_ephemeral(user) => {
                self.users.delete(&user.id).await?;
                info!(
                    "Deleted demo account {} ({}) after idle timeout",
                    user.id,
                    mask_email(&user.email)
                );
                Ok(ExpiryOutcome::DemoAccountDeleted)
            }
            Some(user) => {
                info!("Session for user {} expired after idle timeout", user.id);
                Ok(ExpiryOutcome::SessionCleared)
            }
            None => {
                debug!("Anonymous session expired after idle timeout");
                Ok(ExpiryOutcome::SessionCleared)
            }
        }
    }
}
