// ============================================================================
// MTG Core - Authentication Service
// File: crates/mtg-core/src/services/auth_service.rs
// ============================================================================
//! Authentication service: login, signup, and demo login

use std::sync::Arc;
use tracing::{info, warn};

use mtg_security::{generate_token, PasswordService};
use mtg_shared::constants::{DEMO_ACCOUNT_USERNAME, MIN_PASSWORD_LENGTH};
use mtg_shared::utils::mask_email;

use crate::domain::User;
use crate::error::DomainError;
use crate::repositories::UserRepository;
use crate::services::DemoAccountPolicy;

/// Authentication service for handling user login/signup flows
pub struct AuthService<R: UserRepository + ?Sized> {
    user_repo: Arc<R>,
    demo: DemoAccountPolicy,
}

impl<R: UserRepository + ?Sized> AuthService<R> {
    pub fn new(user_repo: Arc<R>, demo: DemoAccountPolicy) -> Self {
        Self { user_repo, demo }
    }

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let masked = mask_email(email);
        info!("Login attempt for email: {}", masked);

        // 1. Find user by email
        let user = self.user_repo.find_by_email(email.trim()).await?
            .ok_or_else(|| {
                warn!("Login failed: email not found: {}", masked);
                DomainError::InvalidCredentials
            })?;

        // 2. Verify password
        let password_valid = PasswordService::verify(password, &user.password_hash)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        if !password_valid {
            warn!("Login failed: invalid password for: {}", masked);
            return Err(DomainError::InvalidCredentials);
        }

        info!("Login successful for: {}", masked);
        Ok(user)
    }

    /// Register a new user
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> Result<User, DomainError> {
        info!("Signup attempt for email: {}", mask_email(email));

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::PasswordTooShort);
        }

        if self.demo.email().eq_ignore_ascii_case(email.trim()) {
            return Err(DomainError::EmailAlreadyExists(email.trim().to_string()));
        }

        if self.user_repo.find_by_email(email.trim()).await?.is_some() {
            warn!("Signup failed: email already exists: {}", mask_email(email));
            return Err(DomainError::EmailAlreadyExists(email.trim().to_string()));
        }

        self.create_user(username, email, password).await
    }

    /// Log in as the shared demo account, creating it if an earlier timeout removed it.
    pub async fn demo_login(&self) -> Result<User, DomainError> {
        if let Some(user) = self.user_repo.find_by_email(self.demo.email()).await? {
            info!("Demo login reusing account {}", user.id);
            return Ok(user);
        }

        let password = generate_token();
        let username = format!("{}-{}", DEMO_ACCOUNT_USERNAME, &password[..8]);
        let user = self.create_user(&username, self.demo.email(), &password).await?;
        info!("Demo account {} created", user.id);
        Ok(user)
    }

    async fn create_user(&self, username: &str, email: &str, password: &str) -> Result<User, DomainError> {
        let password_hash = PasswordService::hash(password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        let user = User::new(username.to_string(), email.to_string(), password_hash)
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        self.user_repo.create(&user).await
    }
}
