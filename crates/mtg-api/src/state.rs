use std::sync::Arc;

use mtg_core::repositories::UserRepository;
use mtg_core::services::{AuthService, DemoAccountPolicy, IdlePolicy, SessionLifecycle};
use mtg_core::Clock;
use mtg_shared::config::SessionSettings;
use tower_sessions::Expiry;

use crate::error::ApiError;
use crate::templates::Templates;

/// Application state shared across handlers and the session guard
#[derive(Clone)]
pub struct AppState {
    pub lifecycle: Arc<SessionLifecycle<dyn UserRepository>>,
    pub auth: Arc<AuthService<dyn UserRepository>>,
    pub templates: Arc<Templates>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
        settings: &SessionSettings,
    ) -> Result<Self, ApiError> {
        let demo = DemoAccountPolicy::new(settings.demo_account_email.as_str());
        let idle = IdlePolicy::from_minutes(settings.idle_timeout_minutes);

        Ok(Self {
            lifecycle: Arc::new(SessionLifecycle::new(users.clone(), idle, demo.clone())),
            auth: Arc::new(AuthService::new(users, demo)),
            templates: Arc::new(Templates::new()?),
            clock,
        })
    }

    /// Sliding lifetime applied to every session on every request.
    pub fn session_expiry(&self) -> Expiry {
        let timeout = self.lifecycle.idle_policy().timeout();
        Expiry::OnInactivity(time::Duration::seconds(timeout.num_seconds()))
    }
}
