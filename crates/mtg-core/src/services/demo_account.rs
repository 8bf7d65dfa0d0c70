//! Demo account policy
//!
//! The demo account is shared and throwaway: it is created on demand by the
//! demo login and deleted when its session idles out.

use mtg_shared::constants::DEMO_ACCOUNT_EMAIL;
use mtg_shared::utils::emails_match;

use crate::domain::User;

#[derive(Debug, Clone)]
pub struct DemoAccountPolicy {
    email: String,
}

impl DemoAccountPolicy {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into().trim().to_lowercase() }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether this user is removed when its session expires.
    pub fn is_ephemeral(&self, user: &User) -> bool {
        emails_match(&user.email, &self.email)
    }
}

impl Default for DemoAccountPolicy {
    fn default() -> Self {
        Self::new(DEMO_ACCOUNT_EMAIL)
    }
}
