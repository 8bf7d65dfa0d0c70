//! Per-request context populated by the session guard

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use mtg_core::User;

/// The principal for the current request, if any.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    user: Option<User>,
}

impl RequestContext {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// Handlers outside the guard see an anonymous context.
impl<S: Send + Sync> FromRequestParts<S> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default())
    }
}
