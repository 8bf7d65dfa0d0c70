//! Session lifecycle guard
//!
//! Three stages run in order before every route, including the not-found
//! fallback:
//!
//! 1. [`resolve_principal`] loads the session's user into [`RequestContext`].
//! 2. [`refresh_session_policy`] re-applies the sliding idle lifetime.
//! 3. [`check_idle_timeout`] expires idle sessions and answers with a redirect
//!    to the login page instead of running the route.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::Value;
use tower_sessions::Session;
use tracing::debug;

use mtg_core::services::SessionState;
use mtg_shared::constants::{CURRENT_USER_KEY, LAST_ACTIVITY_KEY, LOGIN_PATH};

use crate::context::RequestContext;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn resolve_principal(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let raw_user_id = read_string(&session, CURRENT_USER_KEY).await?;
    let principal = state
        .lifecycle
        .resolve_principal(raw_user_id.as_deref())
        .await?;

    request.extensions_mut().insert(RequestContext::new(principal));
    Ok(next.run(request).await)
}

pub async fn refresh_session_policy(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    // Marks the session modified, so the new deadline is written back.
    session.set_expiry(Some(state.session_expiry()));
    next.run(request).await
}

pub async fn check_idle_timeout(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let last_activity = read_string(&session, LAST_ACTIVITY_KEY).await?;

    match state.lifecycle.check(last_activity.as_deref(), state.clock.now()) {
        SessionState::Active => Ok(next.run(request).await),
        SessionState::Expired => {
            debug!("Idle timeout on {} {}", request.method(), request.uri().path());
            let ctx = request
                .extensions()
                .get::<RequestContext>()
                .cloned()
                .unwrap_or_default();

            let outcome = state.lifecycle.expire(ctx.user()).await?;
            session.flush().await?;
            debug!("Session flushed after idle timeout: {:?}", outcome);
            Ok(Redirect::to(LOGIN_PATH).into_response())
        }
    }
}

/// Read a session value as text. Non-string JSON comes back as its JSON text
/// so that callers reject it instead of treating it as absent.
async fn read_string(session: &Session, key: &str) -> Result<Option<String>, ApiError> {
    let value: Option<Value> = session.get(key).await?;
    Ok(value.map(|v| match v {
        Value::String(s) => s,
        other => other.to_string(),
    }))
}
