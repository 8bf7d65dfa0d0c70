//! Client heartbeat

use axum::{extract::State, http::StatusCode};
use tower_sessions::Session;

use mtg_shared::constants::LAST_ACTIVITY_KEY;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /update-last-activity - stamp the session as active now
pub async fn update_last_activity(
    State(state): State<AppState>,
    session: Session,
) -> Result<StatusCode, ApiError> {
    session
        .insert(LAST_ACTIVITY_KEY, state.clock.now().to_rfc3339())
        .await?;
    Ok(StatusCode::OK)
}
