//! Home redirect, static pages, and the not-found page

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};

use mtg_shared::constants::CARD_SEARCH_PATH;

use crate::context::RequestContext;
use crate::error::ApiError;
use crate::state::AppState;
use crate::templates::{Page, CONTACT_US, NOT_FOUND};

/// GET / - card search is the landing page
pub async fn home() -> Redirect {
    Redirect::to(CARD_SEARCH_PATH)
}

/// GET /contact-us
pub async fn contact_us(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Html<String>, ApiError> {
    state.templates.render(CONTACT_US, &Page::new("Contact Us", &ctx))
}

/// Fallback for unmatched paths
pub async fn not_found(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, ApiError> {
    let page = state.templates.render(NOT_FOUND, &Page::new("Not Found", &ctx))?;
    Ok((StatusCode::NOT_FOUND, page))
}
