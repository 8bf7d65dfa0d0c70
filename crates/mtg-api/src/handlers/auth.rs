// ============================================================================
// MTG API - Account Handlers
// File: crates/mtg-api/src/handlers/auth.rs
// ============================================================================
//! Account HTTP handlers (login, signup, demo login, logout)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use mtg_core::{DomainError, User};
use mtg_shared::constants::{CURRENT_USER_KEY, LAST_ACTIVITY_KEY, LOGIN_PATH};

use crate::context::RequestContext;
use crate::error::ApiError;
use crate::state::AppState;
use crate::templates::{Page, LOGIN, SIGNUP};

/// Login form payload
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signup form payload
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// GET /acct/login
pub async fn login_form(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, ApiError> {
    let page = state.templates.render(LOGIN, &Page::new("Log In", &ctx))?;
    Ok(page.into_response())
}

/// POST /acct/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ctx: RequestContext,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    match state.auth.login(&form.email, &form.password).await {
        Ok(user) => {
            start_session(&state, &session, &user).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(DomainError::InvalidCredentials) => {
            let page = Page::new("Log In", &ctx)
                .with_error("Invalid email or password.")
                .with_email(&form.email);
            let body = state.templates.render(LOGIN, &page)?;
            Ok((StatusCode::UNAUTHORIZED, body).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /acct/signup
pub async fn signup_form(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, ApiError> {
    let page = state.templates.render(SIGNUP, &Page::new("Sign Up", &ctx))?;
    Ok(page.into_response())
}

/// POST /acct/signup
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    ctx: RequestContext,
    Form(form): Form<SignupForm>,
) -> Result<Response, ApiError> {
    let result = state
        .auth
        .signup(&form.username, &form.email, &form.password)
        .await;

    let message = match result {
        Ok(user) => {
            start_session(&state, &session, &user).await?;
            return Ok(Redirect::to("/").into_response());
        }
        Err(DomainError::PasswordTooShort) => "Password is too short.".to_string(),
        Err(DomainError::EmailAlreadyExists(_)) => "That email is already registered.".to_string(),
        Err(DomainError::UsernameAlreadyExists(_)) => "That username is taken.".to_string(),
        Err(DomainError::ValidationError(msg)) => msg,
        Err(e) => return Err(e.into()),
    };

    let page = Page::new("Sign Up", &ctx)
        .with_error(&message)
        .with_email(&form.email)
        .with_username(&form.username);
    let body = state.templates.render(SIGNUP, &page)?;
    Ok((StatusCode::BAD_REQUEST, body).into_response())
}

/// POST /acct/demo - log in as the shared demo account
pub async fn demo_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<Redirect, ApiError> {
    let user = state.auth.demo_login().await?;
    start_session(&state, &session, &user).await?;
    Ok(Redirect::to("/"))
}

/// POST /acct/logout
pub async fn logout(session: Session) -> Result<Redirect, ApiError> {
    session.flush().await?;
    Ok(Redirect::to(LOGIN_PATH))
}

/// Bind the user to a fresh session id and start the idle clock.
async fn start_session(state: &AppState, session: &Session, user: &User) -> Result<(), ApiError> {
    session.cycle_id().await?;
    session.insert(CURRENT_USER_KEY, user.id.to_string()).await?;
    session
        .insert(LAST_ACTIVITY_KEY, state.clock.now().to_rfc3339())
        .await?;
    Ok(())
}
