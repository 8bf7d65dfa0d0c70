use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tower_sessions::{
    cookie::{Key, SameSite},
    SessionManagerLayer, SessionStore,
};
use tracing::warn;

use mtg_security::{derive_cookie_key, generate_token};
use mtg_shared::config::SessionSettings;

use crate::handlers::{activity, auth, health, pages};
use crate::middleware::{check_idle_timeout, refresh_session_policy, resolve_principal};
use crate::state::AppState;

/// Build the application router around the given session store.
///
/// Every route, static files and the not-found fallback included, runs behind
/// the session guard: session layer, then principal resolution, then the
/// expiry refresh, then the idle check.
pub fn build_router<S>(
    state: AppState,
    store: S,
    settings: &SessionSettings,
    static_dir: &str,
) -> Router
where
    S: SessionStore + Clone,
{
    let sessions = SessionManagerLayer::new(store)
        .with_name(settings.cookie_name.clone())
        .with_secure(settings.secure_cookie)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_signed(signing_key(&settings.secret_key));

    let guard = ServiceBuilder::new()
        .layer(sessions)
        .layer(from_fn_with_state(state.clone(), resolve_principal))
        .layer(from_fn_with_state(state.clone(), refresh_session_policy))
        .layer(from_fn_with_state(state.clone(), check_idle_timeout));

    Router::new()
        .route("/", get(pages::home))
        .route("/contact-us", get(pages::contact_us))
        .route("/update-last-activity", post(activity::update_last_activity))
        .route("/acct/login", get(auth::login_form).post(auth::login))
        .route("/acct/signup", get(auth::signup_form).post(auth::signup))
        .route("/acct/demo", post(auth::demo_login))
        .route("/acct/logout", post(auth::logout))
        .route("/health", get(health::health_check))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(pages::not_found)
        .layer(guard)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .with_state(state)
}

fn signing_key(secret: &str) -> Key {
    let secret = if secret.is_empty() {
        warn!("No session secret configured; sessions will not survive a restart");
        generate_token()
    } else {
        secret.to_string()
    };
    Key::from(derive_cookie_key(&secret).as_slice())
}
