//! Shared harness: the real router over an in-memory user table and a manual clock.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use chrono::{TimeZone, Utc};
use dashmap::DashMap;
use tower::ServiceExt;
use tower_sessions::MemoryStore;
use uuid::Uuid;

use mtg_api::{build_router, AppState};
use mtg_core::repositories::UserRepository;
use mtg_core::{DomainError, ManualClock, User};
use mtg_security::PasswordService;
use mtg_shared::config::SessionSettings;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: DashMap<Uuid, User>,
}

impl InMemoryUserRepository {
    pub fn contains_email(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email.eq_ignore_ascii_case(email))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.get(id).map(|u| u.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .map(|u| u.value().clone()))
    }

    async fn create(&self, user: &User) -> Result<User, DomainError> {
        if self.contains_email(&user.email) {
            return Err(DomainError::EmailAlreadyExists(user.email.clone()));
        }
        self.users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.users.remove(id);
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::default());
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        ));
        let settings = SessionSettings {
            secret_key: "test-secret".to_string(),
            ..SessionSettings::default()
        };

        let state = AppState::new(users.clone(), clock.clone(), &settings).unwrap();
        let router = build_router(state, MemoryStore::default(), &settings, "static");

        Self { router, users, clock }
    }

    /// Insert a user directly into storage.
    pub async fn seed_user(&self, username: &str, email: &str, password: &str) -> User {
        let hash = PasswordService::hash(password).unwrap();
        let user = User::new(username.to_string(), email.to_string(), hash).unwrap();
        self.users.create(&user).await.unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response<Body> {
        self.send(request("GET", path, cookie, Body::empty(), None)).await
    }

    pub async fn post(&self, path: &str, cookie: Option<&str>) -> Response<Body> {
        self.send(request("POST", path, cookie, Body::empty(), None)).await
    }

    pub async fn post_form(&self, path: &str, form: &str, cookie: Option<&str>) -> Response<Body> {
        self.send(request(
            "POST",
            path,
            cookie,
            Body::from(form.to_string()),
            Some("application/x-www-form-urlencoded"),
        ))
        .await
    }

    /// Log in through the login form and return the session cookie.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post_form("/acct/login", &format!("email={}&password={}", email, password), None)
            .await;
        assert!(response.status().is_redirection(), "login failed: {}", response.status());
        session_cookie(&response).expect("login sets a session cookie")
    }

    pub async fn demo_login(&self) -> String {
        let response = self.post("/acct/demo", None).await;
        assert!(response.status().is_redirection());
        session_cookie(&response).expect("demo login sets a session cookie")
    }
}

fn request(
    method: &str,
    path: &str,
    cookie: Option<&str>,
    body: Body,
    content_type: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(body).unwrap()
}

/// `name=value` of the first Set-Cookie header, if any.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_string())
}

pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
