mod common;

use axum::http::StatusCode;

use common::{body_text, location, session_cookie, TestApp};

#[tokio::test]
async fn test_home_redirects_to_card_search() {
    let app = TestApp::new();
    let response = app.get("/", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/cs/card-search"));
}

#[tokio::test]
async fn test_contact_us_renders() {
    let app = TestApp::new();
    let response = app.get("/contact-us", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Contact Us"));
    assert!(!body.contains("/update-last-activity"));
}

#[tokio::test]
async fn test_heartbeat_script_only_for_signed_in_users() {
    let app = TestApp::new();
    let cookie = app.demo_login().await;
    let body = body_text(app.get("/contact-us", Some(&cookie)).await).await;
    assert!(body.contains("/update-last-activity"));
}

#[tokio::test]
async fn test_unknown_path_renders_not_found() {
    let app = TestApp::new();
    let response = app.get("/no/such/page", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("404"));
}

#[tokio::test]
async fn test_login_with_wrong_password_is_rejected() {
    let app = TestApp::new();
    app.seed_user("jaya", "jaya@example.com", "fireball1").await;

    let response = app
        .post_form("/acct/login", "email=jaya@example.com&password=wrong", None)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(response).await.contains("Invalid email or password."));
}

#[tokio::test]
async fn test_login_redirects_home() {
    let app = TestApp::new();
    app.seed_user("jaya", "jaya@example.com", "fireball1").await;

    let response = app
        .post_form("/acct/login", "email=JAYA@example.com&password=fireball1", None)
        .await;
    assert_eq!(location(&response).as_deref(), Some("/"));
    assert!(session_cookie(&response).is_some());
}

#[tokio::test]
async fn test_signup_starts_a_session() {
    let app = TestApp::new();
    let response = app
        .post_form(
            "/acct/signup",
            "username=teferi&email=teferi@example.com&password=timetwister",
            None,
        )
        .await;
    assert_eq!(location(&response).as_deref(), Some("/"));
    assert!(app.users.contains_email("teferi@example.com"));

    let cookie = session_cookie(&response).unwrap();
    let body = body_text(app.get("/contact-us", Some(&cookie)).await).await;
    assert!(body.contains("teferi"));
}

#[tokio::test]
async fn test_signup_cannot_claim_demo_email() {
    let app = TestApp::new();
    let response = app
        .post_form(
            "/acct/signup",
            "username=sneaky&email=demo@example.com&password=timetwister",
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!app.users.contains_email("demo@example.com"));
}

#[tokio::test]
async fn test_signup_rejects_short_password() {
    let app = TestApp::new();
    let response = app
        .post_form("/acct/signup", "username=ajani&email=ajani@example.com&password=abc", None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Password is too short."));
    assert_eq!(app.users.len(), 0);
}

#[tokio::test]
async fn test_logout_clears_principal() {
    let app = TestApp::new();
    let cookie = app.demo_login().await;

    let response = app.post("/acct/logout", Some(&cookie)).await;
    assert_eq!(location(&response).as_deref(), Some("/acct/login"));

    let body = body_text(app.get("/contact-us", Some(&cookie)).await).await;
    assert!(body.contains("Log in"));
    // Logging out is not an expiry; the demo account stays.
    assert!(app.users.contains_email("demo@example.com"));
}

#[tokio::test]
async fn test_health_reports_ok() {
    let app = TestApp::new();
    let response = app.get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
}
