use crate::app::AppContext;
use crate::auth::session::SESSION_STORAGE_KEY;
use crate::auth::SessionState;
use crate::db::KeyValueStorage;
use crate::domain::Catalog;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_app, location, post_form, sign_in};
use astra::Body;
use http::{Method, Request};
use std::sync::Arc;

#[test]
fn login_persists_user_and_queues_welcome() {
    let app = init_test_app();
    assert_eq!(app.ctx.session.state(), SessionState::Unauthenticated);

    let resp = post_form(&app, "/auth/login", &[("provider", "google")]);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");

    let stored = app.db.get_item(SESSION_STORAGE_KEY).unwrap().expect("persisted user");
    assert!(stored.contains("\"photoURL\""));
    assert!(stored.contains("john.doe@example.com"));

    let body = body_string(get(&app, "/"));
    assert!(body.contains("Login successful"));
    assert!(body.contains("Welcome back, John Doe!"));
    assert!(body.contains("action=\"/auth/logout\""));

    // notices are one-shot
    let body = body_string(get(&app, "/"));
    assert!(!body.contains("Login successful"));
}

#[test]
fn logout_restores_signed_out_state() {
    let app = init_test_app();
    sign_in(&app);

    let resp = post_form(&app, "/auth/logout", &[]);
    assert_eq!(resp.status(), 303);
    assert_eq!(app.ctx.session.state(), SessionState::Unauthenticated);
    assert_eq!(app.db.get_item(SESSION_STORAGE_KEY).unwrap(), None);

    let body = body_string(get(&app, "/"));
    assert!(body.contains("Logged out successfully"));
    assert!(body.contains("action=\"/auth/login\""));
}

#[test]
fn unknown_provider_is_rejected() {
    let app = init_test_app();
    let resp = post_form(&app, "/auth/login", &[("provider", "myspace")]);
    assert_eq!(resp.status(), 400);
    assert!(!app.ctx.session.is_authenticated());
}

#[test]
fn login_returns_to_referring_page() {
    let app = init_test_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header("Host", "localhost:3000")
        .header("Referer", "http://localhost:3000/buy?category=Allergy")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from("provider=google"))
        .unwrap();

    let resp = handle(req, &app.ctx).expect("Failed to handle request");
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/buy?category=Allergy");
}

#[test]
fn foreign_referer_is_ignored() {
    let app = init_test_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header("Host", "localhost:3000")
        .header("Referer", "https://evil.example/phish")
        .body(Body::from("provider=google"))
        .unwrap();

    let resp = handle(req, &app.ctx).expect("Failed to handle request");
    assert_eq!(location(&resp), "/");
}

#[test]
fn session_survives_restart() {
    let app = init_test_app();
    sign_in(&app);

    let restarted = AppContext::new(
        app.ctx.config.clone(),
        Catalog::seeded().unwrap(),
        Arc::new(app.db.clone()),
    )
    .unwrap();
    assert_eq!(restarted.session.current_user().unwrap().id, "user123");
}

#[test]
fn corrupt_stored_session_starts_signed_out() {
    let app = init_test_app();
    app.db.set_item(SESSION_STORAGE_KEY, "{not json").unwrap();

    let restarted = AppContext::new(
        app.ctx.config.clone(),
        Catalog::seeded().unwrap(),
        Arc::new(app.db.clone()),
    )
    .unwrap();
    assert_eq!(restarted.session.state(), SessionState::Unauthenticated);
    assert_eq!(app.db.get_item(SESSION_STORAGE_KEY).unwrap(), None);
}
