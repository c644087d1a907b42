use crate::app::AppContext;
use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::domain::Catalog;
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::Arc;
use tempfile::TempDir;

pub const PNG_1PX: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

/// App wired to a throw-away SQLite file, with no artificial delays.
pub struct TestApp {
    pub ctx: AppContext,
    pub db: Database,
    _dir: TempDir,
}

pub fn init_test_app() -> TestApp {
    init_test_app_with(|_| {})
}

pub fn init_test_app_with(tweak: impl FnOnce(&mut AppConfig)) -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test.sqlite3");
    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    let mut config = AppConfig::default();
    config.storage.path = db.path().to_string();
    config.auth.login_delay_ms = 0;
    config.forms.submit_delay_ms = 0;
    tweak(&mut config);

    let catalog = Catalog::load(config.catalog.seed_path.as_deref()).expect("catalog");
    let ctx = AppContext::new(config, catalog, Arc::new(db.clone())).expect("app context");

    TestApp { ctx, db, _dir: dir }
}

pub fn get(app: &TestApp, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, &app.ctx).expect("Failed to handle request")
}

pub fn post_form(app: &TestApp, uri: &str, pairs: &[(&str, &str)]) -> Response {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    handle(req, &app.ctx).expect("Failed to handle request")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub fn sign_in(app: &TestApp) {
    let resp = post_form(app, "/auth/login", &[("provider", "google")]);
    assert_eq!(resp.status(), 303);
    assert!(app.ctx.session.is_authenticated());
}
