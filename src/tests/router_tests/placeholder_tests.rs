use crate::router::PLACEHOLDER_ROUTES;
use crate::tests::utils::{body_string, get, init_test_app, post_form};

#[test]
fn placeholder_routes_render_not_found() {
    let app = init_test_app();
    for path in PLACEHOLDER_ROUTES {
        let resp = get(&app, path);
        assert_eq!(resp.status(), 404, "{path}");
        let body = body_string(resp);
        assert!(body.contains("Page not found"), "{path}");
        assert!(body.contains("href=\"/buy\""), "{path}");
    }
}

#[test]
fn unknown_route_is_404_with_layout() {
    let app = init_test_app();
    let resp = get(&app, "/definitely/not/here");
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("ReMedi"));
}

#[test]
fn wrong_method_on_known_path_is_405() {
    let app = init_test_app();
    let resp = post_form(&app, "/buy", &[]);
    assert_eq!(resp.status(), 405);
}
