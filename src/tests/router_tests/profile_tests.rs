use crate::tests::utils::{body_string, get, init_test_app, sign_in};

#[test]
fn signed_out_profile_prompts_sign_in() {
    let app = init_test_app();
    let resp = get(&app, "/profile");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in with Google"));
    assert!(!body.contains("Active Listings"));
}

#[test]
fn signed_in_profile_shows_user_and_activity() {
    let app = init_test_app();
    sign_in(&app);

    let body = body_string(get(&app, "/profile"));
    assert!(body.contains("John Doe"));
    assert!(body.contains("john.doe@example.com"));
    assert!(body.contains("Active Listings"));
    assert!(body.contains("Recent Purchases"));
    assert!(body.contains("Wishlist"));
    // listings are the first three catalog entries
    assert!(body.contains("Lisinopril 10mg"));
}
