use crate::tests::utils::{
    body_string, get, init_test_app, init_test_app_with, location, post_form, sign_in, PNG_1PX,
};

fn valid_sale<'a>(image: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("medicineName", "Ibuprofen 200mg"),
        ("brand", "Advil"),
        ("expiryDate", "2027-06-30"),
        ("quantity", "20"),
        ("price", "5.25"),
        ("description", "Unopened box"),
        ("address", "42 Harbour Road, Portsmouth"),
        ("phone", "0712345678901"),
        ("email", "seller@example.com"),
        ("image", image),
        ("document", ""),
    ]
}

#[test]
fn sell_form_prefills_session_email() {
    let app = init_test_app();
    sign_in(&app);

    let resp = get(&app, "/sell");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Sell Medicine"));
    assert!(body.contains("value=\"john.doe@example.com\""));
    assert!(body.contains("/static/forms.js"));
}

#[test]
fn invalid_fields_rerender_with_messages() {
    let app = init_test_app();
    let resp = post_form(&app, "/sell", &[("medicineName", "Ab"), ("brand", "Advil")]);
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("Medicine name is required"));
    assert!(body.contains("Expiry date is required"));
    assert!(body.contains("value=\"Advil\""));
}

#[test]
fn signed_out_submission_needs_authentication() {
    let app = init_test_app();
    let resp = post_form(&app, "/sell", &valid_sale(PNG_1PX));
    assert_eq!(resp.status(), 401);

    let body = body_string(resp);
    assert!(body.contains("Authentication required"));
    assert!(body.contains("Please sign in to list a medicine"));
    assert_eq!(app.ctx.submissions.pending(), 0);
}

#[test]
fn missing_image_blocks_submission() {
    let app = init_test_app();
    sign_in(&app);
    let resp = post_form(&app, "/sell", &valid_sale(""));
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Please upload an image of the medicine"));
}

#[test]
fn non_image_payload_is_a_field_error() {
    let app = init_test_app();
    sign_in(&app);
    let resp = post_form(&app, "/sell", &valid_sale("data:text/plain;base64,aGVsbG8="));
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Please upload an image file"));
}

#[test]
fn valid_sale_redirects_to_profile_with_notice() {
    let app = init_test_app();
    sign_in(&app);

    let resp = post_form(&app, "/sell", &valid_sale(PNG_1PX));
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/profile");

    let body = body_string(get(&app, "/profile"));
    assert!(body.contains("Medicine listed successfully"));
    assert!(body.contains("Your medicine has been listed for sale"));

    // nothing is added to the catalog
    assert_eq!(app.ctx.catalog.len(), 6);
}

#[test]
fn oversized_body_is_rejected() {
    let app = init_test_app_with(|cfg| cfg.server.max_body_bytes = 64);
    sign_in(&app);

    let resp = post_form(&app, "/sell", &valid_sale(PNG_1PX));
    assert_eq!(resp.status(), 413);
}
