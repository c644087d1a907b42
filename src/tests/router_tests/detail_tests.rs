use crate::tests::utils::{body_string, get, init_test_app};

#[test]
fn detail_page_shows_pricing_and_facts() {
    let app = init_test_app();
    let resp = get(&app, "/medicine/med-001");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Paracetamol 500mg"));
    assert!(body.contains("$8.99"));
    assert!(body.contains("$6.74"));
    assert!(body.contains("25% OFF"));
    assert!(body.contains("This medicine comes in"));
    assert!(body.contains("Safety Tips"));
}

#[test]
fn unknown_medicine_is_404_with_catalog_link() {
    let app = init_test_app();
    let resp = get(&app, "/medicine/med-999");
    assert_eq!(resp.status(), 404);

    let body = body_string(resp);
    assert!(body.contains("Medicine Not Found"));
    assert!(body.contains("href=\"/buy\""));
}

#[test]
fn nested_medicine_path_is_not_found() {
    let app = init_test_app();
    assert_eq!(get(&app, "/medicine/med-001/extra").status(), 404);
    assert_eq!(get(&app, "/medicine/").status(), 404);
}
