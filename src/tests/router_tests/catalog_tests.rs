use crate::tests::utils::{body_string, get, init_test_app, init_test_app_with};

fn card_ids(body: &str) -> Vec<String> {
    body.match_indices("data-id=\"")
        .map(|(i, m)| {
            let rest = &body[i + m.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

#[test]
fn home_page_loads() {
    let app = init_test_app();
    let resp = get(&app, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Unused Medicines"));
    assert!(body.contains("Why Choose ReMediUse?"));
    assert!(body.contains("How ReMediUse Works"));
}

#[test]
fn catalog_lists_everything_in_seed_order() {
    let app = init_test_app();
    let resp = get(&app, "/buy");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(
        card_ids(&body),
        vec!["med-001", "med-002", "med-003", "med-004", "med-005", "med-006"]
    );
    assert!(body.contains("Showing <strong>6</strong> medicines"));
    assert!(!body.contains("Clear All"));
}

#[test]
fn pain_relief_filter_returns_paracetamol_only() {
    let app = init_test_app();
    let body = body_string(get(&app, "/buy?category=Pain+Relief"));

    assert_eq!(card_ids(&body), vec!["med-001"]);
    assert!(body.contains("$6.74"));
    assert!(body.contains("Clear All"));
}

#[test]
fn configured_seed_above_slider_maximum_stays_visible_after_clear_all() {
    let mut seed: serde_json::Value =
        serde_json::from_str(include_str!("../../../data/medicines.json")).unwrap();
    seed[5]["price"] = serde_json::json!(49.99);
    seed[5]["discountPercentage"] = serde_json::json!(0);

    let seed_dir = tempfile::tempdir().unwrap();
    let seed_path = seed_dir.path().join("seed.json");
    std::fs::write(&seed_path, seed.to_string()).unwrap();
    let app = init_test_app_with(|c| c.catalog.seed_path = Some(seed_path.clone()));

    let body = body_string(get(&app, "/buy"));
    assert_eq!(card_ids(&body).len(), 6);
    assert!(body.contains(r#"name="max_price" min="0" max="50" step="any" value="50""#));

    // a search leaves the price range alone, so Clear All goes straight back
    let body = body_string(get(&app, "/buy?q=x"));
    assert!(body.contains(r#"class="clear-all" href="/buy""#));
    assert!(!body.contains("Price: $"));
    assert_eq!(card_ids(&body_string(get(&app, "/buy"))).len(), 6);
}

#[test]
fn price_sort_orders_by_discounted_price() {
    let app = init_test_app();
    let asc = card_ids(&body_string(get(&app, "/buy?sort=price-low")));
    let mut desc = card_ids(&body_string(get(&app, "/buy?sort=price-high")));
    desc.reverse();

    assert_eq!(asc.len(), 6);
    assert_eq!(asc, desc);
}

#[test]
fn search_with_no_match_shows_empty_state() {
    let app = init_test_app();
    let body = body_string(get(&app, "/buy?q=zzzz-no-such-medicine"));

    assert!(card_ids(&body).is_empty());
    assert!(body.contains("No medicines found"));
    assert!(body.contains("Reset Filters"));
}

#[test]
fn later_prescription_checkbox_wins() {
    let app = init_test_app();
    let body = body_string(get(&app, "/buy?rx=1&no_rx=1"));

    assert!(body.contains("No Prescription ×"));
    assert!(!body.contains("Prescription Required ×"));
}

#[test]
fn static_assets_are_served_with_media_types() {
    let app = init_test_app();

    let css = get(&app, "/static/main.css");
    assert_eq!(css.status(), 200);
    assert_eq!(css.headers()["Content-Type"], "text/css; charset=utf-8");

    let js = get(&app, "/static/forms.js");
    assert_eq!(js.status(), 200);
    assert!(body_string(js).contains("readAsDataURL"));
}
