use crate::app::AppContext;
use crate::tests::utils::{
    body_string, get, init_test_app, init_test_app_with, location, post_form, sign_in, PNG_1PX,
};
use std::time::{Duration, Instant};

fn valid_donation<'a>(image: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("medicineName", "Amoxicillin 250mg"),
        ("brand", "Amoxil"),
        ("expiryDate", "2027-03-01"),
        ("quantity", "2"),
        ("description", ""),
        ("ngoSelection", "medical-relief"),
        ("image", image),
    ]
}

#[test]
fn donate_form_lists_recipients() {
    let app = init_test_app();
    let body = body_string(get(&app, "/donate"));
    assert!(body.contains("Medicine Donation Form"));
    assert!(body.contains("Medicaid Foundation"));
    assert!(body.contains("Red Cross Medical Division"));
}

#[test]
fn recipient_is_required() {
    let app = init_test_app();
    sign_in(&app);
    let mut pairs = valid_donation(PNG_1PX);
    pairs.retain(|(k, _)| *k != "ngoSelection");

    let resp = post_form(&app, "/donate", &pairs);
    assert_eq!(resp.status(), 422);
    assert!(body_string(resp).contains("Please select an NGO"));
}

#[test]
fn signed_out_donation_needs_authentication() {
    let app = init_test_app();
    let resp = post_form(&app, "/donate", &valid_donation(PNG_1PX));
    assert_eq!(resp.status(), 401);
    assert!(body_string(resp).contains("Please sign in to donate a medicine"));
}

#[test]
fn valid_donation_redirects_to_profile() {
    let app = init_test_app();
    sign_in(&app);

    let resp = post_form(&app, "/donate", &valid_donation(PNG_1PX));
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/profile");

    let body = body_string(get(&app, "/profile"));
    assert!(body.contains("Donation submitted successfully"));
}

#[test]
fn sign_out_during_submission_cancels_it() {
    let app = init_test_app_with(|cfg| cfg.forms.submit_delay_ms = 30_000);
    sign_in(&app);
    let ctx: &AppContext = &app.ctx;

    std::thread::scope(|s| {
        let pending = s.spawn(|| post_form(&app, "/donate", &valid_donation(PNG_1PX)));

        let deadline = Instant::now() + Duration::from_secs(5);
        while ctx.submissions.pending() == 0 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(ctx.submissions.pending(), 1);

        let resp = post_form(&app, "/auth/logout", &[]);
        assert_eq!(resp.status(), 303);

        let resp = pending.join().unwrap();
        assert_eq!(resp.status(), 200);
        let body = body_string(resp);
        assert!(body.contains("Submission cancelled"));
        assert!(!body.contains("Donation submitted successfully"));
    });
}
