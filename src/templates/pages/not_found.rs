// templates/pages/not_found.rs

use maud::Markup;

use crate::templates::{components::error_panel, desktop_layout, PageChrome};

/// Unknown routes and the not-yet-built sections share this view.
pub fn not_found_page(chrome: &PageChrome) -> Markup {
    desktop_layout(
        chrome,
        error_panel(
            "404",
            "Oops! Page not found",
            "/buy",
            "Browse Medicines",
        ),
    )
}

/// Generic failure page. Without chrome (no session available) it renders a
/// signed-out frame.
pub fn error_page(status: u16, message: &str, chrome: Option<&PageChrome>) -> Markup {
    let fallback = PageChrome::new(format!("Error {status}"));
    desktop_layout(
        chrome.unwrap_or(&fallback),
        error_panel(&format!("Error {status}"), message, "/", "Back to home"),
    )
}
