use maud::{html, Markup};

use crate::templates::components::{link_button, ButtonStyle};

/// Centered message with a single way out.
pub fn error_panel(heading: &str, message: &str, back_href: &str, back_label: &str) -> Markup {
    html! {
        main class="container narrow error-panel" {
            h1 { (heading) }
            p class="lead" { (message) }
            (link_button(back_href, back_label, ButtonStyle::PRIMARY))
        }
    }
}
