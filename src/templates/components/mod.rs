pub mod badge;
pub mod button;
pub mod error;
pub mod field;
pub mod footer;
pub mod medicine_card;
pub mod navbar;
pub mod notice;

pub use badge::{badge, expiry_badge, BadgeTone};
pub use button::{link_button, submit_button, ButtonSize, ButtonStyle, ButtonVariant};
pub use error::error_panel;
pub use field::{field_error, upload_field, FormField, InputKind};
pub use footer::footer;
pub use medicine_card::medicine_card;
pub use navbar::{navbar, NavLink};
pub use notice::notice_stack;

use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
