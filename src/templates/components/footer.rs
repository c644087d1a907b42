use chrono::{Datelike, Utc};
use maud::{html, Markup};

use crate::templates::components::navbar::brand_mark;

const QUICK_LINKS: [(&str, &str); 5] = [
    ("/buy", "Buy Medicines"),
    ("/sell", "Sell Medicines"),
    ("/donate", "Donate Medicines"),
    ("/emergency", "Emergency Requests"),
    ("/partners", "NGO Partners"),
];

const INFO_LINKS: [(&str, &str); 5] = [
    ("/about", "About Us"),
    ("/verification", "Verification Process"),
    ("/faq", "FAQ"),
    ("/terms", "Terms & Conditions"),
    ("/privacy", "Privacy Policy"),
];

pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="container footer-grid" {
                div {
                    div class="brand" { (brand_mark()) }
                    p { "Buy, sell, and donate unused medicines to help those in need." }
                }
                div {
                    h3 { "Quick Links" }
                    ul {
                        @for (href, label) in QUICK_LINKS {
                            li { a href=(href) { (label) } }
                        }
                    }
                }
                div {
                    h3 { "Information" }
                    ul {
                        @for (href, label) in INFO_LINKS {
                            li { a href=(href) { (label) } }
                        }
                    }
                }
                div {
                    h3 { "Contact Us" }
                    ul {
                        li { a href="mailto:info@remediuse.com" { "info@remediuse.com" } }
                        li { a href="tel:+1234567890" { "+1 (234) 567-890" } }
                    }
                }
            }
            div class="container footer-bottom" {
                p { "© " (Utc::now().year()) " ReMediUse. All rights reserved." }
            }
        }
    }
}
