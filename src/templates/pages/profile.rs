// templates/pages/profile.rs

use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::auth::SessionUser;
use crate::domain::{format_price, DerivedPricing, MedicineRecord};
use crate::templates::{
    components::{card, expiry_badge, link_button, submit_button, ButtonSize, ButtonStyle, ButtonVariant},
    desktop_layout, PageChrome,
};

/// Sample activity shown on the dashboard. Taken from fixed catalog windows.
pub struct ProfileVm<'a> {
    pub user: &'a SessionUser,
    pub active_listings: &'a [MedicineRecord],
    pub purchases: &'a [MedicineRecord],
    pub wishlist: &'a [MedicineRecord],
    pub donations: usize,
    pub now: DateTime<Utc>,
}

pub fn profile_page(chrome: &PageChrome, vm: &ProfileVm) -> Markup {
    desktop_layout(
        chrome,
        html! {
            main class="container profile" {
                div class="profile-grid" {
                    (sidebar(vm.user))
                    div class="profile-main" {
                        h1 { "My Profile" }
                        div class="stats" {
                            (stat("Active Listings", vm.active_listings.len()))
                            (stat("Purchases", vm.purchases.len()))
                            (stat("Wishlist", vm.wishlist.len()))
                            (stat("Donations", vm.donations))
                        }
                        (record_list(
                            "Active Listings",
                            vm.active_listings,
                            vm.now,
                            ("You don't have any active listings.", "/sell", "List a Medicine"),
                        ))
                        (record_list(
                            "Recent Purchases",
                            vm.purchases,
                            vm.now,
                            ("You haven't made any purchases yet.", "/buy", "Browse Medicines"),
                        ))
                        (record_list(
                            "Wishlist",
                            vm.wishlist,
                            vm.now,
                            ("Your wishlist is empty.", "/buy", "Add Medicines"),
                        ))
                    }
                }
            }
        },
    )
}

/// Shown at `/profile` when nobody is signed in.
pub fn sign_in_prompt_page(chrome: &PageChrome) -> Markup {
    desktop_layout(
        chrome,
        html! {
            main class="container narrow profile-signed-out" {
                h1 { "My Profile" }
                p class="lead" { "Sign in to see your listings, purchases and donations." }
                form method="post" action="/auth/login" {
                    input type="hidden" name="provider" value="google";
                    (submit_button("Sign in with Google", ButtonStyle::PRIMARY.size(ButtonSize::Large)))
                }
            }
        },
    )
}

fn sidebar(user: &SessionUser) -> Markup {
    html! {
        aside class="card profile-sidebar" {
            @match &user.photo_url {
                Some(url) => {
                    img class="avatar avatar-lg" src=(url) alt=(user.name);
                }
                None => {
                    span class="avatar avatar-lg" { (user.initial()) }
                }
            }
            h2 { (user.name) }
            p class="muted" { (user.email) }
            form method="post" action="/auth/logout" {
                (submit_button("Sign Out", ButtonStyle::new(ButtonVariant::Outline).full_width()))
            }
        }
    }
}

fn stat(label: &str, value: usize) -> Markup {
    html! {
        div class="stat card" {
            span class="stat-value" { (value) }
            span class="stat-label" { (label) }
        }
    }
}

fn record_list(
    title: &str,
    records: &[MedicineRecord],
    now: DateTime<Utc>,
    (empty_text, empty_href, empty_cta): (&str, &str, &str),
) -> Markup {
    card(
        title,
        html! {
            @if records.is_empty() {
                p class="muted" { (empty_text) }
                (link_button(empty_href, empty_cta, ButtonStyle::new(ButtonVariant::Outline)))
            } @else {
                ul class="record-list" {
                    @for rec in records {
                        @let pricing = DerivedPricing::compute(rec, now);
                        li {
                            img src=(rec.image_url) alt=(rec.name) loading="lazy";
                            div {
                                a href=(format!("/medicine/{}", rec.id)) { strong { (rec.name) } }
                                p class="muted" { (rec.brand) }
                                (expiry_badge(&pricing, None))
                            }
                            span class="price-current" { (format_price(pricing.discounted_price)) }
                        }
                    }
                }
            }
        },
    )
}
