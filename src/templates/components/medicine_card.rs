use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::domain::{format_price, DerivedPricing, MedicineRecord};
use crate::templates::components::{badge, expiry_badge, link_button, BadgeTone, ButtonStyle};

pub fn medicine_card(record: &MedicineRecord, now: DateTime<Utc>) -> Markup {
    let pricing = DerivedPricing::compute(record, now);
    let href = format!("/medicine/{}", record.id);

    html! {
        article class="medicine-card" data-id=(record.id) {
            div class="medicine-card-media" {
                img src=(record.image_url) alt=(record.name) loading="lazy";
                div class="medicine-card-category" { (badge(record.category.label(), BadgeTone::Brand)) }
                @if record.has_discount() {
                    div class="medicine-card-discount" {
                        (badge(&format!("{}% OFF", record.discount_percentage), BadgeTone::Accent))
                    }
                }
            }
            div class="medicine-card-body" {
                div class="medicine-card-head" {
                    div {
                        a href=(href) { h3 { (record.name) } }
                        p class="muted" { (record.brand) }
                    }
                    div class="price" {
                        @if record.has_discount() {
                            s class="price-list" { (format_price(record.price)) }
                        }
                        span class="price-current" { (format_price(pricing.discounted_price)) }
                    }
                }
                (expiry_badge(&pricing, None))
            }
            div class="medicine-card-footer" {
                (link_button(&href, "View Details", ButtonStyle::PRIMARY.full_width()))
            }
        }
    }
}
