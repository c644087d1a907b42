// templates/pages/detail.rs

use chrono::{DateTime, NaiveDate, Utc};
use maud::{html, Markup};

use crate::domain::{format_price, DerivedPricing, MedicineRecord};
use crate::templates::{
    components::{badge, error_panel, expiry_badge, link_button, BadgeTone, ButtonSize, ButtonStyle, ButtonVariant},
    desktop_layout, PageChrome,
};

const SAFETY_TIPS: [&str; 4] = [
    "Always check expiry dates before purchase",
    "Verify the medicine's packaging is intact",
    "Consult with your doctor before using new medication",
    "Report any suspicious listings to our support team",
];

/// `12/15/2024`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn detail_page(
    chrome: &PageChrome,
    record: &MedicineRecord,
    similar: &[&MedicineRecord],
    now: DateTime<Utc>,
) -> Markup {
    let pricing = DerivedPricing::compute(record, now);
    let expiry_date = short_date(record.expiry_date);

    desktop_layout(
        chrome,
        html! {
            main class="container detail" {
                p class="breadcrumb" { a href="/buy" { "← Back to medicines" } }
                div class="detail-grid" {
                    div class="detail-media" {
                        img src=(record.image_url) alt=(record.name);
                        (badge(record.category.label(), BadgeTone::Brand))
                    }
                    div class="detail-info" {
                        h1 { (record.name) }
                        p class="muted" { "by " (record.brand) }
                        (expiry_badge(&pricing, Some(&expiry_date)))

                        div class="detail-price" {
                            @if record.has_discount() {
                                s class="price-list" { (format_price(record.price)) }
                            }
                            span class="price-current" { (format_price(pricing.discounted_price)) }
                            @if record.has_discount() {
                                (badge(&format!("{}% OFF", record.discount_percentage), BadgeTone::Accent))
                            }
                        }

                        dl class="facts" {
                            dt { "Quantity" } dd { (record.quantity) " units" }
                            dt { "Condition" } dd { (record.condition.to_string()) }
                            dt { "Listed on" } dd { (short_date(record.listing_date)) }
                            dt { "Prescription" } dd { @if record.prescription { "Required" } @else { "Not Required" } }
                            dt { "Seller" } dd { (record.seller_name) }
                            dt { "Location" } dd { (record.location) }
                        }

                        div class="actions" {
                            button type="button" class=(ButtonStyle::PRIMARY.size(ButtonSize::Large).class()) { "Buy Now" }
                            button type="button" class=(ButtonStyle::new(ButtonVariant::Outline).size(ButtonSize::Large).class()) { "Contact Seller" }
                        }
                    }
                }

                section class="detail-sections" {
                    div class="card" id="description" {
                        h3 { "About this medicine" }
                        p { (record.description) }
                    }
                    div class="card" id="dosage" {
                        h3 { "Dosage Information" }
                        p { "This medicine comes in " (record.dosage) " form." }
                        p class="callout" { "Always follow your doctor's instructions for the correct dosage." }
                    }
                    div class="card" id="safety" {
                        h3 { "Verification & Safety" }
                        p { strong { "Verified by ReMediUse" } }
                        p { "This medicine has been verified for authenticity and compliance." }
                        h4 { "Safety Tips" }
                        ul {
                            @for tip in SAFETY_TIPS {
                                li { (tip) }
                            }
                        }
                    }
                }

                @if !similar.is_empty() {
                    section class="similar" {
                        h2 { "Similar Medicines" }
                        div class="grid-4" {
                            @for med in similar {
                                @let href = format!("/medicine/{}", med.id);
                                div class="card similar-card" {
                                    img src=(med.image_url) alt=(med.name) loading="lazy";
                                    a href=(href) { h3 { (med.name) } }
                                    p class="muted" { (med.brand) }
                                    span class="price-current" {
                                        (format_price(DerivedPricing::compute(med, now).discounted_price))
                                    }
                                    (link_button(&href, "View", ButtonStyle::new(ButtonVariant::Outline).size(ButtonSize::Small)))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn medicine_not_found_page(chrome: &PageChrome) -> Markup {
    desktop_layout(
        chrome,
        error_panel(
            "Medicine Not Found",
            "Sorry, we couldn't find the medicine you're looking for.",
            "/buy",
            "Browse Medicines",
        ),
    )
}
