// templates/pages/sell.rs

use maud::{html, Markup};

use crate::forms::{FieldErrors, SellForm};
use crate::templates::{
    components::{submit_button, upload_field, ButtonSize, ButtonStyle, FormField, InputKind},
    desktop_layout, PageChrome,
};

const GUIDELINES: [(&str, &str); 5] = [
    (
        "Quality Assurance",
        "Ensure medicines are in good condition with intact packaging.",
    ),
    (
        "Expiry Date",
        "Medicines should have at least 3 months before expiry.",
    ),
    ("Pricing", "Set a fair price based on condition and expiry date."),
    (
        "Verification",
        "All listings are reviewed for compliance with our policies.",
    ),
    (
        "Prescription Medicines",
        "Some medicines require a valid prescription for purchase.",
    ),
];

pub fn sell_page(chrome: &PageChrome, form: &SellForm, errors: &FieldErrors) -> Markup {
    desktop_layout(
        chrome,
        html! {
            main class="container form-page" {
                div class="page-heading" {
                    h1 { "Sell Medicine" }
                    p class="muted" { "List your unused medicines to help others and recover some of your costs." }
                }
                div class="form-grid" {
                    form class="card" method="post" action="/sell" novalidate {
                        h2 { "Medicine Details" }
                        div class="grid-2" {
                            (FormField::new("medicineName", "Medicine Name *", InputKind::Text, &form.medicine_name)
                                .placeholder("Enter medicine name").render(errors))
                            (FormField::new("brand", "Brand *", InputKind::Text, &form.brand)
                                .placeholder("Enter brand name").render(errors))
                            (FormField::new("expiryDate", "Expiry Date *", InputKind::Date, &form.expiry_date).render(errors))
                            (FormField::new("quantity", "Quantity *", InputKind::Number, &form.quantity)
                                .placeholder("Number of units").render(errors))
                            (FormField::new("price", "Price (USD) *", InputKind::Number, &form.price)
                                .placeholder("0.00").render(errors))
                        }
                        (FormField::new("description", "Description", InputKind::TextArea, &form.description)
                            .placeholder("Add additional details about the medicine").render(errors))

                        div class="grid-2" {
                            (upload_field("image", "Medicine Image *", "Upload a clear image of the medicine", "image/*", &form.image, errors))
                            (upload_field("document", "Verification Document", "Upload a document for verification (optional)", "image/*,application/pdf", &form.document, errors))
                        }

                        h2 { "Contact Information" }
                        (FormField::new("address", "Address *", InputKind::Text, &form.address)
                            .placeholder("Enter your address").render(errors))
                        div class="grid-2" {
                            (FormField::new("phone", "Phone Number *", InputKind::Tel, &form.phone)
                                .placeholder("Enter your phone number").render(errors))
                            (FormField::new("email", "Email Address *", InputKind::Email, &form.email)
                                .placeholder("Enter your email address").render(errors))
                        }

                        (submit_button("List Medicine", ButtonStyle::PRIMARY.size(ButtonSize::Large).full_width()))
                    }
                    aside class="card guidelines" {
                        h2 { "Listing Guidelines" }
                        @for (title, body) in GUIDELINES {
                            h3 { (title) }
                            p class="muted" { (body) }
                        }
                    }
                }
            }
        },
    )
}
