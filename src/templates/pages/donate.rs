// templates/pages/donate.rs

use maud::{html, Markup};

use crate::forms::{DonationForm, FieldErrors, NgoRecipient};
use crate::templates::{
    components::{field_error, submit_button, upload_field, ButtonSize, ButtonStyle, FormField, InputKind},
    desktop_layout, PageChrome,
};

const IMPACT_STEPS: [&str; 3] = [
    "Donate unused medicines",
    "NGOs verify and collect them",
    "Medicines reach those in need",
];

const GUIDELINES: [(&str, &str); 4] = [
    (
        "Quality Assurance",
        "Ensure medicines are in good condition with intact packaging.",
    ),
    (
        "Expiry Date",
        "Medicines should have at least 6 months before expiry.",
    ),
    (
        "Verification",
        "All donations are reviewed for compliance with our policies.",
    ),
    (
        "Tax Benefits",
        "You may be eligible for tax benefits for your charitable donation.",
    ),
];

pub fn donate_page(chrome: &PageChrome, form: &DonationForm, errors: &FieldErrors) -> Markup {
    desktop_layout(
        chrome,
        html! {
            main class="container form-page" {
                div class="page-heading" {
                    h1 { "Donate Medicine" }
                    p class="muted" {
                        "Donate your unused medicines to help those in need through verified NGOs and healthcare centers."
                    }
                }
                div class="form-grid" {
                    form class="card" method="post" action="/donate" novalidate {
                        h2 { "Medicine Donation Form" }
                        div class="grid-2" {
                            (FormField::new("medicineName", "Medicine Name *", InputKind::Text, &form.medicine_name)
                                .placeholder("Enter medicine name").render(errors))
                            (FormField::new("brand", "Brand *", InputKind::Text, &form.brand)
                                .placeholder("Enter brand name").render(errors))
                            (FormField::new("expiryDate", "Expiry Date *", InputKind::Date, &form.expiry_date).render(errors))
                            (FormField::new("quantity", "Quantity *", InputKind::Number, &form.quantity)
                                .placeholder("Number of units").render(errors))
                        }
                        (FormField::new("description", "Description", InputKind::TextArea, &form.description)
                            .placeholder("Add additional details about the medicine").render(errors))

                        (upload_field("image", "Medicine Image *", "Upload a clear image of the medicine", "image/*", &form.image, errors))

                        div class=(if errors.get("ngoSelection").is_some() { "field field-invalid" } else { "field" }) {
                            label for="ngoSelection" { "Select NGO or Healthcare Center *" }
                            select id="ngoSelection" name="ngoSelection" {
                                option value="" disabled selected[NgoRecipient::from_slug(&form.ngo).is_none()] {
                                    "Select an organization"
                                }
                                @for ngo in NgoRecipient::ALL {
                                    option value=(ngo.slug()) selected[form.ngo == ngo.slug()] { (ngo.label()) }
                                }
                            }
                            (field_error(errors, "ngoSelection"))
                        }

                        (submit_button("Donate Medicine", ButtonStyle::PRIMARY.size(ButtonSize::Large).full_width()))
                    }
                    div class="side-panels" {
                        aside class="card impact" {
                            h2 { "Make an Impact" }
                            p class="muted" {
                                "Your medicine donation can help save lives and improve healthcare access for those in need."
                            }
                            ol class="impact-steps" {
                                @for step in IMPACT_STEPS {
                                    li { (step) }
                                }
                            }
                        }
                        aside class="card guidelines" {
                            h2 { "Donation Guidelines" }
                            @for (title, body) in GUIDELINES {
                                h3 { (title) }
                                p class="muted" { (body) }
                            }
                        }
                    }
                }
            }
        },
    )
}
