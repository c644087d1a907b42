use maud::{html, Markup};

use crate::domain::{DerivedPricing, ExpiryBucket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Brand,
    Accent,
    Danger,
    Warning,
    Success,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Brand => "badge badge-brand",
            BadgeTone::Accent => "badge badge-accent",
            BadgeTone::Danger => "badge badge-danger",
            BadgeTone::Warning => "badge badge-warning",
            BadgeTone::Success => "badge badge-success",
        }
    }

    pub fn for_bucket(bucket: ExpiryBucket) -> Self {
        match bucket {
            ExpiryBucket::Urgent => BadgeTone::Danger,
            ExpiryBucket::Soon => BadgeTone::Warning,
            ExpiryBucket::Safe => BadgeTone::Success,
        }
    }
}

pub fn badge(label: &str, tone: BadgeTone) -> Markup {
    html! {
        span class=(tone.class()) { (label) }
    }
}

/// "Expires in N days" coloured by bucket, or "Expired".
pub fn expiry_badge(pricing: &DerivedPricing, suffix: Option<&str>) -> Markup {
    let label = if pricing.is_expired() {
        "Expired".to_string()
    } else {
        match suffix {
            Some(s) => format!("Expires in {} days ({s})", pricing.days_until_expiry),
            None => format!("Expires in {} days", pricing.days_until_expiry),
        }
    };
    badge(&label, BadgeTone::for_bucket(pricing.bucket))
}
