// src/domain/pricing.rs
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::medicine::MedicineRecord;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Coarse expiry classification. Negative day counts still land in a bucket;
/// "expired" is a separate display concern (see [`DerivedPricing::is_expired`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryBucket {
    Urgent,
    Soon,
    Safe,
}

impl ExpiryBucket {
    pub fn from_days(days: i64) -> Self {
        if days <= 30 {
            ExpiryBucket::Urgent
        } else if days <= 90 {
            ExpiryBucket::Soon
        } else {
            ExpiryBucket::Safe
        }
    }
}

/// Values derived from a record and the current time. Never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedPricing {
    pub discounted_price: f64,
    pub days_until_expiry: i64,
    pub bucket: ExpiryBucket,
}

impl DerivedPricing {
    pub fn compute(record: &MedicineRecord, now: DateTime<Utc>) -> Self {
        let days_until_expiry = days_until(record.expiry_date, now);
        Self {
            discounted_price: discounted_price(record),
            days_until_expiry,
            bucket: ExpiryBucket::from_days(days_until_expiry),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.days_until_expiry <= 0
    }
}

/// `price * (1 - discount / 100)`, unrounded.
pub fn discounted_price(record: &MedicineRecord) -> f64 {
    record.price * (1.0 - record.discount_percentage / 100.0)
}

/// Whole days from `now` until midnight UTC of `date`, rounded up.
pub fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let expiry = date.and_time(chrono::NaiveTime::MIN).and_utc();
    let millis = (expiry - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// Two-decimal rendering used everywhere a price is shown.
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}
