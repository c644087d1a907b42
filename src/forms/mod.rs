// src/forms/mod.rs
//
// Field validation shared by the sell and donate flows.

pub mod donate;
pub mod image;
pub mod sell;

use chrono::NaiveDate;
use std::collections::BTreeMap;

pub use donate::{DonationForm, NgoRecipient};
pub use image::{DataUrlPayload, PayloadKind};
pub use sell::SellForm;

/// Inline, per-field validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }
}

/// Why a valid form still cannot be submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionBlocked {
    AuthenticationRequired,
    ImageRequired,
    InvalidImage(String),
}

/// Session and image checks that run after field validation passes.
pub fn require_submission_inputs(
    authenticated: bool,
    raw_image: &str,
    max_image_bytes: usize,
) -> Result<DataUrlPayload, SubmissionBlocked> {
    if !authenticated {
        return Err(SubmissionBlocked::AuthenticationRequired);
    }
    match DataUrlPayload::parse(raw_image, PayloadKind::Image, max_image_bytes) {
        Ok(Some(image)) => Ok(image),
        Ok(None) => Err(SubmissionBlocked::ImageRequired),
        Err(msg) => Err(SubmissionBlocked::InvalidImage(msg)),
    }
}

/// Trimmed text of at least `min` characters.
pub(crate) fn required_text(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    min: usize,
    message: &str,
) -> String {
    let value = raw.trim();
    if value.chars().count() < min {
        errors.add(field, message);
    }
    value.to_string()
}

pub(crate) fn optional_text(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// `YYYY-MM-DD`, as produced by a date input.
pub(crate) fn expiry_date(errors: &mut FieldErrors, field: &'static str, raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.add(field, "Expiry date is required");
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, "Enter a valid date");
            None
        }
    }
}

pub(crate) fn positive_quantity(errors: &mut FieldErrors, field: &'static str, raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.add(field, "Quantity is required");
        return None;
    }
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            errors.add(field, "Quantity must be a positive whole number");
            None
        }
    }
}

pub(crate) fn positive_price(errors: &mut FieldErrors, field: &'static str, raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.add(field, "Price is required");
        return None;
    }
    match raw.parse::<f64>() {
        Ok(p) if p.is_finite() && p > 0.0 => Some(p),
        _ => {
            errors.add(field, "Price must be a positive amount");
            None
        }
    }
}

/// Trim + lowercase, minimal sanity check.
pub(crate) fn email(errors: &mut FieldErrors, field: &'static str, raw: &str) -> String {
    let e = raw.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        errors.add(field, "Valid email is required");
    }
    e
}

/// Look a field up in decoded form pairs; missing fields read as empty.
pub(crate) fn field<'a>(pairs: &'a [(String, String)], name: &str) -> &'a str {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}
