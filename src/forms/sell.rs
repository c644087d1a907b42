// src/forms/sell.rs
use chrono::NaiveDate;

use crate::forms::{self, DataUrlPayload, FieldErrors, PayloadKind};

/// Raw values of the "Sell Medicine" form, as posted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellForm {
    pub medicine_name: String,
    pub brand: String,
    pub expiry_date: String,
    pub quantity: String,
    pub price: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// `data:` URL of the medicine photo.
    pub image: String,
    /// Optional `data:` URL of a receipt or prescription.
    pub document: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetails {
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// A sale listing that passed field validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleListing {
    pub medicine_name: String,
    pub brand: String,
    pub expiry_date: NaiveDate,
    pub quantity: u32,
    pub price: f64,
    pub description: Option<String>,
    pub contact: ContactDetails,
    pub document: Option<DataUrlPayload>,
}

impl SellForm {
    /// Blank form with the contact email pre-filled.
    pub fn prefilled(email: Option<&str>) -> Self {
        Self {
            email: email.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            medicine_name: forms::field(pairs, "medicineName").to_string(),
            brand: forms::field(pairs, "brand").to_string(),
            expiry_date: forms::field(pairs, "expiryDate").to_string(),
            quantity: forms::field(pairs, "quantity").to_string(),
            price: forms::field(pairs, "price").to_string(),
            description: forms::field(pairs, "description").to_string(),
            address: forms::field(pairs, "address").to_string(),
            phone: forms::field(pairs, "phone").to_string(),
            email: forms::field(pairs, "email").to_string(),
            image: forms::field(pairs, "image").to_string(),
            document: forms::field(pairs, "document").to_string(),
        }
    }

    /// Field-level checks only; session and photo are checked afterwards.
    pub fn validate(&self, max_upload_bytes: usize) -> Result<SaleListing, FieldErrors> {
        let mut errors = FieldErrors::new();

        let medicine_name = forms::required_text(
            &mut errors,
            "medicineName",
            &self.medicine_name,
            3,
            "Medicine name is required",
        );
        let brand = forms::required_text(&mut errors, "brand", &self.brand, 2, "Brand name is required");
        let expiry_date = forms::expiry_date(&mut errors, "expiryDate", &self.expiry_date);
        let quantity = forms::positive_quantity(&mut errors, "quantity", &self.quantity);
        let price = forms::positive_price(&mut errors, "price", &self.price);
        let address = forms::required_text(&mut errors, "address", &self.address, 5, "Address is required");
        let phone = forms::required_text(
            &mut errors,
            "phone",
            &self.phone,
            10,
            "Valid phone number is required",
        );
        let email = forms::email(&mut errors, "email", &self.email);

        let document = match DataUrlPayload::parse(&self.document, PayloadKind::Document, max_upload_bytes) {
            Ok(doc) => doc,
            Err(msg) => {
                errors.add("document", msg);
                None
            }
        };

        match (expiry_date, quantity, price) {
            (Some(expiry_date), Some(quantity), Some(price)) if errors.is_empty() => Ok(SaleListing {
                medicine_name,
                brand,
                expiry_date,
                quantity,
                price,
                description: forms::optional_text(&self.description),
                contact: ContactDetails { address, phone, email },
                document,
            }),
            _ => Err(errors),
        }
    }
}
