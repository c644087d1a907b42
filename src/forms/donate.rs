// src/forms/donate.rs
use chrono::NaiveDate;

use crate::forms::{self, FieldErrors};

/// Organisations that can receive a donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NgoRecipient {
    MedicaidFoundation,
    HealthcareForAll,
    MedicalRelief,
    CommunityClinic,
    RedCross,
}

impl NgoRecipient {
    pub const ALL: [NgoRecipient; 5] = [
        NgoRecipient::MedicaidFoundation,
        NgoRecipient::HealthcareForAll,
        NgoRecipient::MedicalRelief,
        NgoRecipient::CommunityClinic,
        NgoRecipient::RedCross,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            NgoRecipient::MedicaidFoundation => "medicaid-foundation",
            NgoRecipient::HealthcareForAll => "healthcare-for-all",
            NgoRecipient::MedicalRelief => "medical-relief",
            NgoRecipient::CommunityClinic => "community-clinic",
            NgoRecipient::RedCross => "red-cross",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NgoRecipient::MedicaidFoundation => "Medicaid Foundation",
            NgoRecipient::HealthcareForAll => "Healthcare For All NGO",
            NgoRecipient::MedicalRelief => "Medical Relief International",
            NgoRecipient::CommunityClinic => "Community Health Clinic",
            NgoRecipient::RedCross => "Red Cross Medical Division",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.slug() == s.trim())
    }
}

/// Raw values of the "Donate Medicine" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationForm {
    pub medicine_name: String,
    pub brand: String,
    pub expiry_date: String,
    pub quantity: String,
    pub description: String,
    pub ngo: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub medicine_name: String,
    pub brand: String,
    pub expiry_date: NaiveDate,
    pub quantity: u32,
    pub description: Option<String>,
    pub recipient: NgoRecipient,
}

impl DonationForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            medicine_name: forms::field(pairs, "medicineName").to_string(),
            brand: forms::field(pairs, "brand").to_string(),
            expiry_date: forms::field(pairs, "expiryDate").to_string(),
            quantity: forms::field(pairs, "quantity").to_string(),
            description: forms::field(pairs, "description").to_string(),
            ngo: forms::field(pairs, "ngoSelection").to_string(),
            image: forms::field(pairs, "image").to_string(),
        }
    }

    pub fn validate(&self) -> Result<Donation, FieldErrors> {
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
        let recipient = NgoRecipient::from_slug(&self.ngo);
        if recipient.is_none() {
            errors.add("ngoSelection", "Please select an NGO");
        }

        match (expiry_date, quantity, recipient) {
            (Some(expiry_date), Some(quantity), Some(recipient)) if errors.is_empty() => Ok(Donation {
                medicine_name,
                brand,
                expiry_date,
                quantity,
                description: forms::optional_text(&self.description),
                recipient,
            }),
            _ => Err(errors),
        }
    }
}
