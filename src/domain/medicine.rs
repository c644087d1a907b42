use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single marketplace listing. Seed data only; never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    /// List price in USD.
    pub price: f64,
    /// 0..=100, checked when the catalog is loaded.
    pub discount_percentage: f64,
    pub expiry_date: NaiveDate,
    pub image_url: String,
    pub category: Category,
    pub description: String,
    pub dosage: String,
    pub quantity: u32,
    pub seller_id: String,
    pub seller_name: String,
    pub location: String,
    pub listing_date: NaiveDate,
    pub condition: Condition,
    pub prescription: bool,
}

impl MedicineRecord {
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Pain Relief")]
    PainRelief,
    #[serde(rename = "Antibiotics")]
    Antibiotics,
    #[serde(rename = "Blood Pressure")]
    BloodPressure,
    #[serde(rename = "Allergy")]
    Allergy,
    #[serde(rename = "Digestive Health")]
    DigestiveHealth,
    #[serde(rename = "Vitamins")]
    Vitamins,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::PainRelief,
        Category::Antibiotics,
        Category::BloodPressure,
        Category::Allergy,
        Category::DigestiveHealth,
        Category::Vitamins,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::PainRelief => "Pain Relief",
            Category::Antibiotics => "Antibiotics",
            Category::BloodPressure => "Blood Pressure",
            Category::Allergy => "Allergy",
            Category::DigestiveHealth => "Digestive Health",
            Category::Vitamins => "Vitamins",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Sealed,
    Unopened,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Sealed => f.write_str("Sealed"),
            Condition::Unopened => f.write_str("Unopened"),
        }
    }
}
