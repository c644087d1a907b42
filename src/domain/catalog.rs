// src/domain/catalog.rs
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::domain::medicine::MedicineRecord;
use crate::domain::query;
use crate::errors::ServerError;

/// Sample listings shipped with the binary.
const SEED_JSON: &str = include_str!("../../data/medicines.json");

/// Read-only list of listings. Order is the "relevance" order.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<MedicineRecord>,
    price_ceiling: f64,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range discounts.
    pub fn new(records: Vec<MedicineRecord>) -> Result<Self, ServerError> {
        let mut seen = HashSet::new();
        for rec in &records {
            if !seen.insert(rec.id.as_str()) {
                return Err(ServerError::CatalogError(format!(
                    "duplicate medicine id {}",
                    rec.id
                )));
            }
            if !(0.0..=100.0).contains(&rec.discount_percentage) {
                return Err(ServerError::CatalogError(format!(
                    "discount for {} out of range: {}",
                    rec.id, rec.discount_percentage
                )));
            }
            if rec.price < 0.0 {
                return Err(ServerError::CatalogError(format!(
                    "negative price for {}",
                    rec.id
                )));
            }
        }
        let price_ceiling = query::price_ceiling(&records);
        Ok(Self {
            records,
            price_ceiling,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ServerError> {
        let records: Vec<MedicineRecord> = serde_json::from_str(json)
            .map_err(|e| ServerError::CatalogError(format!("invalid seed: {e}")))?;
        Self::new(records)
    }

    /// The bundled sample catalog.
    pub fn seeded() -> Result<Self, ServerError> {
        Self::from_json(SEED_JSON)
    }

    /// Bundled seed unless a replacement file is configured.
    pub fn load(seed_path: Option<&Path>) -> Result<Self, ServerError> {
        let catalog = match seed_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    ServerError::CatalogError(format!("Failed to read {}: {e}", path.display()))
                })?;
                Self::from_json(&json)?
            }
            None => Self::seeded()?,
        };
        info!(
            records = catalog.len(),
            price_ceiling = catalog.price_ceiling,
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn records(&self) -> &[MedicineRecord] {
        &self.records
    }

    /// Upper end of the unfiltered price range.
    pub fn price_ceiling(&self) -> f64 {
        self.price_ceiling
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&MedicineRecord> {
        self.records.iter().find(|m| m.id == id)
    }

    /// Other listings in the same category, catalog order, at most `limit`.
    pub fn similar_to(&self, record: &MedicineRecord, limit: usize) -> Vec<&MedicineRecord> {
        self.records
            .iter()
            .filter(|m| m.category == record.category && m.id != record.id)
            .take(limit)
            .collect()
    }

    /// Slice by position, clamped to the catalog length.
    pub fn window(&self, start: usize, end: usize) -> &[MedicineRecord] {
        let end = end.min(self.records.len());
        let start = start.min(end);
        &self.records[start..end]
    }
}
