pub mod catalog;
pub mod medicine;
pub mod pricing;
pub mod query;

pub use catalog::Catalog;
pub use medicine::{Category, Condition, MedicineRecord};
pub use pricing::{format_price, DerivedPricing, ExpiryBucket};
pub use query::{query_catalog, FilterState, SortKey};
