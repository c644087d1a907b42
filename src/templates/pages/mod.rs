pub mod catalog;
pub mod detail;
pub mod donate;
pub mod home;
pub mod not_found;
pub mod profile;
pub mod sell;

pub use catalog::{catalog_page, CatalogVm};
pub use detail::{detail_page, medicine_not_found_page};
pub use donate::donate_page;
pub use home::home_page;
pub use not_found::{error_page, not_found_page};
pub use profile::{profile_page, sign_in_prompt_page, ProfileVm};
pub use sell::sell_page;
