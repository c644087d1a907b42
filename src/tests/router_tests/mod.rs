mod auth_flow_tests;
mod catalog_tests;
mod detail_tests;
mod donate_tests;
mod placeholder_tests;
mod profile_tests;
mod sell_tests;
