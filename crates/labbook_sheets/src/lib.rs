// --- File: crates/labbook_sheets/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod client;
#[cfg(test)]
mod client_test;
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod routes;
pub mod service;

// Re-export the routes function to be used by the main backend service
pub use routes::routes;
