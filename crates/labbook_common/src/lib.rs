// --- File: crates/labbook_common/src/lib.rs ---

// Declare modules within this crate
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export the record store abstractions for easier access
pub use services::{BoxFuture, Record, RecordStore, BOOKED_STATUS};
