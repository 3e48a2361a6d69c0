// --- File: crates/labbook_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module defines the record store seam of the application: a remote
//! tabular service holding one row per reservation. The trait decouples the
//! grid and booking logic from the concrete spreadsheet backend, so tests can
//! inject an in-memory store instead of a real network dependency.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Status value written into every appended row. Records are never updated
/// or deleted, so this is the only status the system produces.
pub const BOOKED_STATUS: &str = "booked";

/// One persisted reservation row.
///
/// All fields are plain strings because matching is defined as exact string
/// equality over the `date` and `time` columns; the store never interprets
/// them beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date in "YYYY-MM-DD" form.
    pub date: String,
    /// Time slot label, one of "0".."24".
    pub time: String,
    /// Display name of the person holding the reservation.
    pub user: String,
    /// Supervising professor label from the fixed closed set.
    pub professor: String,
    /// Always [`BOOKED_STATUS`] for rows created by this system.
    pub status: String,
}

impl Record {
    /// Build a new reservation row with the fixed "booked" status.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        user: impl Into<String>,
        professor: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            user: user.into(),
            professor: professor.into(),
            status: BOOKED_STATUS.to_string(),
        }
    }
}

/// A trait for record store operations.
///
/// This trait defines the minimal read/append interface the booking flow
/// needs. There is no update or delete path and no conflict detection at
/// this layer; conflict checking is the caller's responsibility.
pub trait RecordStore: Send + Sync {
    /// Error type returned by record store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch every reservation row, in sheet order.
    fn fetch_all(&self) -> BoxFuture<'_, Vec<Record>, Self::Error>;

    /// Append one reservation row.
    fn append(&self, record: Record) -> BoxFuture<'_, (), Self::Error>;
}
