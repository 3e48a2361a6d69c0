// --- File: crates/labbook_sheets/src/service.rs ---
//! Google Sheets record store implementation.
//!
//! This module implements the [`RecordStore`] trait on top of the Sheets
//! client, mapping sheet rows to [`Record`]s through the sheet's header row.

use crate::client::{SheetsClient, SheetsError};
use labbook_common::services::{BoxFuture, Record, RecordStore, BOOKED_STATUS};

/// Column positions resolved from the sheet's header row.
///
/// Columns are located by header name, so the sheet may order them freely.
/// The status column is optional; legacy rows without it read as "booked".
struct ColumnIndices {
    date: usize,
    time: usize,
    user: usize,
    professor: usize,
    status: Option<usize>,
}

fn column_indices(header: &[String]) -> Result<ColumnIndices, SheetsError> {
    let find = |name: &str| -> Result<usize, SheetsError> {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SheetsError::ParseError(format!("Missing '{}' column in header", name)))
    };

    Ok(ColumnIndices {
        date: find("date")?,
        time: find("time")?,
        user: find("user")?,
        professor: find("prof")?,
        status: header.iter().position(|h| h == "status"),
    })
}

/// Maps raw sheet rows to records. The first row is the header; an empty
/// sheet yields an empty record set. Fetch order is preserved, which is what
/// makes the grid builder's first-match tie-break deterministic.
pub(crate) fn rows_to_records(rows: Vec<Vec<String>>) -> Result<Vec<Record>, SheetsError> {
    let mut iter = rows.into_iter();
    let header = match iter.next() {
        Some(header) => header,
        None => return Ok(Vec::new()),
    };
    let cols = column_indices(&header)?;

    let mut records = Vec::new();
    for mut row in iter {
        // Trailing empty cells are omitted from the API response.
        if row.len() < header.len() {
            row.resize(header.len(), String::new());
        }
        let status = cols
            .status
            .map(|i| row[i].clone())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| BOOKED_STATUS.to_string());
        records.push(Record {
            date: std::mem::take(&mut row[cols.date]),
            time: std::mem::take(&mut row[cols.time]),
            user: std::mem::take(&mut row[cols.user]),
            professor: std::mem::take(&mut row[cols.professor]),
            status,
        });
    }
    Ok(records)
}

/// Google Sheets record store implementation.
pub struct SheetsRecordStore {
    client: SheetsClient,
}

impl SheetsRecordStore {
    /// Create a new record store over the given Sheets client.
    pub fn new(client: SheetsClient) -> Self {
        Self { client }
    }
}

impl RecordStore for SheetsRecordStore {
    type Error = SheetsError;

    fn fetch_all(&self) -> BoxFuture<'_, Vec<Record>, Self::Error> {
        Box::pin(async move {
            let rows = self.client.fetch_rows().await?;
            rows_to_records(rows)
        })
    }

    fn append(&self, record: Record) -> BoxFuture<'_, (), Self::Error> {
        Box::pin(async move {
            self.client
                .append_row(vec![
                    record.date,
                    record.time,
                    record.user,
                    record.professor,
                    record.status,
                ])
                .await
        })
    }
}
