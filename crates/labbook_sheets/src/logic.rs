// --- File: crates/labbook_sheets/src/logic.rs ---
//! Booking grid core: week computation, grid construction, conflict check
//! and the submission flow.
//!
//! Everything here is a pure function of its inputs except
//! [`submit_booking`], whose only effects are the two record store calls.

use chrono::{Datelike, Duration, NaiveDate};
use labbook_common::services::{Record, RecordStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// --- Fixed label sets ---

/// The 25 bookable hour labels, in display order.
pub const TIME_SLOTS: [&str; 25] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "23", "24",
];

/// The closed set of supervising professor labels offered by the form.
pub const PROFESSORS: [&str; 4] = ["lu", "chen", "tan", "other"];

/// Date format used for record matching and the HTTP surface.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// --- Display states and colors ---

/// Background color for the catch-all "other" label, also the fallback for
/// professor labels outside the fixed set.
const OTHER_COLOR: &str = "#2ecc71";

/// Background color per professor label.
const PROFESSOR_COLORS: [(&str, &str); 4] = [
    ("lu", "#9b59b6"),
    ("chen", "#a04000"),
    ("tan", "#f1c40f"),
    ("other", OTHER_COLOR),
];

/// Background color for a free cell.
pub const FREE_COLOR: &str = "#ffffff";
/// Background color for a past cell.
pub const PAST_COLOR: &str = "#FFFF00";

/// Display state of one grid cell.
///
/// The grid builder emits these tags directly; the presentation layer maps
/// tags to colors through [`display_color`] and never re-parses rendered
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum SlotState {
    /// The cell's day lies strictly before today.
    Past,
    /// No reservation matches this cell.
    Free,
    /// A reservation holds this cell.
    Booked { user: String, professor: String },
}

/// Static color lookup for a display state.
///
/// A professor label outside the fixed set falls back to the "other" color
/// so a hand-edited sheet row still renders.
pub fn display_color(state: &SlotState) -> &'static str {
    match state {
        SlotState::Past => PAST_COLOR,
        SlotState::Free => FREE_COLOR,
        SlotState::Booked { professor, .. } => PROFESSOR_COLORS
            .iter()
            .find(|(label, _)| *label == professor)
            .map(|(_, color)| *color)
            .unwrap_or(OTHER_COLOR),
    }
}

// --- Week grid ---

/// One day column of the grid: a date plus its 25 cells, aligned with
/// [`TIME_SLOTS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid {
    pub date: NaiveDate,
    pub cells: Vec<SlotState>,
}

/// The derived 7-day × 25-slot display table. Recomputed on every render,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    /// The Saturday the week starts on.
    pub week_start: NaiveDate,
    /// Seven day columns, Saturday through Friday.
    pub days: Vec<DayGrid>,
}

impl WeekGrid {
    /// Look up one cell by day index (0 = Saturday) and slot index.
    pub fn cell(&self, day: usize, slot: usize) -> Option<&SlotState> {
        self.days.get(day).and_then(|d| d.cells.get(slot))
    }
}

/// The 7 calendar dates of the week containing `reference`.
///
/// The week runs Saturday through Friday: the first returned date is the
/// Saturday on or before the reference date (the reference itself when it
/// is a Saturday).
pub fn week_dates(reference: NaiveDate) -> [NaiveDate; 7] {
    let offset = (reference.weekday().num_days_from_sunday() + 1) % 7;
    let start = reference - Duration::days(i64::from(offset));
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Builds the week grid for the week containing `reference`.
///
/// Per cell: a day strictly before `today` is `Past` regardless of records;
/// otherwise the first record (in fetch order) whose date and time strings
/// equal the cell's wins; otherwise the cell is `Free`. Duplicate records
/// for one cell are a data anomaly; first-match is a defensive default,
/// not a validated invariant.
pub fn build_week_grid(reference: NaiveDate, records: &[Record], today: NaiveDate) -> WeekGrid {
    let dates = week_dates(reference);
    let days = dates
        .iter()
        .map(|&date| {
            let date_str = date.format(DATE_FORMAT).to_string();
            let cells = TIME_SLOTS
                .iter()
                .map(|&slot| {
                    if date < today {
                        SlotState::Past
                    } else {
                        match records.iter().find(|r| r.date == date_str && r.time == slot) {
                            Some(r) => SlotState::Booked {
                                user: r.user.clone(),
                                professor: r.professor.clone(),
                            },
                            None => SlotState::Free,
                        }
                    }
                })
                .collect();
            DayGrid { date, cells }
        })
        .collect();

    WeekGrid {
        week_start: dates[0],
        days,
    }
}

/// Returns true iff at least one record matches both strings exactly.
pub fn is_slot_taken(date: &str, time: &str, records: &[Record]) -> bool {
    records.iter().any(|r| r.date == date && r.time == time)
}

// --- Booking submission flow ---

/// Why a submission was rejected or failed.
#[derive(Error, Debug)]
pub enum BookingError {
    /// The user name was empty after trimming; nothing was fetched or
    /// appended.
    #[error("User name must not be empty")]
    EmptyName,
    /// A record already holds the requested (date, slot); nothing was
    /// appended.
    #[error("Slot is already booked")]
    SlotTaken,
    /// The record store fetch or append failed.
    #[error("Record store error: {0}")]
    Store(String),
}

/// Runs the submission flow: validate, re-fetch, conflict-check, append.
///
/// The re-fetch immediately before the conflict check narrows (but does not
/// eliminate) the race between two users booking the same slot; there is no
/// locking or compare-and-append at the store boundary. Append is only
/// reached after both validations pass.
pub async fn submit_booking<S>(store: &S, request: &BookSlotRequest) -> Result<(), BookingError>
where
    S: RecordStore + ?Sized,
{
    if request.user.trim().is_empty() {
        return Err(BookingError::EmptyName);
    }

    let records = store
        .fetch_all()
        .await
        .map_err(|e| BookingError::Store(e.to_string()))?;

    if is_slot_taken(&request.date, &request.time, &records) {
        return Err(BookingError::SlotTaken);
    }

    store
        .append(Record::new(
            &request.date,
            &request.time,
            &request.user,
            &request.professor,
        ))
        .await
        .map_err(|e| BookingError::Store(e.to_string()))?;

    Ok(())
}

// --- HTTP data structures ---

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct GridQuery {
    /// Reference date in YYYY-MM-DD format; defaults to the current date
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-06-01"))]
    pub date: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotCell {
    /// Time slot label ("0".."24")
    pub time: String,
    #[serde(flatten)]
    pub state: SlotState,
    /// Background color for this cell, from the static lookup table
    pub color: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DayColumn {
    /// Calendar date in YYYY-MM-DD format
    pub date: String,
    /// Abbreviated weekday name, e.g. "Sat"
    pub weekday: String,
    pub cells: Vec<SlotCell>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LegendEntry {
    /// Professor label, or "free" / "past"
    pub label: String,
    /// Background color shown for cells in this state
    pub color: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GridResponse {
    /// The Saturday the displayed week starts on
    pub week_start: String,
    /// Today's date in the configured time zone
    pub today: String,
    /// The fixed slot labels, for the form's slot selector
    pub time_slots: Vec<String>,
    /// The fixed professor labels, for the form's professor selector
    pub professors: Vec<String>,
    /// The static color legend: one entry per professor plus free and past
    pub legend: Vec<LegendEntry>,
    pub days: Vec<DayColumn>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookSlotRequest {
    /// Reservation date in YYYY-MM-DD format
    pub date: String,
    /// Time slot label, one of the fixed 25-label set
    pub time: String,
    /// Name of the person booking; must be non-empty
    pub user: String,
    /// Supervising professor label, one of the fixed 4-label set
    pub professor: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
}

/// The full color legend, in display order: professors, then free and past.
pub fn color_legend() -> Vec<LegendEntry> {
    PROFESSOR_COLORS
        .iter()
        .map(|&(label, color)| (label, color))
        .chain([("free", FREE_COLOR), ("past", PAST_COLOR)])
        .map(|(label, color)| LegendEntry {
            label: label.to_string(),
            color: color.to_string(),
        })
        .collect()
}

/// Flattens a built grid into the wire shape, attaching per-cell colors.
pub fn grid_response(grid: &WeekGrid, today: NaiveDate) -> GridResponse {
    GridResponse {
        week_start: grid.week_start.format(DATE_FORMAT).to_string(),
        today: today.format(DATE_FORMAT).to_string(),
        time_slots: TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
        professors: PROFESSORS.iter().map(|p| p.to_string()).collect(),
        legend: color_legend(),
        days: grid
            .days
            .iter()
            .map(|day| DayColumn {
                date: day.date.format(DATE_FORMAT).to_string(),
                weekday: day.date.format("%a").to_string(),
                cells: day
                    .cells
                    .iter()
                    .zip(TIME_SLOTS.iter())
                    .map(|(state, &slot)| SlotCell {
                        time: slot.to_string(),
                        state: state.clone(),
                        color: display_color(state).to_string(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
