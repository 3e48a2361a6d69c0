// File: crates/labbook_sheets/src/handlers.rs
use crate::client::SheetsError;
use crate::logic::{
    build_week_grid, grid_response, submit_booking, BookSlotRequest, BookingError, BookingResponse,
    GridQuery, GridResponse, DATE_FORMAT, PROFESSORS, TIME_SLOTS,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use labbook_common::services::RecordStore;
use labbook_config::{AppConfig, SheetsConfig}; // Use the unified config
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

// Define shared state needed by Sheets handlers
#[derive(Clone)]
pub struct SheetsState {
    pub config: Arc<AppConfig>,
    // Trait object so tests can swap in an in-memory store
    pub store: Arc<dyn RecordStore<Error = SheetsError>>,
}

const DEFAULT_TIME_ZONE: &str = "Asia/Taipei";

/// Today's date in the configured time zone.
fn configured_today(sheets_config: &SheetsConfig) -> NaiveDate {
    let time_zone = sheets_config
        .time_zone
        .as_deref()
        .unwrap_or(DEFAULT_TIME_ZONE);
    let time_zone = Tz::from_str(time_zone).unwrap_or(Tz::Asia__Taipei);
    Utc::now().with_timezone(&time_zone).date_naive()
}

/// Shared handler guard: the sheets section must be present in the config.
fn sheets_config(config: &AppConfig) -> Result<&SheetsConfig, (StatusCode, String)> {
    config.sheets.as_ref().ok_or_else(|| {
        info!("Sheets configuration missing in AppConfig.");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error: Sheets config missing.".to_string(),
        )
    })
}

/// Handler to get the week booking grid.
#[axum::debug_handler]
pub async fn get_week_grid_handler(
    State(state): State<Arc<SheetsState>>,
    Query(query): Query<GridQuery>,
) -> Result<Json<GridResponse>, (StatusCode, String)> {
    // Ensure the Sheets feature is enabled via runtime config
    if !state.config.use_sheets {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Sheets service is disabled.".to_string(),
        ));
    }

    let sheets = sheets_config(&state.config)?;

    let today = configured_today(sheets);
    let reference = match &query.date {
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                "Invalid date format (YYYY-MM-DD)".to_string(),
            )
        })?,
        None => today,
    };

    // One fetch per render; a failure halts the render rather than showing
    // a partially built grid.
    let records = match state.store.fetch_all().await {
        Ok(records) => records,
        Err(e) => {
            info!("Error fetching records from the sheet: {}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load bookings from the record store.".to_string(),
            ));
        }
    };

    let grid = build_week_grid(reference, &records, today);
    Ok(Json(grid_response(&grid, today)))
}

/// Handler to book a time slot.
#[axum::debug_handler]
pub async fn book_slot_handler(
    State(state): State<Arc<SheetsState>>, // Extract shared Sheets state
    Json(payload): Json<BookSlotRequest>,  // Extract JSON body
) -> Result<Json<BookingResponse>, (StatusCode, String)> {
    if !state.config.use_sheets {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Sheets service is disabled.".to_string(),
        ));
    }

    sheets_config(&state.config)?;

    // The form's selectors are constrained sets; re-check them here.
    NaiveDate::parse_from_str(&payload.date, DATE_FORMAT).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "Invalid date format (YYYY-MM-DD)".to_string(),
        )
    })?;
    if !TIME_SLOTS.contains(&payload.time.as_str()) {
        return Err((StatusCode::BAD_REQUEST, "Unknown time slot.".to_string()));
    }
    if !PROFESSORS.contains(&payload.professor.as_str()) {
        return Err((StatusCode::BAD_REQUEST, "Unknown professor.".to_string()));
    }

    match submit_booking(state.store.as_ref(), &payload).await {
        Ok(()) => {
            info!(
                "Booked slot {} on {} for {}",
                payload.time, payload.date, payload.user
            );
            Ok(Json(BookingResponse {
                success: true,
                message: "Reservation recorded successfully.".to_string(),
            }))
        }
        Err(BookingError::EmptyName) => {
            Err((StatusCode::BAD_REQUEST, "Please enter a name.".to_string()))
        }
        Err(BookingError::SlotTaken) => Err((
            StatusCode::CONFLICT,
            "That slot is already booked. Refresh the grid to see the latest reservations."
                .to_string(),
        )),
        Err(BookingError::Store(e)) => {
            info!("Error submitting booking: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to record the reservation.".to_string(),
            ))
        }
    }
}
