// File: crates/labbook_sheets/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    BookSlotRequest, BookingResponse, DayColumn, GridQuery, GridResponse, LegendEntry, SlotCell,
    SlotState,
};

#[utoipa::path(
    get,
    path = "/grid",
    params(
        ("date" = Option<String>, Query, description = "Reference date in YYYY-MM-DD format; defaults to today", example = "2025-06-01", format = "date")
    ),
    responses(
        (status = 200, description = "The 7-day booking grid for the week containing the reference date", body = GridResponse),
        (status = 400, description = "Invalid date format", body = String),
        (status = 500, description = "Record store unreachable", body = String),
        (status = 503, description = "Sheets service disabled", body = String)
    )
)]
fn doc_get_week_grid_handler() {}

#[utoipa::path(
    post,
    path = "/book",
    request_body(content = BookSlotRequest, example = json!({
        "date": "2025-06-02",
        "time": "9",
        "user": "Alice",
        "professor": "tan"
    })),
    responses(
        (status = 200, description = "Booking result", body = BookingResponse,
         example = json!({
             "success": true,
             "message": "Reservation recorded successfully."
         })
        ),
        (status = 400, description = "Validation failure (empty name, bad date, unknown label)",
         example = json!("Please enter a name.")
        ),
        (status = 409, description = "Slot already booked",
         example = json!("That slot is already booked. Refresh the grid to see the latest reservations.")
        ),
        (status = 500, description = "Booking failed",
         example = json!("Failed to record the reservation.")
        )
    )
)]
fn doc_book_slot_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_get_week_grid_handler, doc_book_slot_handler),
    components(
        schemas(
            GridQuery,
            GridResponse,
            LegendEntry,
            DayColumn,
            SlotCell,
            SlotState,
            BookSlotRequest,
            BookingResponse
        )
    ),
    tags(
        (name = "sheets", description = "Booking Grid API")
    ),
    servers(
        (url = "/api", description = "Booking API server")
    )
)]
pub struct SheetsApiDoc;
