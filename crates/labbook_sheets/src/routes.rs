// --- File: crates/labbook_sheets/src/routes.rs ---

use crate::client::SheetsClient;
use crate::handlers::{book_slot_handler, get_week_grid_handler, SheetsState};
use crate::service::SheetsRecordStore;
use axum::{
    routing::{get, post},
    Router,
};
use labbook_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the booking grid feature.
///
/// Builds the Sheets record store from the config and wires it into the
/// shared handler state; the store instance is explicitly scoped here, not
/// a process-wide cached connection.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let sheets_config = config
        .sheets
        .clone()
        .expect("Sheets config missing");
    let store = SheetsRecordStore::new(SheetsClient::new(sheets_config));

    let state = Arc::new(SheetsState {
        config,
        store: Arc::new(store),
    });

    Router::new()
        .route("/grid", get(get_week_grid_handler))
        .route("/book", post(book_slot_handler))
        .with_state(state)
}
