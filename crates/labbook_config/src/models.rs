// --- File: crates/labbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Google Sheets Config ---
// Holds non-secret Sheets config. The service account key stays in the
// file referenced by key_path, never in the config structs.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SheetsConfig {
    /// Path to the service account key file used for the Sheets API.
    pub key_path: Option<String>,
    /// ID of the spreadsheet holding the reservation rows.
    pub spreadsheet_id: Option<String>,
    /// Name of the sheet (tab) inside the spreadsheet.
    pub sheet_name: Option<String>,
    /// IANA time zone used to decide what "today" means for the grid.
    pub time_zone: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_sheets: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub sheets: Option<SheetsConfig>,
}
