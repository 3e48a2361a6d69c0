// --- File: crates/labbook_sheets/src/client.rs ---
//! Google Sheets client module.
//!
//! This module provides a thin client for the Google Sheets v4 REST API,
//! limited to the two operations the record store needs: reading every row
//! of one named sheet (`values.get`) and appending a single row
//! (`values:append`). The main component is the [`SheetsClient`] struct,
//! which handles authentication and communication with the API.

use crate::auth::get_sheets_auth_token;
use labbook_config::SheetsConfig;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when interacting with the Google Sheets API
#[derive(Error, Debug)]
pub enum SheetsError {
    /// Error during authentication with Google
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error during HTTP request to the Sheets API
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Missing required configuration
    #[error("Missing configuration: {0}")]
    ConfigError(String),

    /// Error returned by the Sheets API
    #[error("Sheets API error: {0}")]
    ApiError(String),

    /// Sheet content could not be interpreted as reservation rows
    #[error("Failed to parse sheet data: {0}")]
    ParseError(String),
}

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// A range of cell values, as the Sheets API represents them.
///
/// Used both for the `values.get` response and the `values:append` request
/// body. Cells arrive as JSON scalars (strings or numbers depending on the
/// cell format), so they are held as `serde_json::Value` here and coerced to
/// strings by the caller.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValueRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(rename = "majorDimension", skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

/// Client for interacting with the Google Sheets API
///
/// This struct handles authentication and communication with the Sheets v4
/// REST API. A fresh bearer token is obtained per request from the service
/// account key referenced in the config.
pub struct SheetsClient {
    /// HTTP client for making requests to the Sheets API
    client: Client,

    /// Configuration for Sheets, including spreadsheet ID and key path
    config: SheetsConfig,

    /// API endpoint; overridable so tests can point at a local server
    base_url: String,
}

impl SheetsClient {
    /// Creates a new Sheets client with the given configuration
    pub fn new(config: SheetsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a new Sheets client against a non-default API endpoint
    pub fn with_base_url(config: SheetsConfig, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            config,
            base_url: base_url.into(),
        }
    }

    fn sheet_location(&self) -> Result<(&str, &str), SheetsError> {
        let spreadsheet_id = self.config.spreadsheet_id.as_deref().ok_or_else(|| {
            SheetsError::ConfigError("Missing spreadsheet_id in SheetsConfig".to_string())
        })?;
        let sheet_name = self.config.sheet_name.as_deref().ok_or_else(|| {
            SheetsError::ConfigError("Missing sheet_name in SheetsConfig".to_string())
        })?;
        Ok((spreadsheet_id, sheet_name))
    }

    /// Bearer header value, or None when no key file is configured.
    ///
    /// Requests without a key file go out unauthenticated, which keeps local
    /// emulator and test setups working; the real API answers those with an
    /// auth error that surfaces as [`SheetsError::ApiError`].
    async fn authorization(&self) -> Result<Option<String>, SheetsError> {
        if self.config.key_path.is_none() {
            debug!("No key_path configured; sending unauthenticated Sheets request");
            return Ok(None);
        }
        let token = get_sheets_auth_token(&self.config)
            .await
            .map_err(|e| SheetsError::AuthError(e.to_string()))?;
        Ok(Some(format!("Bearer {}", token)))
    }

    /// Reads every row of the configured sheet.
    ///
    /// Values are requested formatted (as the user sees them) and each cell
    /// is coerced to a string, so a numeric time-slot cell compares equal to
    /// its label.
    pub async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, SheetsError> {
        let (spreadsheet_id, sheet_name) = self.sheet_location()?;

        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}?valueRenderOption=FORMATTED_VALUE",
            self.base_url, spreadsheet_id, sheet_name
        );

        let mut request = self.client.get(&url);
        if let Some(bearer) = self.authorization().await? {
            request = request.header(header::AUTHORIZATION, bearer);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(SheetsError::ApiError(error_text));
        }

        let value_range: ValueRange = response.json().await?;
        Ok(value_range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }

    /// Appends one row to the end of the configured sheet.
    pub async fn append_row(&self, row: Vec<String>) -> Result<(), SheetsError> {
        let (spreadsheet_id, sheet_name) = self.sheet_location()?;

        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:append?valueInputOption=USER_ENTERED",
            self.base_url, spreadsheet_id, sheet_name
        );

        let body = ValueRange {
            range: None,
            major_dimension: None,
            values: vec![row.into_iter().map(serde_json::Value::String).collect()],
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(bearer) = self.authorization().await? {
            request = request.header(header::AUTHORIZATION, bearer);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(SheetsError::ApiError(error_text));
        }

        Ok(())
    }
}

/// Coerce one cell to its string form. Formatted values usually arrive as
/// strings already; numbers show up when a column is typed in the sheet.
fn cell_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
