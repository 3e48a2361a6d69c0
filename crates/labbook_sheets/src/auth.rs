// File: crates/labbook_sheets/src/auth.rs
//! Service-account authentication for the Google Sheets API.
//!
//! Reads the service account key file referenced by the Sheets config and
//! exchanges it for a scoped OAuth2 access token.

use labbook_config::SheetsConfig;
use std::{error::Error, path::Path};
use yup_oauth2::{read_service_account_key, ServiceAccountAuthenticator};

/// Scope required for reading and appending spreadsheet values.
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Obtains an OAuth2 access token for the Google Sheets API.
///
/// # Errors
///
/// Returns an error if the key_path is missing from the config, the key file
/// cannot be read, or the token exchange fails.
pub async fn get_sheets_auth_token(
    config: &SheetsConfig,
) -> Result<String, Box<dyn Error + Send + Sync>> {
    let key_path = config
        .key_path
        .as_deref()
        .ok_or("Missing key_path in SheetsConfig")?;

    let sa_key = read_service_account_key(Path::new(key_path)).await?;

    let auth = ServiceAccountAuthenticator::builder(sa_key).build().await?;

    let auth_token = auth.token(&[SHEETS_SCOPE]).await?;
    let token = match auth_token.token() {
        Some(token) => token,
        None => {
            return Err("No token available".into());
        }
    };

    Ok(token.to_string())
}
