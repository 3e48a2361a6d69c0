#[cfg(test)]
mod tests {
    use crate::client::{SheetsClient, SheetsError};
    use labbook_config::SheetsConfig;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // No key_path, so the client sends unauthenticated requests the mock
    // server accepts.
    fn test_config() -> SheetsConfig {
        SheetsConfig {
            key_path: None,
            spreadsheet_id: Some("sheet-id".to_string()),
            sheet_name: Some("bookings".to_string()),
            time_zone: None,
        }
    }

    #[tokio::test]
    async fn fetch_rows_parses_the_value_range() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/spreadsheets/sheet-id/values/bookings"))
            .and(query_param("valueRenderOption", "FORMATTED_VALUE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "range": "bookings!A1:E3",
                "majorDimension": "ROWS",
                "values": [
                    ["date", "time", "user", "prof", "status"],
                    ["2025-06-02", "9", "Alice", "tan", "booked"],
                ]
            })))
            .mount(&server)
            .await;

        let client = SheetsClient::with_base_url(test_config(), server.uri());
        let rows = client.fetch_rows().await.expect("fetch succeeds");

        assert_eq!(
            rows,
            vec![
                vec!["date", "time", "user", "prof", "status"],
                vec!["2025-06-02", "9", "Alice", "tan", "booked"],
            ]
            .into_iter()
            .map(|r: Vec<&str>| r.into_iter().map(String::from).collect::<Vec<_>>())
            .collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn numeric_cells_are_coerced_to_their_labels() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/spreadsheets/sheet-id/values/bookings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "values": [
                    ["date", "time", "user", "prof"],
                    ["2025-06-02", 9, "Alice", "tan"],
                ]
            })))
            .mount(&server)
            .await;

        let client = SheetsClient::with_base_url(test_config(), server.uri());
        let rows = client.fetch_rows().await.expect("fetch succeeds");

        assert_eq!(rows[1][1], "9");
    }

    #[tokio::test]
    async fn missing_values_field_reads_as_an_empty_sheet() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/spreadsheets/sheet-id/values/bookings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "range": "bookings!A1:E1",
                "majorDimension": "ROWS"
            })))
            .mount(&server)
            .await;

        let client = SheetsClient::with_base_url(test_config(), server.uri());
        let rows = client.fetch_rows().await.expect("fetch succeeds");

        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn api_failure_surfaces_the_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/spreadsheets/sheet-id/values/bookings"))
            .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
            .mount(&server)
            .await;

        let client = SheetsClient::with_base_url(test_config(), server.uri());
        let err = client.fetch_rows().await.expect_err("fetch fails");

        match err {
            SheetsError::ApiError(message) => assert!(message.contains("permission denied")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn append_row_posts_a_single_row_value_range() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v4/spreadsheets/sheet-id/values/bookings:append"))
            .and(query_param("valueInputOption", "USER_ENTERED"))
            .and(body_partial_json(json!({
                "values": [["2025-06-02", "9", "Alice", "tan", "booked"]]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "updates": { "updatedRows": 1 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SheetsClient::with_base_url(test_config(), server.uri());
        client
            .append_row(
                ["2025-06-02", "9", "Alice", "tan", "booked"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            )
            .await
            .expect("append succeeds");
    }

    #[tokio::test]
    async fn missing_spreadsheet_id_is_a_config_error() {
        let config = SheetsConfig {
            spreadsheet_id: None,
            ..test_config()
        };
        let client = SheetsClient::new(config);
        let err = client.fetch_rows().await.expect_err("fetch fails");

        assert!(matches!(err, SheetsError::ConfigError(_)));
    }
}
