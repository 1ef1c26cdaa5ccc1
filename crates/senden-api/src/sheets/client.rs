use chrono::{DateTime, Utc};
use reqwest::Client;

use senden_core::signup::SignupRecord;

use super::{auth, ServiceAccountConfig};
use crate::error::SheetsError;

const BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Target range for signup rows: name, email, timestamp.
const APPEND_RANGE: &str = "Sheet1!A:C";

/// Client for appending signup rows to the configured spreadsheet.
///
/// Stateless across calls: every append performs its own token exchange, so
/// instances are cheap and hold no credentials beyond the config.
pub struct SheetsClient {
    config: ServiceAccountConfig,
    http: Client,
}

impl SheetsClient {
    pub fn new(config: ServiceAccountConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SheetsError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(SheetsError::Api {
                status,
                message: body,
            })
        }
    }

    /// Append one signup as `[name, email, timestamp]`.
    pub async fn append_row(
        &self,
        record: &SignupRecord,
        submitted_at: DateTime<Utc>,
    ) -> Result<(), SheetsError> {
        let access_token = auth::fetch_access_token(&self.http, &self.config).await?;

        let url = format!(
            "{BASE_URL}/{}/values/{APPEND_RANGE}:append",
            self.config.spreadsheet_id
        );
        let resp = self
            .http
            .post(url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(access_token)
            .json(&append_body(record, submitted_at))
            .send()
            .await?;

        Self::check_response(resp).await?;
        tracing::debug!(email = %record.email, "Appended waitlist signup");
        Ok(())
    }
}

/// Request body for the values-append call.
fn append_body(record: &SignupRecord, submitted_at: DateTime<Utc>) -> serde_json::Value {
    serde_json::json!({ "values": [record.submission_row(submitted_at)] })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use senden_core::signup::validate;

    #[test]
    fn test_append_body_shape() {
        let record = validate("Ann", "ann@x.com").unwrap();
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
        let body = append_body(&record, at);
        assert_eq!(
            body,
            serde_json::json!({
                "values": [["Ann", "ann@x.com", "2025-06-01T12:30:00.000Z"]]
            })
        );
    }
}
