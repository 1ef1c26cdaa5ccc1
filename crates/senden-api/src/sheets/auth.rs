use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use super::ServiceAccountConfig;
use crate::error::SheetsError;

const TOKEN_URL: &str = "https://www.googleapis.com/oauth2/v4/token";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Lifetime of the signed assertion in seconds.
const ASSERTION_TTL_SECS: i64 = 3600;

/// Claim set for the JWT-bearer grant assertion.
#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

impl<'a> Claims<'a> {
    fn new(client_email: &'a str, now: i64) -> Self {
        Self {
            iss: client_email,
            scope: SCOPE,
            aud: TOKEN_URL,
            iat: now,
            exp: now + ASSERTION_TTL_SECS,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[allow(dead_code)]
    pub expires_in: Option<u64>,
    #[allow(dead_code)]
    pub token_type: Option<String>,
}

/// Sign an RS256 assertion for the service account, valid from `now`.
fn sign_assertion(config: &ServiceAccountConfig, now: i64) -> Result<String, SheetsError> {
    let key = EncodingKey::from_rsa_pem(config.private_key.as_bytes())
        .map_err(|e| SheetsError::Key(e.to_string()))?;
    encode(
        &Header::new(Algorithm::RS256),
        &Claims::new(&config.client_email, now),
        &key,
    )
    .map_err(|e| SheetsError::Key(e.to_string()))
}

/// Exchange a signed assertion for a bearer token.
pub async fn fetch_access_token(
    http: &reqwest::Client,
    config: &ServiceAccountConfig,
) -> Result<String, SheetsError> {
    let assertion = sign_assertion(config, Utc::now().timestamp())?;

    let resp = http
        .post(TOKEN_URL)
        .json(&serde_json::json!({
            "grant_type": GRANT_TYPE,
            "assertion": assertion,
        }))
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(SheetsError::Token {
            status,
            message: body,
        });
    }

    let token: TokenResponse = resp
        .json()
        .await
        .map_err(|e| SheetsError::Parse(e.to_string()))?;
    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_window() {
        let claims = Claims::new("svc@project.iam.gserviceaccount.com", 1_700_000_000);
        assert_eq!(claims.iss, "svc@project.iam.gserviceaccount.com");
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_003_600);
        assert_eq!(claims.scope, SCOPE);
        assert_eq!(claims.aud, TOKEN_URL);
    }

    #[test]
    fn test_claims_serialize_flat() {
        let claims = Claims::new("svc@x", 10);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["iss"], "svc@x");
        assert_eq!(json["iat"], 10);
        assert_eq!(json["exp"], 3610);
    }

    #[test]
    fn test_garbage_key_is_rejected() {
        let config = ServiceAccountConfig {
            client_email: "svc@x".into(),
            private_key: "not a pem".into(),
            spreadsheet_id: "sheet".into(),
        };
        assert!(matches!(
            sign_assertion(&config, 0),
            Err(SheetsError::Key(_))
        ));
    }
}
