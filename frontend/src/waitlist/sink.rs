use chrono::{DateTime, SecondsFormat, Utc};
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::config;

/// One waitlist row, serialized with the column names of the signup table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub email: String,
    #[serde(rename = "created_at", serialize_with = "iso_timestamp")]
    pub submitted_at: DateTime<Utc>,
}

fn iso_timestamp<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("insert rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Anything that can store a waitlist signup.
pub trait SignupSink {
    fn insert(&self, record: SignupRequest) -> LocalBoxFuture<'static, Result<(), SinkError>>;
}

/// Inserts rows through the hosted database's REST interface.
#[derive(Clone, Debug, PartialEq)]
pub struct RestSink {
    endpoint: String,
    api_key: String,
}

impl RestSink {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_signup_endpoint(), config::get_supabase_anon_key())
    }
}

impl SignupSink for RestSink {
    fn insert(&self, record: SignupRequest) -> LocalBoxFuture<'static, Result<(), SinkError>> {
        let endpoint = self.endpoint.clone();
        let api_key = self.api_key.clone();
        async move {
            let response = Request::post(&endpoint)
                .header("apikey", &api_key)
                .header("Authorization", &format!("Bearer {}", api_key))
                .header("Prefer", "return=minimal")
                .json(&[record])
                .map_err(|e| SinkError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SinkError::Transport(e.to_string()))?;

            if response.ok() {
                return Ok(());
            }
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(SinkError::Rejected {
                status,
                message: rejection_message(&body),
            })
        }
        .boxed_local()
    }
}

/// PostgREST errors carry a `message` field; fall back to the raw body.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn request_uses_table_column_names() {
        let request = SignupRequest {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            age: 25,
            email: "john@example.com".to_string(),
            submitted_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 41, 0).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "first_name": "John",
                "last_name": "Doe",
                "age": 25,
                "email": "john@example.com",
                "created_at": "2026-03-01T09:41:00.000Z",
            })
        );
    }

    #[test]
    fn rejection_message_prefers_postgrest_message() {
        let body = r#"{"code":"23505","message":"duplicate key value"}"#;
        assert_eq!(rejection_message(body), "duplicate key value");
        assert_eq!(rejection_message("Bad Gateway"), "Bad Gateway");
    }
}
