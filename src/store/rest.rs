//! REST highlight store
//!
//! Talks to a hosted Postgres backend that exposes the highlight table
//! through PostgREST-style endpoints under `/rest/v1/<table>`. Row-level
//! policies on the backend scope every request to the bearer token's user;
//! the explicit `user_id` filters keep requests correct against a service
//! key as well.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;

use super::{validate_rows, HighlightStore, StoreError};
use crate::model::{DocumentId, Highlight, HighlightId, NewHighlight, UserId};

pub struct RestStore {
    client: Client,
    /// `{url}/rest/v1/{table}`
    endpoint: String,
    api_key: String,
    bearer: String,
}

/// Error body returned by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl RestStore {
    pub fn new(
        url: &str,
        api_key: &str,
        access_token: Option<&str>,
        table: &str,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url, api_key, access_token, table))
    }

    /// Use an already configured client (proxy, TLS and timeout settings are
    /// taken as they are)
    pub fn with_client(
        client: Client,
        url: &str,
        api_key: &str,
        access_token: Option<&str>,
        table: &str,
    ) -> Self {
        Self {
            client,
            endpoint: table_endpoint(url, table),
            api_key: api_key.to_string(),
            bearer: access_token.unwrap_or(api_key).to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.bearer)
    }

    /// Map non-2xx responses to `StoreError::Remote`
    fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(StoreError::Remote {
            status: status.as_u16(),
            message: error_message(&body, status.canonical_reason()),
        })
    }
}

impl HighlightStore for RestStore {
    fn list(&self, user: &UserId, document: &DocumentId) -> Result<Vec<Highlight>, StoreError> {
        let request = self.client.get(&self.endpoint).query(&[
            ("select", "*".to_string()),
            ("user_id", format!("eq.{}", user)),
            ("document_id", format!("eq.{}", document)),
            ("order", "start_offset.asc".to_string()),
        ]);
        let response = Self::check(self.authorized(request).send()?)?;
        Ok(response.json()?)
    }

    fn insert(&mut self, rows: &[NewHighlight]) -> Result<Vec<Highlight>, StoreError> {
        validate_rows(rows)?;
        let request = self
            .client
            .post(&self.endpoint)
            .header("Prefer", "return=representation")
            .json(rows);
        let response = Self::check(self.authorized(request).send()?)?;
        Ok(response.json()?)
    }

    fn delete(&mut self, user: &UserId, ids: &[HighlightId]) -> Result<usize, StoreError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let request = self
            .client
            .delete(&self.endpoint)
            .header("Prefer", "return=representation")
            .query(&[
                ("user_id", format!("eq.{}", user)),
                ("id", id_filter(ids)),
            ]);
        let response = Self::check(self.authorized(request).send()?)?;
        let deleted: Vec<Highlight> = response.json()?;
        Ok(deleted.len())
    }
}

fn table_endpoint(url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", url.trim_end_matches('/'), table)
}

/// `in.(id1,id2,...)`
fn id_filter(ids: &[HighlightId]) -> String {
    let joined = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("in.({})", joined)
}

/// Prefer the backend's `message`, then `error`, then the raw body
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            return message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        reason.unwrap_or("Request failed").to_string()
    } else {
        trimmed.to_string()
    }
}
