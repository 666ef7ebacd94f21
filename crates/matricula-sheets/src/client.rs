//! Google Sheets implementation of the grid client contract.
//!
//! Talks to the `spreadsheets/{id}/values` REST surface:
//! - `GET  values/{range}` — range read
//! - `POST values:batchUpdate` — batch write with `valueInputOption: RAW`
//! - `PUT  values/{range}?valueInputOption=RAW` — in-place cell update
//!
//! The base URL is overridable so tests can stand a mock server in for
//! the live API. All transport and protocol failures map to persistence
//! errors; a response without a `values` field is an empty range, not an
//! error.

use std::sync::Arc;

use async_trait::async_trait;
use matricula_core::{Error, Result};
use matricula_grid::{GridClient, RangeWrite, SheetRange};
use serde::{Deserialize, Serialize};

use crate::auth::TokenSource;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// Cell values are submitted exactly as given, without the remote
/// store's type coercion.
const VALUE_INPUT_OPTION: &str = "RAW";

#[derive(Debug, Deserialize)]
struct ReadValueRange {
    #[serde(default)]
    values: Option<Vec<Vec<serde_json::Value>>>,
}

#[derive(Debug, Serialize)]
struct WriteValueRange {
    range: String,
    values: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateRequest {
    value_input_option: &'static str,
    data: Vec<WriteValueRange>,
}

#[derive(Debug, Serialize)]
struct UpdateRequest {
    range: String,
    values: Vec<Vec<String>>,
}

/// The remote store hands cells back as JSON scalars; everything is
/// carried as its string form on our side of the boundary.
fn cell_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Grid client backed by the Google Sheets REST API.
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    tokens: Arc<dyn TokenSource>,
}

impl SheetsClient {
    /// Creates a client for one spreadsheet, authenticating through
    /// `tokens`.
    pub fn new<S: Into<String>>(spreadsheet_id: S, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            spreadsheet_id: spreadsheet_id.into(),
            tokens,
        }
    }

    /// Points the client at a different API root (tests, proxies).
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL for `spreadsheets/{id}/` plus the given trailing segment.
    ///
    /// The segment is pushed as one path component, so A1 ranges with
    /// spaces or quotes are percent-encoded correctly.
    fn url(&self, last_segment: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| Error::config(format!("bad sheets base url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| Error::config("sheets base url cannot carry paths"))?
            .push("spreadsheets")
            .push(&self.spreadsheet_id)
            .push(last_segment);
        Ok(url)
    }

    fn values_url(&self, range: &SheetRange) -> Result<reqwest::Url> {
        let mut url = self.url("values")?;
        url.path_segments_mut()
            .map_err(|_| Error::config("sheets base url cannot carry paths"))?
            .push(&range.to_string());
        Ok(url)
    }

    async fn bearer(&self) -> Result<String> {
        self.tokens.access_token().await
    }

    async fn check(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::persistence(format!(
            "{what} returned {status}: {body}"
        )))
    }
}

#[async_trait]
impl GridClient for SheetsClient {
    async fn read_range(&self, range: &SheetRange) -> Result<Vec<Vec<String>>> {
        tracing::debug!(%range, "reading range");
        let response = self
            .http
            .get(self.values_url(range)?)
            .bearer_auth(self.bearer().await?)
            .send()
            .await
            .map_err(|e| Error::persistence_with_source("sheets api unreachable", e))?;
        let response = Self::check(response, "range read").await?;

        let body: ReadValueRange = response
            .json()
            .await
            .map_err(|e| Error::persistence_with_source("bad range read response", e))?;
        let rows = body
            .values
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect();
        Ok(rows)
    }

    async fn write_batch(&self, writes: &[RangeWrite]) -> Result<()> {
        let request = BatchUpdateRequest {
            value_input_option: VALUE_INPUT_OPTION,
            data: writes
                .iter()
                .map(|write| WriteValueRange {
                    range: write.range.to_string(),
                    values: write.rows.clone(),
                })
                .collect(),
        };
        tracing::debug!(ranges = request.data.len(), "submitting batch update");

        let response = self
            .http
            .post(self.url("values:batchUpdate")?)
            .bearer_auth(self.bearer().await?)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::persistence_with_source("sheets api unreachable", e))?;
        Self::check(response, "batch update").await?;
        Ok(())
    }

    async fn update_cells(&self, range: &SheetRange, rows: Vec<Vec<String>>) -> Result<()> {
        tracing::debug!(%range, "updating cells");
        let mut url = self.values_url(range)?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", VALUE_INPUT_OPTION);

        let request = UpdateRequest {
            range: range.to_string(),
            values: rows,
        };
        let response = self
            .http
            .put(url)
            .bearer_auth(self.bearer().await?)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::persistence_with_source("sheets api unreachable", e))?;
        Self::check(response, "cell update").await?;
        Ok(())
    }
}
