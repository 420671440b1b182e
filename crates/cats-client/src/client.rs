//! HTTP client wrapper for the cats API.
//!
//! `CatsClient` covers the five `/api/v1/cats` endpoints with typed
//! methods, plus `raw_*` variants that return the untouched
//! [`reqwest::Response`] for error-path assertions.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use thiserror::Error;

use crate::models::{ApiResponse, Cat, CatUpdate, NewCat};

/// Maximum length for error body in error messages.
const MAX_ERROR_BODY_LEN: usize = 256;

/// Per-request timeout applied to every API call.
const ACTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Bound the error response body carried in error messages.
///
/// Bodies come from the server under test and can be arbitrarily large on
/// misbehavior; truncation keeps failure output readable.
fn truncate_error_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_LEN {
        return body.to_string();
    }

    let truncated: String = body.chars().take(MAX_ERROR_BODY_LEN).collect();
    format!("{}...[truncated]", truncated)
}

/// Cats API client errors.
#[derive(Debug, Error)]
pub enum CatsClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Client for the cats REST API.
#[derive(Clone)]
pub struct CatsClient {
    base_url: String,
    http_client: Client,
}

impl CatsClient {
    /// Create a new cats API client.
    ///
    /// The underlying HTTP client sends `Accept: application/json` on
    /// every request and bounds each call with a 10 second timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatsClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .default_headers(headers)
            .timeout(ACTION_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the HTTP client for custom requests.
    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    fn cats_url(&self) -> String {
        format!("{}/api/v1/cats", self.base_url)
    }

    fn cat_url(&self, id: &str) -> String {
        format!("{}/api/v1/cats/{}", self.base_url, id)
    }

    /// List every cat.
    ///
    /// # Endpoint
    ///
    /// `GET /api/v1/cats`
    pub async fn list_cats(&self) -> Result<ApiResponse<Vec<Cat>>, CatsClientError> {
        let response = self.http_client.get(self.cats_url()).send().await?;

        self.handle_response(response).await
    }

    /// Fetch a single cat by id.
    ///
    /// # Endpoint
    ///
    /// `GET /api/v1/cats/{id}` (404 for an unknown id)
    pub async fn get_cat(&self, id: &str) -> Result<ApiResponse<Cat>, CatsClientError> {
        let response = self.http_client.get(self.cat_url(id)).send().await?;

        self.handle_response(response).await
    }

    /// Create a cat.
    ///
    /// The server answers 201 with the stored record, including its
    /// assigned id and timestamps.
    ///
    /// # Endpoint
    ///
    /// `POST /api/v1/cats`
    pub async fn create_cat(&self, cat: &NewCat) -> Result<ApiResponse<Cat>, CatsClientError> {
        let response = self
            .http_client
            .post(self.cats_url())
            .json(cat)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Apply a partial update to a cat.
    ///
    /// Fields left unset in `update` keep their previous values.
    ///
    /// # Endpoint
    ///
    /// `PATCH /api/v1/cats/{id}`
    pub async fn update_cat(
        &self,
        id: &str,
        update: &CatUpdate,
    ) -> Result<ApiResponse<Cat>, CatsClientError> {
        let response = self
            .http_client
            .patch(self.cat_url(id))
            .json(update)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Delete a cat.
    ///
    /// The server answers 204 with no body on success, so this returns
    /// nothing. Note the server answers 400, not 404, for an unknown id.
    ///
    /// # Endpoint
    ///
    /// `DELETE /api/v1/cats/{id}`
    pub async fn delete_cat(&self, id: &str) -> Result<(), CatsClientError> {
        let response = self.http_client.delete(self.cat_url(id)).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatsClientError::RequestFailed {
                status: status.as_u16(),
                body: truncate_error_body(&body),
            });
        }

        Ok(())
    }

    /// Make a raw list request and return the response.
    pub async fn raw_list_cats(&self) -> Result<Response, CatsClientError> {
        Ok(self.http_client.get(self.cats_url()).send().await?)
    }

    /// Make a raw get-by-id request and return the response.
    ///
    /// Useful for asserting on 404s for unknown ids.
    pub async fn raw_get_cat(&self, id: &str) -> Result<Response, CatsClientError> {
        Ok(self.http_client.get(self.cat_url(id)).send().await?)
    }

    /// POST an arbitrary JSON body to the creation endpoint.
    ///
    /// Useful for payloads that `NewCat` cannot represent (negative age,
    /// missing fields) and for asserting on rejection statuses.
    pub async fn raw_create_cat(&self, body: &str) -> Result<Response, CatsClientError> {
        Ok(self
            .http_client
            .post(self.cats_url())
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await?)
    }

    /// PATCH an arbitrary JSON body to a cat and return the response.
    pub async fn raw_update_cat(&self, id: &str, body: &str) -> Result<Response, CatsClientError> {
        Ok(self
            .http_client
            .patch(self.cat_url(id))
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await?)
    }

    /// Make a raw delete request and return the response.
    ///
    /// Cleanup uses this to tolerate already-deleted records.
    pub async fn raw_delete_cat(&self, id: &str) -> Result<Response, CatsClientError> {
        Ok(self.http_client.delete(self.cat_url(id)).send().await?)
    }

    /// Handle response and parse JSON body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, CatsClientError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatsClientError::RequestFailed {
                status: status.as_u16(),
                body: truncate_error_body(&body),
            });
        }

        let parsed = response.json().await?;
        Ok(parsed)
    }
}
