//! Stateless HTTP request builder and response parser for the birthday API.
//!
//! # Design
//! `BirthdayClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Birthday, NewBirthday};

/// Where the admin panel expects the backend when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Synchronous, stateless client for the birthday API.
#[derive(Debug, Clone)]
pub struct BirthdayClient {
    base_url: String,
}

impl Default for BirthdayClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl BirthdayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_birthdays(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/birthdays", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_birthday(&self, input: &NewBirthday) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/birthdays", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_birthday(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/birthdays/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Records come back in server order; nothing is sorted here.
    pub fn parse_list_birthdays(&self, response: HttpResponse) -> Result<Vec<Birthday>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Any 2xx counts. The created record in the body is not needed because
    /// the list is reloaded afterwards.
    pub fn parse_create_birthday(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_birthday(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
