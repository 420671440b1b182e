//! Data model for the cats API.
//!
//! All entities here are owned by the external server; this module mirrors
//! its wire format. Field names that differ from Rust conventions
//! (`createdAt`, `updatedAt`) are mapped via serde.

use serde::{Deserialize, Serialize};

/// Sex of a cat, serialized exactly as the API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// A cat record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
    /// Server-assigned unique identifier.
    pub id: String,

    /// Display name, unique across all cats.
    pub name: String,

    pub sex: Sex,

    pub age: u32,

    pub breed: String,

    pub colour: String,

    /// Ordered list of things this cat likes.
    pub likes: Vec<String>,

    /// Server-assigned creation timestamp, immutable by clients.
    pub created_at: String,

    /// Server-assigned last-modification timestamp.
    pub updated_at: String,
}

/// Creation payload: a [`Cat`] minus the server-assigned fields.
///
/// `age` is unsigned, so well-formed payloads are non-negative by
/// construction. Deliberately malformed payloads (negative age, missing
/// fields) are built as raw JSON instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCat {
    pub name: String,
    pub sex: Sex,
    pub age: u32,
    pub breed: String,
    pub colour: String,
    pub likes: Vec<String>,
}

/// Partial-update payload for `PATCH /api/v1/cats/{id}`.
///
/// Omitted fields are absent from the request body and keep their previous
/// values on the server.
#[derive(Debug, Clone, Serialize, Default)]
pub struct CatUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<Vec<String>>,
}

impl CatUpdate {
    /// Create an update that renames the cat and leaves everything else
    /// untouched.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Create an update for name and age together.
    pub fn with_name_and_age(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age),
            ..Default::default()
        }
    }
}

/// Envelope shared by all API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ApiStatus,
    pub data: T,
}

/// Status tag carried by the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAILED")]
    Failed,
}

/// Error payload carried by failed responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorData {
    pub error: String,
}

/// A failed response: `FAILED` envelope around an error message.
pub type ErrorResponse = ApiResponse<ErrorData>;
