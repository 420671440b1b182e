//! Typed client for the cats REST API.
//!
//! This crate provides the data model shared by every cats API response
//! (the `{status, data}` envelope, `Cat`, creation and partial-update
//! payloads) and `CatsClient`, an async HTTP wrapper around the
//! `/api/v1/cats` endpoints.
//!
//! The API server itself lives outside this repository; this crate only
//! speaks its wire format. Typed methods surface non-success responses as
//! [`client::CatsClientError::RequestFailed`], while the `raw_*` methods
//! hand back the plain [`reqwest::Response`] for tests that assert on
//! error statuses and bodies directly.

pub mod client;
pub mod models;

pub use client::{CatsClient, CatsClientError};
pub use models::{ApiResponse, ApiStatus, Cat, CatUpdate, ErrorData, ErrorResponse, NewCat, Sex};
