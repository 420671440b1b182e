//! Cats API Environment Test Suite
//!
//! This crate provides end-to-end tests for the cats REST API. Tests run
//! against an externally managed server instance and validate status
//! codes, response envelopes, and field-level invariants (name
//! uniqueness, non-negative age, required fields, partial-update
//! semantics).
//!
//! # Features
//!
//! - `smoke`: Fast reachability checks against the running server
//! - `crud`: Full create/read/update/delete flows
//! - `all`: Enable all test categories
//!
//! # Prerequisites
//!
//! 1. Cats API server running and listening on `localhost:3000`
//!
//! # Usage
//!
//! ```bash
//! # From repo root - runs only the serverless unit tests
//! cargo test
//!
//! # Reachability checks (seconds)
//! cargo test -p cats-env-tests --features smoke
//!
//! # Full CRUD suite; mutating tests are serialized so they never race
//! # each other on the shared server
//! cargo test -p cats-env-tests --features all
//! ```
//!
//! Every test that creates records does so through
//! [`harness::TestContext`], which tracks the ids it receives and deletes
//! them afterwards regardless of the test outcome.

pub mod env;
pub mod factory;
pub mod harness;
pub mod tracker;
