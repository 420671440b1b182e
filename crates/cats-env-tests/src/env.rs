//! API server connection and health check utilities.
//!
//! This module provides the `ApiConnection` type for validating that the
//! cats API server is listening before tests start issuing requests.

use std::net::TcpStream;
use std::time::Duration;

use cats_client::{CatsClient, CatsClientError};
use thiserror::Error;

/// Connection errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Cats API server not detected on localhost:{port}. Start the server before running e2e tests")]
    ServerNotRunning { port: u16 },

    #[error("API health check failed: {message}")]
    HealthCheckFailed { message: String },

    #[error("Client error: {0}")]
    ClientError(#[from] CatsClientError),
}

/// Address of the locally running cats API server.
#[derive(Debug, Clone)]
pub struct ApiAddress {
    pub port: u16,
}

impl Default for ApiAddress {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

/// Connection to the cats API server.
///
/// Provides the base URL, a ready-made [`CatsClient`], and a health probe.
pub struct ApiConnection {
    pub base_url: String,
    client: CatsClient,
}

impl ApiConnection {
    /// Create a new connection with the default address.
    ///
    /// Performs a TCP reachability check with a 5s timeout and returns an
    /// actionable error message if the server is not listening.
    pub async fn new() -> Result<Self, EnvError> {
        Self::new_with_address(ApiAddress::default()).await
    }

    /// Create a new connection with a custom address.
    pub async fn new_with_address(address: ApiAddress) -> Result<Self, EnvError> {
        Self::check_tcp_port(address.port)?;

        let base_url = format!("http://localhost:{}", address.port);
        let client = CatsClient::new(&base_url)?;

        Ok(Self { base_url, client })
    }

    /// Check if a TCP port is reachable on localhost.
    ///
    /// Uses a 5 second timeout for the connection attempt.
    fn check_tcp_port(port: u16) -> Result<(), EnvError> {
        let addr = format!("127.0.0.1:{}", port);

        TcpStream::connect_timeout(
            &addr.parse().map_err(|_| EnvError::HealthCheckFailed {
                message: format!("Invalid address: {}", addr),
            })?,
            Duration::from_secs(5),
        )
        .map_err(|_| EnvError::ServerNotRunning { port })?;

        Ok(())
    }

    /// Get the API client for making requests.
    pub fn client(&self) -> &CatsClient {
        &self.client
    }

    /// Check that the cats collection endpoint is responding.
    ///
    /// The API has no dedicated health route; `GET /api/v1/cats` answering
    /// with a success status serves as the liveness probe.
    pub async fn check_api_health(&self) -> Result<(), EnvError> {
        let response = self.client.raw_list_cats().await?;

        if !response.status().is_success() {
            return Err(EnvError::HealthCheckFailed {
                message: format!("cats endpoint returned status {}", response.status()),
            });
        }

        Ok(())
    }
}
