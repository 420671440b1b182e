//! Test harness: per-test context, guaranteed cleanup, timeouts.
//!
//! [`run_test`] wraps a test future so that every cat the test created is
//! deleted afterwards, whether the test passed, failed an assertion, or
//! timed out. Cleanup is best-effort and never turns a passing test into
//! a failing one.

use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use cats_client::{Cat, CatsClient, NewCat};
use futures::FutureExt;
use reqwest::StatusCode;
use tracing::warn;

use crate::env::ApiConnection;
use crate::tracker::CatTracker;

/// Upper bound on a single test body, cleanup excluded.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(30);

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Everything a single e2e test needs: the API client plus the tracker
/// that guarantees cleanup of created records.
///
/// The context is handed to the test future by [`run_test`]; the harness
/// keeps a handle on the tracker so cleanup sees every id even when the
/// test future never completes normally.
#[derive(Clone)]
pub struct TestContext {
    client: CatsClient,
    created_ids: Arc<Mutex<CatTracker>>,
}

impl TestContext {
    fn new(client: CatsClient) -> Self {
        Self {
            client,
            created_ids: Arc::new(Mutex::new(CatTracker::new())),
        }
    }

    /// Get the API client.
    pub fn client(&self) -> &CatsClient {
        &self.client
    }

    /// Record an id created outside [`Self::create_tracked_cat`] (e.g.
    /// via a raw request) so cleanup still covers it.
    pub fn track(&self, id: impl Into<String>) {
        self.created_ids
            .lock()
            .expect("tracker mutex poisoned")
            .track(id);
    }

    /// Create a cat and register it for cleanup.
    ///
    /// Panics with the server's reported error on any non-success
    /// response; a failed creation is fatal to the current test and never
    /// retried. The id is tracked before the cat is returned, so cleanup
    /// covers it even if a later assertion fails.
    pub async fn create_tracked_cat(&self, cat: &NewCat) -> Cat {
        let response = self
            .client
            .create_cat(cat)
            .await
            .unwrap_or_else(|e| panic!("Failed to create test cat '{}': {}", cat.name, e));

        self.track(&response.data.id);
        response.data
    }
}

/// Run one e2e test with a connected context and guaranteed cleanup.
///
/// 1. Connects to the API server, failing fast with an actionable message
///    when it is not running.
/// 2. Runs the test future under [`TEST_TIMEOUT`], panic-wrapped so a
///    failed assertion cannot skip the cleanup pass.
/// 3. Deletes every tracked cat, last-created first.
/// 4. Re-raises the panic or reports the timeout afterwards.
pub async fn run_test<F, Fut>(test_fn: F)
where
    F: FnOnce(TestContext) -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    init_tracing();

    let connection = ApiConnection::new()
        .await
        .expect("Failed to reach the cats API server - ensure it is running on localhost:3000");

    let ctx = TestContext::new(connection.client().clone());
    let client = ctx.client.clone();
    let tracker = Arc::clone(&ctx.created_ids);

    let outcome = AssertUnwindSafe(tokio::time::timeout(TEST_TIMEOUT, test_fn(ctx)))
        .catch_unwind()
        .await;

    let ids = match tracker.lock() {
        Ok(mut tracker) => tracker.drain_reverse(),
        // A panic between lock and unlock only happens inside `track`;
        // the ids pushed so far are still worth cleaning up.
        Err(poisoned) => poisoned.into_inner().drain_reverse(),
    };
    cleanup_cats(&client, &ids).await;

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(_elapsed)) => panic!("Test timed out after {:?}", TEST_TIMEOUT),
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// Best-effort deletion of tracked cats.
///
/// `ids` arrive already in last-created-first order. A 404 means the test
/// deleted the record itself and is fine. Any other failure is logged as
/// a warning and neither stops the remaining deletions nor fails the
/// test.
async fn cleanup_cats(client: &CatsClient, ids: &[String]) {
    if ids.is_empty() {
        return;
    }

    for id in ids {
        match client.raw_delete_cat(id).await {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() && status != StatusCode::NOT_FOUND {
                    warn!(cat_id = %id, %status, "failed to delete test cat");
                }
            }
            Err(error) => {
                warn!(cat_id = %id, %error, "error during test cat cleanup");
            }
        }
    }
}
