//! CRUD Tests: Updating Cats (PATCH /api/v1/cats/{id})
//!
//! Partial-update semantics: only the supplied fields change, everything
//! else survives the patch. Name uniqueness holds across updates too.

#![cfg(feature = "crud")]

use cats_client::{ApiStatus, CatUpdate, ErrorResponse};
use cats_env_tests::factory;
use cats_env_tests::harness::run_test;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_update_preserves_unspecified_fields() {
    run_test(|ctx| async move {
        let new_cat = factory::valid_cat();
        let created = ctx.create_tracked_cat(&new_cat).await;

        let renamed = factory::unique_name("Updated");
        let update = CatUpdate::with_name_and_age(&renamed, 2);

        let patched = ctx
            .client()
            .update_cat(&created.id, &update)
            .await
            .expect("PATCH of an existing cat should succeed");

        assert_eq!(patched.data.name, renamed);
        assert_eq!(patched.data.age, 2);

        // Round trip: fetch again and check the omitted fields survived.
        let fetched = ctx
            .client()
            .get_cat(&created.id)
            .await
            .expect("GET after PATCH should succeed");

        assert_eq!(fetched.data.name, renamed);
        assert_eq!(fetched.data.age, 2);
        assert_eq!(fetched.data.sex, new_cat.sex, "sex should be unchanged");
        assert_eq!(fetched.data.breed, new_cat.breed, "breed should be unchanged");
        assert_eq!(
            fetched.data.colour, new_cat.colour,
            "colour should be unchanged"
        );
        assert_eq!(fetched.data.likes, new_cat.likes, "likes should be unchanged");
    })
    .await;
}

#[tokio::test]
#[serial]
async fn test_update_rejects_existing_name() {
    run_test(|ctx| async move {
        let (cat1, cat2) = factory::pair_of_cats();

        ctx.create_tracked_cat(&cat1).await;
        let created2 = ctx.create_tracked_cat(&cat2).await;

        // Try to steal cat1's name.
        let body = serde_json::json!({ "name": cat1.name }).to_string();
        let response = ctx
            .client()
            .raw_update_cat(&created2.id, &body)
            .await
            .expect("Network request should succeed");

        assert_eq!(
            response.status().as_u16(),
            400,
            "Renaming onto a taken name should be rejected with 400"
        );

        let error: ErrorResponse = response
            .json()
            .await
            .expect("Rejection body should deserialize into the error schema");
        assert_eq!(error.status, ApiStatus::Failed);
        assert!(
            error.data.error.contains("already exists"),
            "Name-collision error should mention 'already exists', got: {}",
            error.data.error
        );
    })
    .await;
}
