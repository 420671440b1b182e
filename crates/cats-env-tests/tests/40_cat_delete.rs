//! CRUD Tests: Deleting Cats (DELETE /api/v1/cats/{id})

#![cfg(feature = "crud")]

use cats_env_tests::factory;
use cats_env_tests::harness::run_test;
use serial_test::serial;
use uuid::Uuid;

#[tokio::test]
#[serial]
async fn test_delete_existing_cat() {
    run_test(|ctx| async move {
        let created = ctx
            .create_tracked_cat(&factory::valid_cat_named(factory::unique_name("ToDelete")))
            .await;

        let response = ctx
            .client()
            .raw_delete_cat(&created.id)
            .await
            .expect("Network request should succeed");

        assert_eq!(
            response.status().as_u16(),
            204,
            "Deleting an existing cat should return 204"
        );

        // The record must be gone; the cleanup pass will see the same 404
        // for this id and tolerate it.
        let fetched = ctx
            .client()
            .raw_get_cat(&created.id)
            .await
            .expect("Network request should succeed");

        assert_eq!(
            fetched.status().as_u16(),
            404,
            "GET after DELETE should return 404"
        );
    })
    .await;
}

#[tokio::test]
#[serial]
async fn test_delete_unknown_cat_returns_400() {
    run_test(|ctx| async move {
        let unknown_id = Uuid::new_v4().to_string();

        let response = ctx
            .client()
            .raw_delete_cat(&unknown_id)
            .await
            .expect("Network request should succeed");

        // The server answers 400 here, unlike GET's 404 for the same
        // condition. Asserted as observed.
        assert_eq!(
            response.status().as_u16(),
            400,
            "DELETE of a nonexistent cat id should return 400"
        );
    })
    .await;
}
