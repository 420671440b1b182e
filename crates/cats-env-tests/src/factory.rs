//! Payload factories for cat tests.
//!
//! Pure data generation, no side effects. Generated names carry a
//! millisecond timestamp plus a process-wide counter, so repeated calls in
//! the same millisecond still produce distinct names against the shared
//! server.

use std::sync::atomic::{AtomicU64, Ordering};

use cats_client::{NewCat, Sex};
use chrono::Utc;
use rand::Rng;
use serde_json::{json, Value};

static NAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fixture pool of valid cats: (name, sex, age, breed, colour, likes).
///
/// Names get rewritten to unique values on selection, so entries may be
/// reused freely across tests.
const VALID_CAT_POOL: [(&str, Sex, u32, &str, &str, &[&str]); 4] = [
    (
        "Whiskers",
        Sex::Male,
        2,
        "Siamese",
        "Cream",
        &["napping", "laser pointers"],
    ),
    (
        "Luna",
        Sex::Female,
        4,
        "Maine Coon",
        "Grey",
        &["bird watching"],
    ),
    (
        "Oliver",
        Sex::Male,
        1,
        "British Shorthair",
        "Blue",
        &["cardboard boxes", "string"],
    ),
    ("Bella", Sex::Female, 5, "Ragdoll", "White", &["sunbathing"]),
];

/// Generate a unique cat name from a base prefix.
pub fn unique_name(prefix: &str) -> String {
    let counter = NAME_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}_{}_{}", prefix, Utc::now().timestamp_millis(), counter)
}

/// A valid creation payload with a generated unique name and fixed
/// defaults.
pub fn valid_cat() -> NewCat {
    valid_cat_named(unique_name("TestCat"))
}

/// A valid creation payload with the caller's name.
pub fn valid_cat_named(name: impl Into<String>) -> NewCat {
    NewCat {
        name: name.into(),
        sex: Sex::Female,
        age: 3,
        breed: "Test Breed".to_string(),
        colour: "White".to_string(),
        likes: vec!["testing".to_string(), "debugging".to_string()],
    }
}

/// A payload the server must reject: age below zero.
///
/// Raw JSON because a negative age is unrepresentable in [`NewCat`].
pub fn invalid_negative_age() -> Value {
    json!({
        "name": unique_name("GrumpyCat"),
        "sex": "Male",
        "age": -3,
        "breed": "Test Breed",
        "colour": "Black",
        "likes": ["complaining"]
    })
}

/// A payload the server must reject: name and age missing.
pub fn missing_fields_cat() -> Value {
    json!({
        "sex": "Female",
        "breed": "Test Breed",
        "colour": "White",
        "likes": ["testing"]
    })
}

/// Deterministic selection from the fixture pool, index taken modulo the
/// pool length. The entry's name is rewritten to a unique value.
pub fn valid_cat_from_pool(index: usize) -> NewCat {
    let (name, sex, age, breed, colour, likes) = VALID_CAT_POOL[index % VALID_CAT_POOL.len()];

    NewCat {
        name: unique_name(name),
        sex,
        age,
        breed: breed.to_string(),
        colour: colour.to_string(),
        likes: likes.iter().map(|s| s.to_string()).collect(),
    }
}

/// Uniform random selection from the fixture pool.
///
/// Prefer [`valid_cat_from_pool`] where reproducibility matters.
pub fn random_valid_cat() -> NewCat {
    let index = rand::rng().random_range(0..VALID_CAT_POOL.len());
    valid_cat_from_pool(index)
}

/// Two distinctly named valid payloads for uniqueness-conflict tests.
pub fn pair_of_cats() -> (NewCat, NewCat) {
    (
        valid_cat_named(unique_name("Cat1")),
        valid_cat_named(unique_name("Cat2")),
    )
}
