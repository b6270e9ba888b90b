// ABOUTME: Integration tests for user storage backends
// ABOUTME: Runs the same scenarios against in-memory SQLite and the HashMap store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Meal Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

mod common;

use common::{reference_female_profile, user_with_profile};
use mealplanner_server::database::{InMemoryUserStore, SqliteUserStore, UserStore};
use mealplanner_server::errors::ErrorCode;
use mealplanner_server::models::Gender;

async fn sqlite_store() -> SqliteUserStore {
    SqliteUserStore::new("sqlite::memory:").await.unwrap()
}

async fn create_and_find(store: &dyn UserStore) {
    let mut profile = reference_female_profile();
    profile.gender = Gender::from("unspecified");
    let user = user_with_profile("ana", profile);
    store.create_user(&user).await.unwrap();

    let found = store.find_by_username("ana").await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.email, "ana@example.com");
    assert_eq!(found.password_hash, user.password_hash);
    assert_eq!(found.profile, user.profile);
    assert_eq!(
        found.profile.gender,
        Gender::Other("unspecified".to_owned())
    );

    assert!(store.find_by_username("nobody").await.unwrap().is_none());
}

async fn duplicates_rejected(store: &dyn UserStore) {
    let first = user_with_profile("bo", reference_female_profile());
    store.create_user(&first).await.unwrap();

    let same_username = user_with_profile("bo", reference_female_profile());
    let err = store.create_user(&same_username).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    let mut same_email = user_with_profile("bo2", reference_female_profile());
    same_email.email = first.email.clone();
    let err = store.create_user(&same_email).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    let stored = store.find_by_username("bo").await.unwrap().unwrap();
    assert_eq!(stored.id, first.id);
    assert!(store.find_by_username("bo2").await.unwrap().is_none());
}

async fn update_persists(store: &dyn UserStore) {
    let mut user = user_with_profile("cy", reference_female_profile());
    store.create_user(&user).await.unwrap();

    user.profile.weight_kg = 64.5;
    user.profile.activity_level = "lightly active".to_owned();
    user.full_name = "Cy Updated".to_owned();
    store.update_user(&user).await.unwrap();

    let found = store.find_by_username("cy").await.unwrap().unwrap();
    assert!((found.profile.weight_kg - 64.5).abs() < f64::EPSILON);
    assert_eq!(found.profile.activity_level, "lightly active");
    assert_eq!(found.full_name, "Cy Updated");

    let ghost = user_with_profile("ghost", reference_female_profile());
    let err = store.update_user(&ghost).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_sqlite_create_and_find() {
    create_and_find(&sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_duplicates_rejected() {
    duplicates_rejected(&sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_update_persists() {
    update_persists(&sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_migration_is_idempotent() {
    let store = sqlite_store().await;
    store.migrate().await.unwrap();
    store.migrate().await.unwrap();
}

#[tokio::test]
async fn test_memory_create_and_find() {
    create_and_find(&InMemoryUserStore::new()).await;
}

#[tokio::test]
async fn test_memory_duplicates_rejected() {
    duplicates_rejected(&InMemoryUserStore::new()).await;
}

#[tokio::test]
async fn test_memory_update_persists() {
    update_persists(&InMemoryUserStore::new()).await;
}
