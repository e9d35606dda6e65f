// ABOUTME: Integration tests for the diary store
// ABOUTME: Validates aggregate persistence, cascade deletion, and meal replacement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

mod common;

use chrono::NaiveDate;
use common::create_test_database;
use diario_core::errors::ErrorCode;
use diario_core::models::Meal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn meal(meal_type: &str, comments: &str) -> Meal {
    Meal {
        meal_type: meal_type.into(),
        method: "BLW".into(),
        assessment: "SUCESSO".into(),
        acceptance: "OTIMO".into(),
        comments: comments.into(),
    }
}

#[tokio::test]
async fn test_insert_returns_full_entry_view() {
    let (db, _dir) = create_test_database().await;

    let meals = vec![meal("LANCHE_MANHA", ""), meal("ALMOCO", "comeu tudo")];
    let entry = db.insert_diary(date(2024, 1, 10), &meals).await.unwrap();

    assert_eq!(entry.date, date(2024, 1, 10));
    assert_eq!(entry.meals, meals);
}

#[tokio::test]
async fn test_insert_duplicate_date_is_a_conflict() {
    let (db, _dir) = create_test_database().await;

    db.insert_diary(date(2024, 1, 10), &[meal("JANTAR", "")])
        .await
        .unwrap();

    let err = db
        .insert_diary(date(2024, 1, 10), &[meal("ALMOCO", "")])
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    // The failed insert must not have touched the stored meals
    let stored = db.get_diary(date(2024, 1, 10)).await.unwrap().unwrap();
    assert_eq!(stored.meals.len(), 1);
    assert_eq!(stored.meals[0].meal_type, "JANTAR");
}

#[tokio::test]
async fn test_insert_with_empty_meal_list_is_legal() {
    let (db, _dir) = create_test_database().await;

    let entry = db.insert_diary(date(2024, 2, 1), &[]).await.unwrap();
    assert!(entry.meals.is_empty());

    let stored = db.get_diary(date(2024, 2, 1)).await.unwrap().unwrap();
    assert!(stored.meals.is_empty());
}

#[tokio::test]
async fn test_get_diary_unknown_date_is_none() {
    let (db, _dir) = create_test_database().await;

    let found = db.get_diary(date(1999, 12, 31)).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_delete_removes_entry_and_all_meals() {
    let (db, _dir) = create_test_database().await;

    db.insert_diary(date(2024, 3, 5), &[meal("CAFE_MANHA", ""), meal("JANTAR", "")])
        .await
        .unwrap();
    db.insert_diary(date(2024, 3, 6), &[meal("ALMOCO", "")])
        .await
        .unwrap();

    db.delete_diary(date(2024, 3, 5)).await.unwrap();

    assert!(db.get_diary(date(2024, 3, 5)).await.unwrap().is_none());

    // The other entry is untouched
    let remaining = db.list_diaries().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].date, date(2024, 3, 6));
    assert_eq!(remaining[0].meals.len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_date_is_not_found() {
    let (db, _dir) = create_test_database().await;

    let err = db.delete_diary(date(2024, 3, 5)).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_replace_meals_is_a_full_replacement() {
    let (db, _dir) = create_test_database().await;

    db.insert_diary(
        date(2024, 4, 1),
        &[meal("CAFE_MANHA", "old"), meal("ALMOCO", "old")],
    )
    .await
    .unwrap();

    let new_meals = vec![meal("JANTAR", "new")];
    let updated = db.replace_meals(date(2024, 4, 1), &new_meals).await.unwrap();
    assert_eq!(updated.meals, new_meals);

    // Old meals are fully gone: exactly the new list remains
    let stored = db.get_diary(date(2024, 4, 1)).await.unwrap().unwrap();
    assert_eq!(stored.meals, new_meals);
}

#[tokio::test]
async fn test_replace_meals_with_empty_list_clears_meals() {
    let (db, _dir) = create_test_database().await;

    db.insert_diary(date(2024, 4, 2), &[meal("ALMOCO", "")])
        .await
        .unwrap();

    db.replace_meals(date(2024, 4, 2), &[]).await.unwrap();

    let stored = db.get_diary(date(2024, 4, 2)).await.unwrap().unwrap();
    assert!(stored.meals.is_empty());
}

#[tokio::test]
async fn test_replace_meals_unknown_date_is_not_found() {
    let (db, _dir) = create_test_database().await;

    let err = db
        .replace_meals(date(2024, 4, 3), &[meal("JANTAR", "")])
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_list_diaries_is_ordered_by_date() {
    let (db, _dir) = create_test_database().await;

    // Insert out of order; listing must come back in date order
    db.insert_diary(date(2024, 5, 20), &[]).await.unwrap();
    db.insert_diary(date(2024, 5, 1), &[meal("ALMOCO", "")])
        .await
        .unwrap();
    db.insert_diary(date(2024, 5, 10), &[]).await.unwrap();

    let entries = db.list_diaries().await.unwrap();
    let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 5, 1), date(2024, 5, 10), date(2024, 5, 20)]
    );
    assert_eq!(entries[0].meals.len(), 1);
}

#[tokio::test]
async fn test_list_diaries_empty_database_is_empty_list() {
    let (db, _dir) = create_test_database().await;

    let entries = db.list_diaries().await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_meals_preserve_insertion_order() {
    let (db, _dir) = create_test_database().await;

    let meals = vec![
        meal("CAFE_MANHA", "1"),
        meal("LANCHE_MANHA", "2"),
        meal("ALMOCO", "3"),
        meal("JANTAR", "4"),
    ];
    db.insert_diary(date(2024, 6, 1), &meals).await.unwrap();

    let stored = db.get_diary(date(2024, 6, 1)).await.unwrap().unwrap();
    assert_eq!(stored.meals, meals);
}
