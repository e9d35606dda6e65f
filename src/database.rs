// ABOUTME: Database management for the feeding diary aggregate
// ABOUTME: Handles schema migration and diary entry / meal persistence over SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Database Management
//!
//! This module owns the diary/meal aggregate: a `DiaryEntry` is keyed by
//! its calendar date and exclusively owns a variable-size set of meals.
//! Meals never exist without their parent entry, edits replace the meal
//! list wholesale, and removal deletes entry and meals together. Every
//! multi-statement write runs inside a single transaction committed
//! once, so a failed replacement never leaves orphaned meals behind.

use chrono::NaiveDate;
use diario_core::errors::{AppError, AppResult};
use diario_core::models::{DiaryEntry, Meal};
use sqlx::{Pool, Row, Sqlite, SqlitePool};
use tracing::{debug, warn};

/// Database manager for diary entry and meal storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection pool and run migrations
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when the pool cannot be created or the
    /// schema migration fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| {
                AppError::database(format!("failed to connect to {database_url}")).with_source(e)
            })?;

        let db = Self { pool };

        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when schema creation fails.
    pub async fn migrate(&self) -> AppResult<()> {
        // Diary entries are keyed directly by their calendar date
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS diary_entries (
                entry_date TEXT PRIMARY KEY
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(migration_error)?;

        // Meals carry a surrogate id internal to the store; clients only
        // ever see meals through their owning entry
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                entry_date TEXT NOT NULL,
                meal_type TEXT NOT NULL,
                method TEXT NOT NULL,
                assessment TEXT NOT NULL,
                acceptance TEXT NOT NULL,
                comments TEXT NOT NULL,
                FOREIGN KEY (entry_date) REFERENCES diary_entries (entry_date) ON DELETE CASCADE
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(migration_error)?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_meals_entry_date ON meals(entry_date)")
            .execute(&self.pool)
            .await
            .map_err(migration_error)?;

        Ok(())
    }

    /// Create a diary entry with the given meals
    ///
    /// The entry row and every meal row are inserted in one transaction.
    ///
    /// # Errors
    ///
    /// `ResourceAlreadyExists` when an entry for `date` is already
    /// stored; `StorageError` for any other write failure.
    pub async fn insert_diary(&self, date: NaiveDate, meals: &[Meal]) -> AppResult<DiaryEntry> {
        debug!(date = %date, meals = meals.len(), "inserting diary entry");

        let mut tx = self.pool.begin().await.map_err(write_error)?;

        sqlx::query("INSERT INTO diary_entries (entry_date) VALUES (?)")
            .bind(date)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if e.to_string().contains("UNIQUE constraint failed") {
                    AppError::resource_exists(format!("diary entry for {date}"))
                } else {
                    write_error(e)
                }
            })?;

        for meal in meals {
            insert_meal(&mut tx, date, meal).await?;
        }

        tx.commit().await.map_err(write_error)?;

        Ok(DiaryEntry {
            date,
            meals: meals.to_vec(),
        })
    }

    /// Return all diary entries ordered by date, meals in insertion order
    ///
    /// An empty database yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// `StorageError` when the read fails.
    pub async fn list_diaries(&self) -> AppResult<Vec<DiaryEntry>> {
        let rows = sqlx::query(
            r"
            SELECT d.entry_date, m.meal_type, m.method, m.assessment, m.acceptance, m.comments
            FROM diary_entries d
            LEFT JOIN meals m ON m.entry_date = d.entry_date
            ORDER BY d.entry_date, m.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_error)?;

        let mut entries: Vec<DiaryEntry> = Vec::new();
        for row in rows {
            let date: NaiveDate = row.try_get("entry_date").map_err(read_error)?;

            if entries.last().is_none_or(|e| e.date != date) {
                entries.push(DiaryEntry {
                    date,
                    meals: Vec::new(),
                });
            }

            // LEFT JOIN: entries without meals produce a NULL meal row
            let meal_type: Option<String> = row.try_get("meal_type").map_err(read_error)?;
            if let (Some(meal_type), Some(entry)) = (meal_type, entries.last_mut()) {
                entry.meals.push(Meal {
                    meal_type,
                    method: row.try_get("method").map_err(read_error)?,
                    assessment: row.try_get("assessment").map_err(read_error)?,
                    acceptance: row.try_get("acceptance").map_err(read_error)?,
                    comments: row.try_get("comments").map_err(read_error)?,
                });
            }
        }

        Ok(entries)
    }

    /// Find a diary entry by its date
    ///
    /// # Errors
    ///
    /// `StorageError` when the read fails.
    pub async fn get_diary(&self, date: NaiveDate) -> AppResult<Option<DiaryEntry>> {
        let row = sqlx::query("SELECT entry_date FROM diary_entries WHERE entry_date = ?")
            .bind(date)
            .fetch_optional(&self.pool)
            .await
            .map_err(read_error)?;

        if row.is_none() {
            return Ok(None);
        }

        let meals = self.meals_for_date(date).await?;
        Ok(Some(DiaryEntry { date, meals }))
    }

    /// Delete a diary entry and every meal it owns, atomically
    ///
    /// Existence is checked before the cascade so a missing entry is a
    /// clean `ResourceNotFound` rather than a fault while enumerating
    /// meals that do not exist.
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when no entry exists for `date`;
    /// `StorageError` when a delete fails.
    pub async fn delete_diary(&self, date: NaiveDate) -> AppResult<()> {
        debug!(date = %date, "deleting diary entry");

        let mut tx = self.pool.begin().await.map_err(write_error)?;

        entry_exists(&mut tx, date).await?;

        sqlx::query("DELETE FROM meals WHERE entry_date = ?")
            .bind(date)
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;

        sqlx::query("DELETE FROM diary_entries WHERE entry_date = ?")
            .bind(date)
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;

        tx.commit().await.map_err(write_error)?;

        Ok(())
    }

    /// Replace every meal of an existing entry with a new list
    ///
    /// Full replacement, not a merge: all prior meals for the date are
    /// deleted, the new list is inserted, and the transaction commits
    /// once. A failure anywhere rolls the whole replacement back.
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when no entry exists for `date`;
    /// `StorageError` for any other write failure.
    pub async fn replace_meals(&self, date: NaiveDate, meals: &[Meal]) -> AppResult<DiaryEntry> {
        debug!(date = %date, meals = meals.len(), "replacing meals for diary entry");

        let mut tx = self.pool.begin().await.map_err(write_error)?;

        entry_exists(&mut tx, date).await?;

        sqlx::query("DELETE FROM meals WHERE entry_date = ?")
            .bind(date)
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;

        for meal in meals {
            insert_meal(&mut tx, date, meal).await?;
        }

        tx.commit().await.map_err(write_error)?;

        Ok(DiaryEntry {
            date,
            meals: meals.to_vec(),
        })
    }

    async fn meals_for_date(&self, date: NaiveDate) -> AppResult<Vec<Meal>> {
        let rows = sqlx::query(
            r"
            SELECT meal_type, method, assessment, acceptance, comments
            FROM meals
            WHERE entry_date = ?
            ORDER BY id
            ",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(read_error)?;

        let mut meals = Vec::with_capacity(rows.len());
        for row in rows {
            meals.push(Meal {
                meal_type: row.try_get("meal_type").map_err(read_error)?,
                method: row.try_get("method").map_err(read_error)?,
                assessment: row.try_get("assessment").map_err(read_error)?,
                acceptance: row.try_get("acceptance").map_err(read_error)?,
                comments: row.try_get("comments").map_err(read_error)?,
            });
        }

        Ok(meals)
    }
}

/// Insert one meal row within an open transaction
async fn insert_meal(
    tx: &mut sqlx::Transaction<'_, Sqlite>,
    date: NaiveDate,
    meal: &Meal,
) -> AppResult<()> {
    sqlx::query(
        r"
        INSERT INTO meals (entry_date, meal_type, method, assessment, acceptance, comments)
        VALUES (?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(date)
    .bind(&meal.meal_type)
    .bind(&meal.method)
    .bind(&meal.assessment)
    .bind(&meal.acceptance)
    .bind(&meal.comments)
    .execute(&mut **tx)
    .await
    .map_err(write_error)?;

    Ok(())
}

/// Verify an entry exists within an open transaction
async fn entry_exists(tx: &mut sqlx::Transaction<'_, Sqlite>, date: NaiveDate) -> AppResult<()> {
    let row = sqlx::query("SELECT entry_date FROM diary_entries WHERE entry_date = ?")
        .bind(date)
        .fetch_optional(&mut **tx)
        .await
        .map_err(read_error)?;

    if row.is_none() {
        warn!(date = %date, "diary entry not found");
        return Err(AppError::not_found(format!("diary entry for {date}")));
    }

    Ok(())
}

fn migration_error(e: sqlx::Error) -> AppError {
    AppError::database("schema migration failed").with_source(e)
}

fn write_error(e: sqlx::Error) -> AppError {
    AppError::storage("unable to save diary entry").with_source(e)
}

fn read_error(e: sqlx::Error) -> AppError {
    AppError::storage("unable to read diary entries").with_source(e)
}
