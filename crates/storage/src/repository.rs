//! Repository Implementation

use crate::StorageError;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use std::path::Path;
use tracing::{debug, info};

/// Columns shown by the history view, in display order
pub const HISTORY_COLUMNS: [&str; 9] = [
    "id",
    "name",
    "age",
    "bmi",
    "glucose",
    "bp",
    "insulin",
    "risk_level",
    "risk_message",
];

/// One recorded submission plus its evaluator output
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub name: String,
    pub age: f64,
    pub bmi: f64,
    pub glucose: f64,
    pub bp: f64,
    pub insulin: f64,
    pub risk_level: String,
    pub risk_message: String,
}

/// Row fields for a submission that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubmission {
    pub name: String,
    pub age: f64,
    pub bmi: f64,
    pub glucose: f64,
    pub bp: f64,
    pub insulin: f64,
    pub risk_level: String,
    pub risk_message: String,
}

/// Repository over the SQLite history table
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Open the database file, creating it and the schema if missing
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let repository = Self { pool };
        repository.init_schema().await?;
        info!("Opened submission store at {}", path.as_ref().display());
        Ok(repository)
    }

    /// In-memory database, for tests.
    ///
    /// Capped at one connection so every query sees the same in-memory
    /// database instead of a fresh one per pooled connection.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let repository = Self { pool };
        repository.init_schema().await?;
        Ok(repository)
    }

    /// Create the history table if absent; safe to run repeatedly
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                age REAL,
                bmi REAL,
                glucose REAL,
                bp REAL,
                insulin REAL,
                risk_level TEXT,
                risk_message TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a submission row; returns the assigned id.
    ///
    /// The insert is committed before this returns.
    pub async fn append(&self, submission: &NewSubmission) -> Result<i64, StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO history (name, age, bmi, glucose, bp, insulin, risk_level, risk_message)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&submission.name)
        .bind(submission.age)
        .bind(submission.bmi)
        .bind(submission.glucose)
        .bind(submission.bp)
        .bind(submission.insulin)
        .bind(&submission.risk_level)
        .bind(&submission.risk_message)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted history row with ID {}", id);
        Ok(id)
    }

    /// All submissions, newest first
    pub async fn list_all(&self) -> Result<Vec<HistoryRecord>, StorageError> {
        let records = sqlx::query_as::<_, HistoryRecord>(
            r#"
            SELECT id, name, age, bmi, glucose, bp, insulin, risk_level, risk_message
            FROM history
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    /// Total number of stored submissions
    pub async fn count(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM history")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> NewSubmission {
        NewSubmission {
            name: name.to_string(),
            age: 50.0,
            bmi: 32.0,
            glucose: 100.0,
            bp: 80.0,
            insulin: 15.0,
            risk_level: "HIGH RISK".to_string(),
            risk_message: "Elevated risk based on BMI and Age. Focus on lifestyle changes."
                .to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_and_list_round_trip() {
        let repository = Repository::in_memory().await.unwrap();

        let id = repository.append(&sample("Alice")).await.unwrap();

        let records = repository.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[0].age, 50.0);
        assert_eq!(records[0].risk_level, "HIGH RISK");
    }

    #[tokio::test]
    async fn test_ids_increase_and_list_is_newest_first() {
        let repository = Repository::in_memory().await.unwrap();

        let first = repository.append(&sample("first")).await.unwrap();
        let second = repository.append(&sample("second")).await.unwrap();
        let third = repository.append(&sample("third")).await.unwrap();
        assert!(first < second && second < third);

        let records = repository.list_all().await.unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_schema_init_is_idempotent() {
        let repository = Repository::in_memory().await.unwrap();
        repository.append(&sample("kept")).await.unwrap();

        // Running schema creation again must not error or touch rows
        repository.init_schema().await.unwrap();
        repository.init_schema().await.unwrap();

        let records = repository.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "kept");
    }

    #[tokio::test]
    async fn test_count() {
        let repository = Repository::in_memory().await.unwrap();
        assert_eq!(repository.count().await.unwrap(), 0);

        repository.append(&sample("a")).await.unwrap();
        repository.append(&sample("b")).await.unwrap();
        assert_eq!(repository.count().await.unwrap(), 2);
    }

    #[test]
    fn test_history_columns_match_schema_order() {
        assert_eq!(HISTORY_COLUMNS.len(), 9);
        assert_eq!(HISTORY_COLUMNS[0], "id");
        assert_eq!(HISTORY_COLUMNS[8], "risk_message");
    }
}
