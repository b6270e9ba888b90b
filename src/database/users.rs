// ABOUTME: SQLite user storage with sqlx
// ABOUTME: Schema migration, registration, lookup by username, and profile updates

use super::UserStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Gender, Profile, User};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use uuid::Uuid;

/// SQLite-backed [`UserStore`]
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    /// Connect and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened or the schema
    /// migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = if database_url.contains(":memory:") {
            // Each in-memory connection is its own database
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(database_url)
                .await?
        } else {
            // Ensure SQLite creates the database file if it doesn't exist
            let connection_options = if database_url.starts_with("sqlite:")
                && !database_url.contains("mode=")
            {
                format!("{database_url}?mode=rwc")
            } else {
                database_url.to_owned()
            };
            SqlitePool::connect(&connection_options).await?
        };

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Create the users table
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                email TEXT UNIQUE NOT NULL,
                full_name TEXT NOT NULL DEFAULT '',
                password_hash TEXT NOT NULL,
                birth_date TEXT NOT NULL,
                gender TEXT NOT NULL,
                weight_kg REAL NOT NULL,
                height_cm REAL NOT NULL,
                activity_level TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Convert a database row to a User struct
    fn row_to_user(row: &SqliteRow) -> AppResult<User> {
        let id: String = row.try_get("id")?;
        let gender: String = row.try_get("gender")?;
        let birth_date: NaiveDate = row.try_get("birth_date")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| AppError::database(format!("Invalid user id {id}: {e}")))?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            full_name: row.try_get("full_name")?,
            password_hash: row.try_get("password_hash")?,
            profile: Profile {
                gender: Gender::from(gender),
                weight_kg: row.try_get("weight_kg")?,
                height_cm: row.try_get("height_cm")?,
                birth_date,
                activity_level: row.try_get("activity_level")?,
            },
            created_at,
            updated_at,
        })
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, username, email, full_name, password_hash, birth_date, gender,
                   weight_kg, height_cm, activity_level, created_at, updated_at
            FROM users WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create_user(&self, user: &User) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (
                id, username, email, full_name, password_hash, birth_date, gender,
                weight_kg, height_cm, activity_level, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.password_hash)
        .bind(user.profile.birth_date)
        .bind(user.profile.gender.as_str())
        .bind(user.profile.weight_kg)
        .bind(user.profile.height_cm)
        .bind(&user.profile.activity_level)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_user(&self, user: &User) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users SET
                email = $2,
                full_name = $3,
                password_hash = $4,
                birth_date = $5,
                gender = $6,
                weight_kg = $7,
                height_cm = $8,
                activity_level = $9,
                updated_at = $10
            WHERE id = $1
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.password_hash)
        .bind(user.profile.birth_date)
        .bind(user.profile.gender.as_str())
        .bind(user.profile.weight_kg)
        .bind(user.profile.height_cm)
        .bind(&user.profile.activity_level)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {}", user.username)));
        }
        Ok(())
    }
}
