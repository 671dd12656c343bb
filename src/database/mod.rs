// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Management
//!
//! Owns the `SQLite` connection pool for configuration storage. The handle is
//! opened once at reader construction, passed by reference into the service
//! layer, and closed explicitly at shutdown.

mod configs;

use crate::errors::{AppError, AppResult};
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database manager for configuration row storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_configs().await
    }

    /// Close the connection pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
