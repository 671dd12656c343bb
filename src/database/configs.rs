// ABOUTME: Configuration row database operations scoped by application name
// ABOUTME: Enforces the store-level uniqueness constraint on (application_name, name)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async Config Contributors

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{ConfigDraft, ConfigEntry};
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// Map a row to a `ConfigEntry`, tolerating legacy timestamp formats
fn row_to_entry(row: &SqliteRow) -> ConfigEntry {
    let created_at_str: String = row.get("created_at");
    let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
        .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

    let updated_at_str: String = row.get("updated_at");
    let updated_at = chrono::DateTime::parse_from_rfc3339(&updated_at_str)
        .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

    ConfigEntry {
        id: row.get("id"),
        application_name: row.get("application_name"),
        name: row.get("name"),
        value_type: row.get("value_type"),
        value: row.get("value"),
        is_active: row.get("is_active"),
        created_at,
        updated_at,
    }
}

impl Database {
    /// Create the configs table and its indexes
    ///
    /// The uniqueness constraint covers all rows regardless of the active
    /// flag: an inactive row still occupies its `(application_name, name)`
    /// slot.
    pub(super) async fn migrate_configs(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS configs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                application_name TEXT NOT NULL,
                name TEXT NOT NULL,
                value_type TEXT NOT NULL DEFAULT 'string',
                value TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE (application_name, name)
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create configs table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_configs_app_active ON configs(application_name, is_active)",
        )
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create configs index: {e}")))?;

        Ok(())
    }

    /// Get an active configuration row by name within an application
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_config(&self, name: &str, application: &str) -> AppResult<Option<ConfigEntry>> {
        let row = sqlx::query(
            r"
            SELECT id, application_name, name, value_type, value, is_active, created_at, updated_at
            FROM configs
            WHERE name = ?1 AND application_name = ?2 AND is_active = 1
            ",
        )
        .bind(name)
        .bind(application)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get config: {e}")))?;

        Ok(row.as_ref().map(row_to_entry))
    }

    /// Get a configuration row by id, regardless of tenant or active flag
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_config_by_id(&self, id: i64) -> AppResult<Option<ConfigEntry>> {
        let row = sqlx::query(
            r"
            SELECT id, application_name, name, value_type, value, is_active, created_at, updated_at
            FROM configs
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get config by id: {e}")))?;

        Ok(row.as_ref().map(row_to_entry))
    }

    /// Get all active configuration rows for an application
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_all_configs(&self, application: &str) -> AppResult<Vec<ConfigEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, application_name, name, value_type, value, is_active, created_at, updated_at
            FROM configs
            WHERE application_name = ?1 AND is_active = 1
            ",
        )
        .bind(application)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get configs: {e}")))?;

        Ok(rows.iter().map(row_to_entry).collect())
    }

    /// Insert a configuration row
    ///
    /// The store's uniqueness constraint is the last line of defense against
    /// concurrent inserts of the same `(application_name, name)` pair; its
    /// violation maps to the same duplicate error the service-level check
    /// raises.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateConfig` on a uniqueness violation, or a database
    /// error if the insert fails for any other reason
    pub async fn insert_config(
        &self,
        draft: &ConfigDraft,
        application: &str,
    ) -> AppResult<ConfigEntry> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO configs (application_name, name, value_type, value, is_active, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)
            ",
        )
        .bind(application)
        .bind(&draft.name)
        .bind(&draft.value_type)
        .bind(&draft.value)
        .bind(draft.is_active)
        .bind(now.to_rfc3339())
        .execute(self.pool())
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::duplicate_config(&draft.name, application)
            }
            _ => AppError::database(format!("Failed to insert config: {e}")),
        })?;

        Ok(ConfigEntry {
            id: result.last_insert_rowid(),
            application_name: application.to_owned(),
            name: draft.name.clone(),
            value_type: draft.value_type.clone(),
            value: draft.value.clone(),
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Overwrite name, type, value, and active flag of a row in place
    ///
    /// Returns the number of rows affected; zero means no row with that id
    /// exists for the application.
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` when a rename collides with another
    /// row's uniqueness slot, or a database error otherwise
    pub async fn update_config(
        &self,
        id: i64,
        draft: &ConfigDraft,
        application: &str,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE configs
            SET name = ?1, value_type = ?2, value = ?3, is_active = ?4, updated_at = ?5
            WHERE id = ?6 AND application_name = ?7
            ",
        )
        .bind(&draft.name)
        .bind(&draft.value_type)
        .bind(&draft.value)
        .bind(draft.is_active)
        .bind(Utc::now().to_rfc3339())
        .bind(id)
        .bind(application)
        .execute(self.pool())
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::constraint_violation(format!(
                    "rename of config '{id}' collides with an existing name"
                ))
            }
            _ => AppError::database(format!("Failed to update config: {e}")),
        })?;

        Ok(result.rows_affected())
    }

    /// Delete a configuration row by id
    ///
    /// Returns the number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_config(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM configs WHERE id = ?1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to delete config: {e}")))?;

        Ok(result.rows_affected())
    }
}
