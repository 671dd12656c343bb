// ABOUTME: Configuration service enforcing create/update/delete invariants over the store
// ABOUTME: Provides the typed GetValue used by the reader's cache-miss path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async Config Contributors

use crate::coercion::{self, ConfigScalar};
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{ConfigDraft, ConfigEntry};

/// Maximum accepted length for a configuration name
const MAX_NAME_LEN: usize = 256;

/// Configuration service scoped operations
///
/// Owns a handle to the store (a cheap pool reference, cloned from the
/// explicitly lifecycled [`Database`]) and layers the CRUD invariants on top
/// of it. All operations take the tenant explicitly; nothing here is global.
#[derive(Clone)]
pub struct ConfigService {
    db: Database,
}

impl ConfigService {
    /// Create a service over an open database handle
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Active-only lookup by name within an application
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails
    pub async fn get(&self, name: &str, application: &str) -> AppResult<Option<ConfigEntry>> {
        self.db.get_config(name, application).await
    }

    /// Typed lookup by name within an application
    ///
    /// An absent entry or a blank stored value resolves to the target type's
    /// default. Coercion itself cannot fail: an unparseable value degrades to
    /// the default as well. Only store-level failures propagate.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails
    pub async fn get_value<T: ConfigScalar>(&self, name: &str, application: &str) -> AppResult<T> {
        let Some(entry) = self.db.get_config(name, application).await? else {
            return Ok(T::default());
        };

        if entry.value.trim().is_empty() {
            return Ok(T::default());
        }

        Ok(coercion::coerce(&entry.value, &entry.value_type))
    }

    /// All active entries for an application; order is not meaningful
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails
    pub async fn get_all(&self, application: &str) -> AppResult<Vec<ConfigEntry>> {
        self.db.get_all_configs(application).await
    }

    /// Create a configuration entry for an application
    ///
    /// The duplicate check below considers active rows only; the store's
    /// uniqueness constraint covers all rows, so a name colliding with an
    /// inactive row is rejected one layer down with the same error code.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank or oversized name, or
    /// `DuplicateConfig` when the name is already taken for the application
    pub async fn add(&self, draft: &ConfigDraft, application: &str) -> AppResult<ConfigEntry> {
        let draft = normalize(draft)?;

        if self.db.get_config(&draft.name, application).await?.is_some() {
            return Err(AppError::duplicate_config(&draft.name, application));
        }

        self.db.insert_config(&draft, application).await
    }

    /// Overwrite an entry's name, type, value, and active flag in place
    ///
    /// Identity and tenant are immutable; the value is trimmed before
    /// storage.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no entry with that id exists for the
    /// application
    pub async fn update(
        &self,
        id: i64,
        draft: &ConfigDraft,
        application: &str,
    ) -> AppResult<ConfigEntry> {
        let draft = normalize(draft)?;

        let affected = self.db.update_config(id, &draft, application).await?;
        if affected == 0 {
            return Err(AppError::not_found(format!(
                "config '{id}' not found for application '{application}'"
            )));
        }

        self.db
            .get_config_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("config '{id}' not found")))
    }

    /// Remove an entry, verifying tenant ownership first
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the id does not exist at all, or
    /// `TenantMismatch` when it belongs to a different application
    pub async fn delete(&self, id: i64, application: &str) -> AppResult<i64> {
        let Some(existing) = self.db.get_config_by_id(id).await? else {
            return Err(AppError::not_found(format!("config '{id}' not found")));
        };

        if existing.application_name != application {
            return Err(AppError::tenant_mismatch(id, application));
        }

        let affected = self.db.delete_config(id).await?;
        if affected == 0 {
            return Err(AppError::not_found(format!("config '{id}' not found")));
        }

        Ok(id)
    }
}

/// Trim name and value, validating the name on the way in
fn normalize(draft: &ConfigDraft) -> AppResult<ConfigDraft> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("config name must not be blank"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(AppError::invalid_input(format!(
            "config name exceeds {MAX_NAME_LEN} characters"
        )));
    }

    Ok(ConfigDraft {
        name: name.to_owned(),
        value_type: draft.value_type.trim().to_owned(),
        value: draft.value.trim().to_owned(),
        is_active: draft.is_active,
    })
}
