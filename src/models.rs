// ABOUTME: Persisted configuration models shared by the store, service, and reader layers
// ABOUTME: Rows keep values as raw text; typed interpretation is always derived
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async Config Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted configuration row
///
/// The `(application_name, name)` pair is unique across all rows, active or
/// not, enforced by a store-level constraint. `value` is the authoritative
/// textual representation; `value_type` is an open vocabulary tag read by the
/// coercion engine (`int`, `double`, `bool`, anything else means string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Store-assigned identity, immutable once created
    pub id: i64,
    /// Tenant discriminator; every lookup is scoped to exactly one
    pub application_name: String,
    /// Key, unique within the application regardless of the active flag
    pub name: String,
    /// Declared type tag, free-form
    pub value_type: String,
    /// Raw text value, never stored pre-typed
    pub value: String,
    /// Soft visibility flag; inactive rows are invisible to lookups but
    /// still occupy the uniqueness slot
    pub is_active: bool,
    /// When the row was created
    pub created_at: DateTime<Utc>,
    /// When the row was last modified
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a configuration entry
///
/// Identity and tenant are never part of the payload: the id is
/// store-assigned and the application name comes from the call scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDraft {
    /// Key within the application
    pub name: String,
    /// Declared type tag
    #[serde(default = "default_value_type")]
    pub value_type: String,
    /// Raw text value
    pub value: String,
    /// Visibility flag, defaults to active
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_value_type() -> String {
    "string".to_owned()
}

const fn default_is_active() -> bool {
    true
}

impl ConfigDraft {
    /// Create a new active draft
    pub fn new(
        name: impl Into<String>,
        value_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
            value: value.into(),
            is_active: true,
        }
    }

    /// Set the visibility flag
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}
