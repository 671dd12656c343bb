// ABOUTME: Main library entry point for the dyncfg configuration platform
// ABOUTME: Provides typed configuration access with caching and store-outage fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async Config Contributors

#![deny(unsafe_code)]

//! # dyncfg
//!
//! Per-application key/value configuration stored as typed strings in a
//! relational table, exposed to consuming services through a typed accessor
//! that stays available across transient store outages.
//!
//! ## Features
//!
//! - **Typed access**: declared type tags (`int`, `double`, `bool`, free-form
//!   strings) are coerced to the caller's requested type with a never-fail
//!   contract
//! - **Two-tier caching**: a TTL-bounded live entry backed by an unbounded
//!   last-known-good snapshot entry
//! - **Fallback on failure**: store outages degrade to the snapshot, then to
//!   the target type's default, never to an error
//! - **Tenant isolation**: every row belongs to exactly one application name,
//!   with a store-level uniqueness constraint per `(application, name)` pair
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dyncfg::config::ReaderConfig;
//! use dyncfg::errors::AppResult;
//! use dyncfg::reader::ConfigurationReader;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ReaderConfig::new(
//!         "SERVICE-A",
//!         "sqlite:dyncfg.db",
//!         Duration::from_millis(30_000),
//!     );
//!     let reader = ConfigurationReader::connect(config).await?;
//!
//!     // Never fails: resolves to a real value, a stale snapshot, or a default.
//!     let max_items: i64 = reader.get_value("SiteMaxItemCount").await;
//!     println!("SiteMaxItemCount = {max_items}");
//!
//!     reader.shutdown().await;
//!     Ok(())
//! }
//! ```

/// Two-tier configuration cache (live TTL entries + snapshot fallback)
pub mod cache;

/// Type coercion engine mapping raw stored strings to typed values
pub mod coercion;

/// Construction-time reader configuration
pub mod config;

/// Application constants and environment defaults
pub mod constants;

/// Configuration row storage over `SQLite`
pub mod database;

/// Unified error handling system with standard error codes
pub mod errors;

/// Structured logging configuration
pub mod logging;

/// Persisted configuration models
pub mod models;

/// Configuration reader facade with read-through caching and fallback
pub mod reader;

/// Domain service layer enforcing CRUD invariants
pub mod services;
