// ABOUTME: Domain service layer for configuration business logic
// ABOUTME: Protocol-agnostic CRUD invariants reusable by any admin surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async Config Contributors

//! Domain service layer
//!
//! Business rules live here, independent of whatever admin surface (HTTP,
//! CLI, UI) ends up calling them: uniqueness per application and name,
//! tenant ownership on delete, and the never-fail typed read.

/// Configuration CRUD invariants and typed value access
pub mod configs;

pub use configs::ConfigService;
