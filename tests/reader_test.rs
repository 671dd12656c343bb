// ABOUTME: Integration tests for the configuration reader facade
// ABOUTME: Covers cache idempotence, TTL expiry, snapshot fallback, and defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright (c) 2025 Async Config Contributors

mod common;

use anyhow::Result;
use common::{break_store, create_test_database, seed_config};
use dyncfg::models::ConfigDraft;
use dyncfg::reader::ConfigurationReader;
use std::time::Duration;

const APP: &str = "SERVICE-A";

#[tokio::test]
async fn test_reader_returns_typed_value() -> Result<()> {
    let test_db = create_test_database().await?;
    let reader = ConfigurationReader::new(APP, test_db.db.clone(), Duration::from_secs(30));

    seed_config(reader.service(), APP, "SiteMaxItemCount", "int", "42").await?;

    let value: i64 = reader.get_value("SiteMaxItemCount").await;
    assert_eq!(value, 42);

    Ok(())
}

#[tokio::test]
async fn test_second_read_within_interval_skips_store() -> Result<()> {
    let test_db = create_test_database().await?;
    let reader = ConfigurationReader::new(APP, test_db.db.clone(), Duration::from_secs(30));

    seed_config(reader.service(), APP, "SiteMaxItemCount", "int", "42").await?;
    let first: i64 = reader.get_value("SiteMaxItemCount").await;
    assert_eq!(first, 42);

    // A direct store mutation is invisible while the live entry holds
    sqlx::query("UPDATE configs SET value = '99' WHERE name = 'SiteMaxItemCount'")
        .execute(test_db.db.pool())
        .await?;
    let second: i64 = reader.get_value("SiteMaxItemCount").await;
    assert_eq!(second, 42);

    // Even with the store gone the live entry still answers
    break_store(&test_db.db).await?;
    let third: i64 = reader.get_value("SiteMaxItemCount").await;
    assert_eq!(third, 42);

    Ok(())
}

#[tokio::test]
async fn test_expired_live_entry_picks_up_changes() -> Result<()> {
    let test_db = create_test_database().await?;
    let reader = ConfigurationReader::new(APP, test_db.db.clone(), Duration::from_millis(100));

    seed_config(reader.service(), APP, "MaxRetries", "int", "3").await?;
    let before: i64 = reader.get_value("MaxRetries").await;
    assert_eq!(before, 3);

    sqlx::query("UPDATE configs SET value = '5' WHERE name = 'MaxRetries'")
        .execute(test_db.db.pool())
        .await?;

    tokio::time::sleep(Duration::from_millis(150)).await;
    let after: i64 = reader.get_value("MaxRetries").await;
    assert_eq!(after, 5);

    Ok(())
}

#[tokio::test]
async fn test_snapshot_fallback_on_store_failure() -> Result<()> {
    let test_db = create_test_database().await?;
    let reader = ConfigurationReader::new(APP, test_db.db.clone(), Duration::from_millis(100));

    seed_config(reader.service(), APP, "SiteName", "string", "boyner.com.tr").await?;
    let live: String = reader.get_value("SiteName").await;
    assert_eq!(live, "boyner.com.tr");

    // Store gone, live entry expired: only the snapshot remains
    break_store(&test_db.db).await?;
    tokio::time::sleep(Duration::from_millis(150)).await;

    let fallback: String = reader.get_value("SiteName").await;
    assert_eq!(fallback, "boyner.com.tr");

    Ok(())
}

#[tokio::test]
async fn test_defaults_when_no_snapshot_exists() -> Result<()> {
    let test_db = create_test_database().await?;
    let reader = ConfigurationReader::new(APP, test_db.db.clone(), Duration::from_secs(30));

    break_store(&test_db.db).await?;

    let int_value: i64 = reader.get_value("Missing").await;
    assert_eq!(int_value, 0);

    let string_value: String = reader.get_value("Missing").await;
    assert_eq!(string_value, String::new());

    let bool_value: bool = reader.get_value("Missing").await;
    assert!(!bool_value);

    Ok(())
}

#[tokio::test]
async fn test_cached_default_served_like_any_value() -> Result<()> {
    let test_db = create_test_database().await?;
    let reader = ConfigurationReader::new(APP, test_db.db.clone(), Duration::from_secs(30));

    // Miss resolves to the default and is cached as such
    let missing: i64 = reader.get_value("LateArrival").await;
    assert_eq!(missing, 0);

    // The row arriving later is invisible until the live entry expires
    seed_config(reader.service(), APP, "LateArrival", "int", "7").await?;
    let still_cached: i64 = reader.get_value("LateArrival").await;
    assert_eq!(still_cached, 0);

    Ok(())
}

#[tokio::test]
async fn test_keys_are_independent() -> Result<()> {
    let test_db = create_test_database().await?;
    let reader = ConfigurationReader::new(APP, test_db.db.clone(), Duration::from_secs(30));

    seed_config(reader.service(), APP, "A", "int", "1").await?;
    let a: i64 = reader.get_value("A").await;
    assert_eq!(a, 1);

    // A store failure after caching A affects only keys without snapshots
    break_store(&test_db.db).await?;
    let b: i64 = reader.get_value("B").await;
    assert_eq!(b, 0);
    let a_again: i64 = reader.get_value("A").await;
    assert_eq!(a_again, 1);

    Ok(())
}

#[tokio::test]
async fn test_inactive_entries_read_as_default() -> Result<()> {
    let test_db = create_test_database().await?;
    let reader = ConfigurationReader::new(APP, test_db.db.clone(), Duration::from_millis(50));

    let entry = seed_config(reader.service(), APP, "Feature", "bool", "true").await?;
    let enabled: bool = reader.get_value("Feature").await;
    assert!(enabled);

    let draft = ConfigDraft::new("Feature", "bool", "true").with_active(false);
    reader.service().update(entry.id, &draft, APP).await?;

    tokio::time::sleep(Duration::from_millis(100)).await;
    let disabled: bool = reader.get_value("Feature").await;
    assert!(!disabled);

    Ok(())
}
