//! Integration tests for the refresh service

use std::sync::Arc;
use std::time::Duration;

use marketpulse::config::EngineConfig;
use marketpulse::core::scheduler::{RefreshOutcome, RefreshService, RefreshStatus};
use marketpulse::models::{Bar, VolatilityPoint, Vote};
use marketpulse::services::DataLoader;
use marketpulse::signals::SnapshotEngine;
use tempfile::TempDir;

use crate::test_utils::{last_fixture_date, local_data_dir, local_loader, StaticProvider};

fn slow_loader(delay: Duration) -> DataLoader {
    let day = last_fixture_date();
    let provider = Arc::new(StaticProvider {
        bars: vec![Bar::new(day, 100.0)],
        vix: vec![VolatilityPoint::new(day, 18.0)],
        breadth: Vec::new(),
        delay: Some(delay),
    });
    DataLoader::new(provider.clone(), provider.clone(), provider)
}

#[tokio::test]
async fn initial_state_is_pending() {
    let dir = local_data_dir(true);
    let service = RefreshService::new(local_loader(dir.path()), SnapshotEngine::new());

    let state = service.current();
    assert_eq!(state.status, RefreshStatus::Pending);
    assert!(state.snapshot.is_none());
    assert!(state.last_updated.is_none());
    assert!(!service.is_running().await);
}

#[tokio::test]
async fn refresh_publishes_snapshot() {
    let dir = local_data_dir(true);
    let service = RefreshService::new(local_loader(dir.path()), SnapshotEngine::new());

    assert_eq!(service.refresh().await, RefreshOutcome::Updated);

    let state = service.current();
    assert_eq!(state.status, RefreshStatus::Ok);
    assert!(state.error.is_none());
    assert!(state.last_updated.is_some());

    let snapshot = state.snapshot.expect("snapshot");
    assert_eq!(snapshot.score, 100);
    assert_eq!(snapshot.label, Vote::Bull);
    assert_eq!(snapshot.as_of, last_fixture_date().format("%Y-%m-%d").to_string());
    assert_eq!(snapshot.extra("vix"), Some("15.00"));
}

#[tokio::test]
async fn failed_refresh_clears_snapshot() {
    let dir = local_data_dir(true);
    let service = RefreshService::new(local_loader(dir.path()), SnapshotEngine::new());
    assert_eq!(service.refresh().await, RefreshOutcome::Updated);

    std::fs::remove_file(dir.path().join("SPY.csv")).expect("remove SPY");
    assert_eq!(service.refresh().await, RefreshOutcome::Failed);

    let state = service.current();
    assert_eq!(state.status, RefreshStatus::Failed);
    assert!(state.snapshot.is_none());
    assert!(state.error.expect("error message").contains("SPY.csv"));
}

#[tokio::test]
async fn overlapping_refresh_is_skipped() {
    let service = RefreshService::new(slow_loader(Duration::from_millis(200)), SnapshotEngine::new());

    let (first, second) = tokio::join!(service.refresh(), service.refresh());
    assert_eq!(first, RefreshOutcome::Updated);
    assert_eq!(second, RefreshOutcome::Skipped);

    // The lock is released once the first cycle finishes
    assert_eq!(service.refresh().await, RefreshOutcome::Updated);
}

#[tokio::test]
async fn conflicts_follow_engine_config() {
    let dir = local_data_dir(true);
    let engine = SnapshotEngine::with_config(EngineConfig::default().with_conflicts());
    let service = RefreshService::new(local_loader(dir.path()), engine);

    service.refresh().await;
    let snapshot = service.current().snapshot.expect("snapshot");
    // Everything is bullish, so there is nothing to report
    assert!(snapshot.conflicts.is_empty());
}

#[tokio::test]
async fn zero_interval_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let service = RefreshService::new(local_loader(dir.path()), SnapshotEngine::new());

    assert!(service.start(Duration::ZERO).await.is_err());
    assert!(!service.is_running().await);
}

#[tokio::test]
async fn background_refresh_notifies_subscribers() {
    let dir = local_data_dir(false);
    let service = RefreshService::new(local_loader(dir.path()), SnapshotEngine::new());
    let mut updates = service.subscribe();

    service.start(Duration::from_secs(3600)).await.expect("start");
    assert!(service.is_running().await);

    // First tick fires immediately
    tokio::time::timeout(Duration::from_secs(5), updates.changed())
        .await
        .expect("refresh within timeout")
        .expect("sender alive");
    let state = updates.borrow_and_update().clone();
    assert_eq!(state.status, RefreshStatus::Ok);

    let snapshot = state.snapshot.expect("snapshot");
    assert_eq!(
        snapshot.signal("NYSI Slope").map(|s| s.vote),
        Some(Vote::NotAvailable)
    );

    service.stop().await;
    assert!(!service.is_running().await);
}
