//! Timer-driven snapshot refresh.
//!
//! The engine itself is pure; this service owns the I/O around it. It loads
//! inputs, builds a snapshot and publishes the result on a `watch` channel.
//! At most one refresh is in flight at a time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex, RwLock};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::config::{EngineConfig, ServiceConfig};
use crate::models::Snapshot;
use crate::services::{DataLoader, ProviderError};
use crate::signals::SnapshotEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshStatus {
    /// No refresh has completed yet
    Pending,
    #[serde(rename = "OK")]
    Ok,
    Failed,
}

/// What subscribers see after every refresh.
///
/// A failed refresh clears `snapshot`: stale data is never presented as current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshState {
    pub snapshot: Option<Snapshot>,
    pub error: Option<String>,
    pub status: RefreshStatus,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for RefreshState {
    fn default() -> Self {
        Self {
            snapshot: None,
            error: None,
            status: RefreshStatus::Pending,
            last_updated: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshOutcome {
    Updated,
    Failed,
    /// Another refresh was already running
    Skipped,
}

struct RefreshInner {
    loader: DataLoader,
    engine: SnapshotEngine,
    in_flight: Mutex<()>,
    state: watch::Sender<RefreshState>,
}

/// Cloneable handle; clones share the same state and timer.
#[derive(Clone)]
pub struct RefreshService {
    inner: Arc<RefreshInner>,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl RefreshService {
    pub fn new(loader: DataLoader, engine: SnapshotEngine) -> Self {
        let (state, _) = watch::channel(RefreshState::default());
        Self {
            inner: Arc::new(RefreshInner {
                loader,
                engine,
                in_flight: Mutex::new(()),
                state,
            }),
            handle: Arc::new(RwLock::new(None)),
        }
    }

    pub fn from_config(
        service: &ServiceConfig,
        engine: EngineConfig,
    ) -> Result<Self, ProviderError> {
        let loader = DataLoader::from_config(service)?;
        Ok(Self::new(loader, SnapshotEngine::with_config(engine)))
    }

    /// Receiver that observes every published state
    pub fn subscribe(&self) -> watch::Receiver<RefreshState> {
        self.inner.state.subscribe()
    }

    /// Latest published state
    pub fn current(&self) -> RefreshState {
        self.inner.state.borrow().clone()
    }

    /// Run one load + compute cycle, unless one is already running.
    pub async fn refresh(&self) -> RefreshOutcome {
        let Ok(_guard) = self.inner.in_flight.try_lock() else {
            debug!("RefreshService: refresh already in flight, skipping");
            return RefreshOutcome::Skipped;
        };

        info!("RefreshService: refresh start");
        match self.inner.loader.load().await {
            Ok(inputs) => {
                let snapshot = self.inner.engine.evaluate(&inputs);
                info!(
                    as_of = %snapshot.as_of,
                    score = snapshot.score,
                    label = %snapshot.label,
                    "RefreshService: refresh ok"
                );
                self.inner.state.send_replace(RefreshState {
                    snapshot: Some(snapshot),
                    error: None,
                    status: RefreshStatus::Ok,
                    last_updated: Some(Utc::now()),
                });
                RefreshOutcome::Updated
            }
            Err(e) => {
                error!(error = %e, "RefreshService: refresh failed");
                self.inner.state.send_replace(RefreshState {
                    snapshot: None,
                    error: Some(e.to_string()),
                    status: RefreshStatus::Failed,
                    last_updated: Some(Utc::now()),
                });
                RefreshOutcome::Failed
            }
        }
    }

    /// Refresh now and then every `interval` until stopped.
    pub async fn start(
        &self,
        interval: Duration,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if interval.is_zero() {
            return Err("Refresh interval must be greater than zero".into());
        }

        let service = self.clone();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                service.refresh().await;
            }
        });

        let mut handle = self.handle.write().await;
        if let Some(previous) = handle.replace(task) {
            previous.abort();
        }

        info!(
            interval_secs = interval.as_secs_f64(),
            "RefreshService: started"
        );
        Ok(())
    }

    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("RefreshService: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}
