//! One-shot device location fetch at screen load.

use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

/// Platform location service.
pub trait LocationService: Send + Sync + 'static {
    fn request_permission(&self) -> impl Future<Output = PermissionStatus> + Send;

    fn current_position(&self) -> impl Future<Output = anyhow::Result<Position>> + Send;
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationState {
    Pending,
    Granted(Position),
    Denied,
    Failed(String),
}

impl LocationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LocationState::Pending)
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            LocationState::Granted(position) => Some(*position),
            _ => None,
        }
    }
}

/// Requests permission and fetches the position once. No timeout, no retry.
pub async fn fetch_location<S: LocationService>(service: &S) -> LocationState {
    if service.request_permission().await != PermissionStatus::Granted {
        return LocationState::Denied;
    }

    match service.current_position().await {
        Ok(position) => LocationState::Granted(position),
        Err(e) => LocationState::Failed(e.to_string()),
    }
}

/// Background location fetch with an observable result.
pub struct LocationTask {
    state: watch::Receiver<LocationState>,
}

impl LocationTask {
    pub fn spawn<S: LocationService>(service: Arc<S>) -> Self {
        let (tx, rx) = watch::channel(LocationState::Pending);

        tokio::spawn(async move {
            let state = fetch_location(service.as_ref()).await;
            let _ = tx.send(state);
        });

        Self { state: rx }
    }

    pub fn state(&self) -> LocationState {
        self.state.borrow().clone()
    }

    /// Waits until the fetch leaves `Pending`. Never returns if the service
    /// never answers.
    pub async fn resolved(&mut self) -> LocationState {
        let resolved = self
            .state
            .wait_for(|state| !state.is_pending())
            .await
            .map(|state| state.clone());

        resolved.unwrap_or_else(|_| self.state())
    }
}
