use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::model::{GeoError, GeoPosition, GeoStatus, LocationError, PositionOptions};
use super::provider::LocationProvider;

/// How long a best-effort caller waits before proceeding without a position.
pub const DEFAULT_BEST_EFFORT_WAIT: Duration = Duration::from_millis(1500);

type PendingQuery = Shared<BoxFuture<'static, Result<GeoPosition, GeoError>>>;

enum GeoState {
    Unknown,
    Pending(PendingQuery),
    Resolved(GeoPosition),
    Denied,
}

impl GeoState {
    fn status(&self) -> GeoStatus {
        match self {
            GeoState::Unknown => GeoStatus::Unknown,
            GeoState::Pending(_) => GeoStatus::Pending,
            GeoState::Resolved(_) => GeoStatus::Resolved,
            GeoState::Denied => GeoStatus::Denied,
        }
    }
}

struct Inner {
    state: Mutex<GeoState>,
    status: watch::Sender<GeoStatus>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, GeoState> {
        // The guard never spans an await, so a poisoned lock still holds valid state
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn transition(&self, state: &mut GeoState, next: GeoState) {
        *state = next;
        self.status.send_replace(state.status());
    }

    fn settle(&self, outcome: &Result<GeoPosition, GeoError>) {
        let mut state = self.lock();
        if !matches!(*state, GeoState::Pending(_)) {
            return;
        }
        match outcome {
            Ok(position) => {
                info!(
                    latitude = position.latitude,
                    longitude = position.longitude,
                    "position resolved"
                );
                self.transition(&mut state, GeoState::Resolved(*position));
            }
            Err(err) => {
                warn!(error = %err, "position query failed");
                self.transition(&mut state, GeoState::Denied);
            }
        }
    }
}

enum Begin {
    Ready(GeoPosition),
    Waiting(PendingQuery),
}

/// One-shot, memoized acquisition of the caller's position.
///
/// `Unknown -> Pending -> Resolved` on success, `Pending -> Denied` on
/// failure, `Denied -> Pending` on the next request. `Resolved` is terminal:
/// later calls return the cached position without touching the provider.
/// Callers arriving while a query is pending share that query.
///
/// The query runs as a background task, so a best-effort caller that
/// stops waiting does not cancel it; the result is still cached.
pub struct GeoResolver {
    provider: Arc<dyn LocationProvider>,
    options: PositionOptions,
    best_effort_wait: Duration,
    inner: Arc<Inner>,
}

impl GeoResolver {
    pub fn new(provider: Arc<dyn LocationProvider>) -> Self {
        let (status, _) = watch::channel(GeoStatus::Unknown);
        Self {
            provider,
            options: PositionOptions::default(),
            best_effort_wait: DEFAULT_BEST_EFFORT_WAIT,
            inner: Arc::new(Inner {
                state: Mutex::new(GeoState::Unknown),
                status,
            }),
        }
    }

    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_best_effort_wait(mut self, wait: Duration) -> Self {
        self.best_effort_wait = wait;
        self
    }

    pub fn status(&self) -> GeoStatus {
        self.inner.lock().status()
    }

    /// Receives every status transition, for the location indicator.
    pub fn subscribe(&self) -> watch::Receiver<GeoStatus> {
        self.inner.status.subscribe()
    }

    /// Cached position, if one was resolved.
    pub fn cached(&self) -> Option<GeoPosition> {
        match *self.inner.lock() {
            GeoState::Resolved(position) => Some(position),
            _ => None,
        }
    }

    /// Resolves the caller's position, querying the provider at most once
    /// per attempt.
    pub async fn get_position(&self) -> Result<GeoPosition, GeoError> {
        match self.begin()? {
            Begin::Ready(position) => Ok(position),
            Begin::Waiting(query) => query.await,
        }
    }

    /// The single acquisition path used two ways.
    ///
    /// With `required`, waits for the query and reports its failure.
    /// Otherwise waits at most the best-effort budget and yields `None` on
    /// any failure, leaving a pending query running in the background.
    pub async fn acquire(&self, required: bool) -> Result<Option<GeoPosition>, GeoError> {
        if required {
            return self.get_position().await.map(Some);
        }

        match tokio::time::timeout(self.best_effort_wait, self.get_position()).await {
            Ok(Ok(position)) => Ok(Some(position)),
            Ok(Err(err)) => {
                debug!(error = %err, "proceeding without position");
                Ok(None)
            }
            Err(_) => {
                debug!(
                    wait_ms = self.best_effort_wait.as_millis() as u64,
                    "position still pending, proceeding without it"
                );
                Ok(None)
            }
        }
    }

    /// Starts a background query so the first turn does not pay for it.
    pub fn prefetch(&self) {
        if let Err(err) = self.begin() {
            debug!(error = %err, "position prefetch skipped");
        }
    }

    fn begin(&self) -> Result<Begin, GeoError> {
        let mut state = self.inner.lock();
        match &*state {
            GeoState::Resolved(position) => return Ok(Begin::Ready(*position)),
            GeoState::Pending(query) => return Ok(Begin::Waiting(query.clone())),
            GeoState::Unknown | GeoState::Denied => {}
        }

        if !self.provider.is_available() {
            return Err(GeoError::CapabilityUnavailable);
        }
        let query = self.start_query();
        self.inner
            .transition(&mut state, GeoState::Pending(query.clone()));
        Ok(Begin::Waiting(query))
    }

    fn start_query(&self) -> PendingQuery {
        let provider = Arc::clone(&self.provider);
        let inner = Arc::clone(&self.inner);
        let options = self.options;

        let query = async move {
            debug!(
                high_accuracy = options.high_accuracy,
                timeout_ms = options.timeout.as_millis() as u64,
                "querying location provider"
            );
            let outcome =
                match tokio::time::timeout(options.timeout, provider.current_position(options))
                    .await
                {
                    Ok(Ok(position)) => Ok(position),
                    Ok(Err(err)) => Err(GeoError::PositionUnavailable(err.to_string())),
                    Err(_) => Err(GeoError::PositionUnavailable(
                        LocationError::Timeout.to_string(),
                    )),
                };
            inner.settle(&outcome);
            outcome
        }
        .boxed()
        .shared();

        tokio::spawn(query.clone());
        query
    }
}
