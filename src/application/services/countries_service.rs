//! Countries state holder.

use crate::domain::entities::ViewState;
use crate::domain::repositories::CountrySource;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// State shared between the service and its fetch task.
struct Shared {
    state: watch::Sender<ViewState>,
    /// Bumped every time a fetch starts; a task may only publish while its
    /// generation is still current.
    generation: AtomicU64,
}

/// Owns the countries [`ViewState`] and the single in-flight fetch.
///
/// The state is published through a [`watch`] channel: observers always see
/// the latest value, including one published before they subscribed.
///
/// # Guard
///
/// [`load`](Self::load) is ignored while a fetch is pending or a non-empty
/// list is cached. Duplicate requests are dropped, never queued.
///
/// # Cancellation
///
/// Starting a fetch aborts the previous task. Because an aborted task can
/// still be mid-poll on another worker, each task also checks its generation
/// before publishing, so a stale result never replaces newer state. Dropping
/// the service aborts the in-flight fetch.
///
/// All methods that start a fetch must be called from within a Tokio runtime.
pub struct CountriesService<S: CountrySource + 'static> {
    source: Arc<S>,
    url: String,
    shared: Arc<Shared>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl<S: CountrySource + 'static> CountriesService<S> {
    /// Creates a new service reading from `url` through `source`.
    ///
    /// The initial state is idle: not loading, no countries, no error.
    pub fn new(source: Arc<S>, url: impl Into<String>) -> Self {
        let (state, _) = watch::channel(ViewState::default());

        Self {
            source,
            url: url.into(),
            shared: Arc::new(Shared {
                state,
                generation: AtomicU64::new(0),
            }),
            in_flight: Mutex::new(None),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns a snapshot of the current state.
    pub fn current_state(&self) -> ViewState {
        self.shared.state.borrow().clone()
    }

    /// Subscribes to state changes.
    ///
    /// The receiver starts with the current value marked as seen; call
    /// `changed()` to wait for the next transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.shared.state.subscribe()
    }

    /// Loads the countries unless a load is pending or a list is cached.
    ///
    /// Publishes [`ViewState::loading`] immediately, then either
    /// [`ViewState::loaded`] or [`ViewState::failed`] once the fetch resolves.
    pub fn load(&self) {
        let mut in_flight = self.lock_in_flight();

        if self.shared.state.borrow().suppresses_load() {
            debug!("Load ignored: countries cached or already loading");
            return;
        }

        self.start_fetch(&mut in_flight);
    }

    /// Clears the error message, then calls [`load`](Self::load).
    ///
    /// The cleared state is published before the new fetch starts. Cached
    /// countries are kept, so a retry after a successful load is a no-op
    /// apart from clearing the error.
    pub fn retry(&self) {
        self.shared.state.send_modify(|state| {
            *state = state.without_error();
        });
        info!("Retrying countries load");
        self.load();
    }

    /// Discards cached data and fetches again, cancelling any pending fetch.
    pub fn refresh(&self) {
        let mut in_flight = self.lock_in_flight();
        info!("Refreshing countries");
        self.start_fetch(&mut in_flight);
    }

    fn start_fetch(&self, in_flight: &mut Option<JoinHandle<()>>) {
        if let Some(previous) = in_flight.take()
            && !previous.is_finished()
        {
            debug!("Cancelling in-flight countries fetch");
            previous.abort();
        }

        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.shared.state.send_replace(ViewState::loading());

        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.shared);
        let url = self.url.clone();

        *in_flight = Some(tokio::spawn(async move {
            let next = match source.fetch_countries(&url).await {
                Ok(countries) => ViewState::loaded(countries),
                Err(e) => {
                    warn!(error = %e, "Failed to load countries");
                    ViewState::failed(e.user_message())
                }
            };

            let published = shared.state.send_if_modified(|state| {
                if shared.generation.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *state = next;
                true
            });

            if !published {
                debug!(generation, "Discarded result of superseded fetch");
            }
        }));
    }

    fn lock_in_flight(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: CountrySource + 'static> Drop for CountriesService<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.lock_in_flight().take() {
            handle.abort();
        }
    }
}
