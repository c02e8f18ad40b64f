//! A live search session for one client.
//!
//! The session owns a [`Debouncer`] fed by the client's keystrokes and a
//! driver task that resolves every debounced query. Results land in a
//! [`ViewState`] published over a [`watch`] channel.
//!
//! Fetches for successive queries may overlap and are never cancelled when
//! superseded. Each one carries a generation from a [`GenerationCounter`];
//! only the latest generation's response is applied, older ones are dropped.
//! The trending slice follows the same rule with its own counter.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use marquee_core::view::{SliceState, ViewState};

use crate::debounce::Debouncer;
use crate::generation::GenerationCounter;
use crate::resolver::MovieQueryPipeline;

struct Shared {
    pipeline: MovieQueryPipeline,
    state: watch::Sender<ViewState>,
    movies_generation: GenerationCounter,
    trending_generation: GenerationCounter,
    cancel: CancellationToken,
}

impl Shared {
    /// Mark the movie slice loading for `query` and resolve it in the
    /// background.
    fn begin_resolve(self: &Arc<Self>, query: String) {
        let mut generation = 0;
        self.state.send_modify(|view| {
            generation = self.movies_generation.next();
            view.query.clone_from(&query);
            view.movies = SliceState::Loading;
        });
        tracing::debug!(query = %query, generation, "Resolving debounced query");

        let shared = Arc::clone(self);
        tokio::spawn(async move {
            tokio::select! {
                _ = shared.cancel.cancelled() => {}
                resolution = shared.pipeline.resolve_movies(&query) => {
                    let slice = resolution.into_slice();
                    shared.state.send_if_modified(|view| {
                        if !shared.movies_generation.is_current(generation) {
                            tracing::debug!(
                                query = %query,
                                generation,
                                latest = shared.movies_generation.current(),
                                "Discarding stale movie response",
                            );
                            return false;
                        }
                        view.movies = slice;
                        true
                    });
                }
            }
        });
    }

    fn begin_trending(self: &Arc<Self>) {
        let mut generation = 0;
        self.state.send_modify(|view| {
            generation = self.trending_generation.next();
            view.trending = SliceState::Loading;
        });

        let shared = Arc::clone(self);
        tokio::spawn(async move {
            tokio::select! {
                _ = shared.cancel.cancelled() => {}
                slice = shared.pipeline.gateway().trending_slice() => {
                    shared.state.send_if_modified(|view| {
                        if !shared.trending_generation.is_current(generation) {
                            return false;
                        }
                        view.trending = slice;
                        true
                    });
                }
            }
        });
    }
}

pub struct SearchSession {
    shared: Arc<Shared>,
    debouncer: Debouncer,
    state: watch::Receiver<ViewState>,
    driver: JoinHandle<()>,
}

impl SearchSession {
    /// Start a session: load trending, resolve the empty query (popular
    /// movies), then follow debounced input.
    pub fn start(pipeline: MovieQueryPipeline, debounce: Duration) -> Self {
        let cancel = CancellationToken::new();
        let (state_tx, state_rx) = watch::channel(ViewState::default());

        let shared = Arc::new(Shared {
            pipeline,
            state: state_tx,
            movies_generation: GenerationCounter::new(),
            trending_generation: GenerationCounter::new(),
            cancel: cancel.clone(),
        });

        let debouncer = Debouncer::spawn_with_token("", debounce, cancel.child_token());
        let queries = debouncer.subscribe();

        shared.begin_trending();
        shared.begin_resolve(String::new());

        let driver = tokio::spawn(drive(Arc::clone(&shared), queries));

        Self {
            shared,
            debouncer,
            state: state_rx,
            driver,
        }
    }

    /// Feed the client's live search box value.
    pub fn input(&self, value: impl Into<String>) {
        self.debouncer.input(value);
    }

    /// Receiver notified on every view change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.clone()
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Reload the trending slice.
    pub fn refresh_trending(&self) {
        self.shared.begin_trending();
    }

    /// Stop the driver, the debouncer and any in-flight fetch.
    ///
    /// Metric records already spawned run to completion.
    pub async fn shutdown(mut self) {
        self.shared.cancel.cancel();
        let _ = (&mut self.driver).await;
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.shared.cancel.cancel();
    }
}

async fn drive(shared: Arc<Shared>, mut queries: watch::Receiver<String>) {
    loop {
        tokio::select! {
            biased;

            _ = shared.cancel.cancelled() => break,

            changed = queries.changed() => {
                if changed.is_err() {
                    break;
                }
                let query = queries.borrow_and_update().clone();
                shared.begin_resolve(query);
            }
        }
    }
    tracing::debug!("Search session stopped");
}
