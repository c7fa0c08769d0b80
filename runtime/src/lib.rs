//! # Regform Runtime
//!
//! Runtime implementation for the regform architecture.
//!
//! This crate provides the [`Store`]: the runtime that owns state, runs the
//! reducer, and executes the effects the reducer returns.
//!
//! ## Core Components
//!
//! - **Store**: manages state behind a lock and coordinates everything
//! - **Effect execution**: interprets [`Effect`] descriptions on tokio tasks
//! - **Feedback loop**: actions produced by effects are sent back to the store
//!
//! ## Example
//!
//! ```ignore
//! use regform_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! let handle = store.send(Action::DoSomething).await?;
//! handle.wait().await;
//!
//! let value = store.state(|s| s.some_field.clone()).await;
//! ```

use regform_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, broadcast, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),
    }
}

pub use error::StoreError;

/// Handle for tracking effect completion
///
/// Returned by [`Store::send()`] so callers can wait for the effects spawned
/// by that action to finish. `send()` itself returns as soon as effect
/// execution has started, not when it completes.
///
/// # Example
///
/// ```ignore
/// let mut handle = store.send(Action::Start).await?;
/// handle.wait_with_timeout(Duration::from_secs(5)).await?;
/// ```
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };

        let tracking = EffectTracking {
            counter,
            notifier: tx,
        };

        (handle, tracking)
    }

    /// Create a handle that is already complete.
    ///
    /// Useful for initialization in loops that track a `last_handle`.
    #[must_use]
    pub fn completed() -> Self {
        let (tx, rx) = watch::channel(());
        let _ = tx.send(());

        Self {
            effects: Arc::new(AtomicUsize::new(0)),
            completion: rx,
        }
    }

    /// Wait for all effects started by this action to complete
    pub async fn wait(&mut self) {
        while self.effects.load(Ordering::SeqCst) > 0 {
            let _ = self.completion.changed().await;
        }
    }

    /// Wait for all effects to complete, up to `timeout`
    ///
    /// # Errors
    ///
    /// Returns `Err(())` if the timeout expires before all effects complete.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), ()> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| ())
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.effects.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Internal: effect tracking context passed through effect execution
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: watch::Sender<()>,
}

impl EffectTracking {
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            let _ = self.notifier.send(());
        }
    }
}

/// Internal: RAII guard that decrements the effect counter on drop,
/// even if the effect task panics
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Guard that decrements an atomic counter on drop (for shutdown tracking)
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (behind an `RwLock`; all transitions serialize on the write lock)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (with the action feedback loop)
///
/// # Type Parameters
///
/// - `S`: state type
/// - `A`: action type
/// - `E`: environment type
/// - `R`: reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    shutdown: Arc<AtomicBool>,
    pending_effects: Arc<AtomicUsize>,
    /// Action broadcast channel for observing actions produced by effects.
    action_broadcast: broadcast::Sender<A>,
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            shutdown: Arc::clone(&self.shutdown),
            pending_effects: Arc::clone(&self.pending_effects),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    A: Clone + Send + 'static,
    S: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
    }

    /// Create a new store with a custom action broadcast capacity.
    ///
    /// The default capacity is 16; increase it if action observers
    /// frequently lag.
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (action_broadcast, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            shutdown: Arc::new(AtomicBool::new(false)),
            pending_effects: Arc::new(AtomicUsize::new(0)),
            action_broadcast,
        }
    }

    /// Send an action to the store
    ///
    /// 1. Acquires the write lock on state
    /// 2. Calls the reducer with (state, action, environment)
    /// 3. Executes returned effects asynchronously
    /// 4. Effects may produce more actions (feedback loop)
    ///
    /// Returns an [`EffectHandle`] that can be used to wait for effect
    /// completion. Multiple concurrent `send()` calls serialize at the
    /// reducer; effects complete in non-deterministic order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError> {
        if self.shutdown.load(Ordering::Acquire) {
            tracing::warn!("Rejected action: store is shutting down");
            metrics::counter!("store.shutdown.rejected_actions").increment(1);
            return Err(StoreError::ShutdownInProgress);
        }

        tracing::debug!("Processing action");
        metrics::counter!("store.actions.total").increment(1);

        let (handle, tracking) = EffectHandle::new();

        let effects = {
            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let start = std::time::Instant::now();
            let effects = self.reducer.reduce(&mut *state, action, &self.environment);
            metrics::histogram!("store.reducer.duration_seconds")
                .record(start.elapsed().as_secs_f64());

            tracing::trace!("Reducer completed, returned {} effects", effects.len());
            effects
        };

        for effect in effects {
            self.execute_effect(effect, tracking.clone());
        }

        Ok(handle)
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure so the read lock is released promptly:
    ///
    /// ```ignore
    /// let enabled = store.state(|s| s.submit_enabled).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Subscribe to all actions produced by effects of this store.
    ///
    /// Initial actions sent via [`Store::send`] are not broadcast, only the
    /// actions that effects feed back into the store.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
        self.action_broadcast.subscribe()
    }

    /// Initiate graceful shutdown of the store.
    ///
    /// Sets the shutdown flag (rejecting new actions), then waits for
    /// pending effects to complete.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires before
    /// all pending effects complete.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        tracing::info!("Initiating graceful shutdown");
        self.shutdown.store(true, Ordering::Release);

        let start = std::time::Instant::now();
        let poll_interval = Duration::from_millis(100);

        loop {
            let pending = self.pending_effects.load(Ordering::Acquire);

            if pending == 0 {
                tracing::info!("All effects completed, shutdown successful");
                return Ok(());
            }

            if start.elapsed() >= timeout {
                tracing::error!(pending_effects = pending, "Shutdown timed out");
                return Err(StoreError::ShutdownTimeout(pending));
            }

            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Execute an effect with completion tracking.
    ///
    /// Reducer panics propagate (fail fast); effect task panics are
    /// contained by [`DecrementGuard`] so the counters always settle.
    fn execute_effect(&self, effect: Effect<A>, tracking: EffectTracking) {
        match effect {
            Effect::None => {
                tracing::trace!("Executing Effect::None (no-op)");
                metrics::counter!("store.effects.executed", "type" => "none").increment(1);
            },
            Effect::Future(fut) => {
                tracing::trace!("Executing Effect::Future");
                metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                tracking.increment();

                self.pending_effects.fetch_add(1, Ordering::SeqCst);
                let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

                let store = self.clone();

                tokio::spawn(async move {
                    let _guard = DecrementGuard(tracking);
                    let _pending_guard = pending_guard;

                    if let Some(action) = fut.await {
                        tracing::trace!("Effect::Future produced an action, feeding back");

                        // Broadcast to observers before feeding back
                        let _ = store.action_broadcast.send(action.clone());
                        let _ = store.send(action).await;
                    } else {
                        tracing::trace!("Effect::Future completed with no action");
                    }
                });
            },
            Effect::Delay { duration, action } => {
                tracing::trace!("Executing Effect::Delay (duration: {:?})", duration);
                metrics::counter!("store.effects.executed", "type" => "delay").increment(1);
                tracking.increment();

                self.pending_effects.fetch_add(1, Ordering::SeqCst);
                let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

                let store = self.clone();

                tokio::spawn(async move {
                    let _guard = DecrementGuard(tracking);
                    let _pending_guard = pending_guard;

                    tokio::time::sleep(duration).await;

                    let _ = store.action_broadcast.send((*action).clone());
                    let _ = store.send(*action).await;
                });
            },
            Effect::Parallel(effects) => {
                tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                metrics::counter!("store.effects.executed", "type" => "parallel").increment(1);

                for effect in effects {
                    self.execute_effect(effect, tracking.clone());
                }
            },
            Effect::Sequential(effects) => {
                let effect_count = effects.len();
                tracing::trace!("Executing Effect::Sequential with {} effects", effect_count);
                metrics::counter!("store.effects.executed", "type" => "sequential").increment(1);
                tracking.increment();

                self.pending_effects.fetch_add(1, Ordering::SeqCst);
                let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

                let store = self.clone();

                tokio::spawn(async move {
                    let _guard = DecrementGuard(tracking);
                    let _pending_guard = pending_guard;

                    for (idx, effect) in effects.into_iter().enumerate() {
                        tracing::trace!("Sequential effect {} of {}", idx + 1, effect_count);

                        let (sub_tx, mut sub_rx) = watch::channel(());
                        let sub_tracking = EffectTracking {
                            counter: Arc::new(AtomicUsize::new(0)),
                            notifier: sub_tx,
                        };

                        store.execute_effect(effect, sub_tracking.clone());

                        // Wait for this effect before starting the next one
                        if sub_tracking.counter.load(Ordering::SeqCst) > 0 {
                            let _ = sub_rx.changed().await;
                        }
                    }
                });
            },
        }
    }
}
