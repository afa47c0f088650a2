//! # Store Runtime
//!
//! Shared machinery behind every feature store. A store owns one screen's
//! state and changes it only by running messages through its reducer:
//!
//! ```text
//!  on_intent(intent)
//!        │
//!        ├── dispatch(msg) ───────────────────────────┐
//!        │                                            ▼
//!        ├── launch(task) ──► tokio task ──► (gen, msg) ──► drain() ──► reduce(&mut state, msg)
//!        │                                            ▲
//!        └── publish(label) ──► label queue           └── stale generations dropped
//! ```
//!
//! Only the owner of the store calls the reducer, so there is exactly one
//! writer and no locking. Background tasks never touch the state; they send
//! messages tagged with the generation they were launched under. Launching or
//! cancelling bumps the generation, so anything an older task still has in
//! flight is discarded when drained. At most one task is alive per store.

use std::collections::VecDeque;
use std::future::Future;

use log::debug;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Handle given to a launched task for sending messages back to its store.
pub struct Dispatcher<M> {
    generation: u64,
    tx: UnboundedSender<(u64, M)>,
}

impl<M> Dispatcher<M> {
    /// Queues `msg` for the store. Returns `false` once the store is gone.
    pub fn dispatch(&self, msg: M) -> bool {
        self.tx.send((self.generation, msg)).is_ok()
    }
}

pub struct StoreCore<S, M, L> {
    name: &'static str,
    state: S,
    reducer: fn(&mut S, M),
    tx: UnboundedSender<(u64, M)>,
    rx: UnboundedReceiver<(u64, M)>,
    generation: u64,
    task: Option<JoinHandle<()>>,
    labels: VecDeque<L>,
}

impl<S, M, L> StoreCore<S, M, L>
where
    M: Send + 'static,
{
    pub fn new(name: &'static str, initial_state: S, reducer: fn(&mut S, M)) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            name,
            state: initial_state,
            reducer,
            tx,
            rx,
            generation: 0,
            task: None,
            labels: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Applies `msg` right away.
    pub fn dispatch(&mut self, msg: M) {
        (self.reducer)(&mut self.state, msg);
    }

    /// Cancels the running task (if any) and spawns a new one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn launch<F, Fut>(&mut self, task: F)
    where
        F: FnOnce(Dispatcher<M>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let dispatcher = Dispatcher {
            generation: self.generation,
            tx: self.tx.clone(),
        };
        debug!(
            "{}: launching task (generation {})",
            self.name, self.generation
        );
        self.task = Some(tokio::spawn(task(dispatcher)));
    }

    /// Aborts the running task. Messages it already queued are dropped on the
    /// next drain; state it already changed stays changed.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take()
            && !task.is_finished()
        {
            debug!(
                "{}: cancelling task (generation {})",
                self.name, self.generation
            );
            task.abort();
        }
        self.generation += 1;
    }

    /// Whether a launched task is still running.
    pub fn is_busy(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Applies every queued message from the current generation.
    /// Returns `true` if the state was touched.
    pub fn drain(&mut self) -> bool {
        let mut applied = false;
        while let Ok((generation, msg)) = self.rx.try_recv() {
            if generation == self.generation {
                (self.reducer)(&mut self.state, msg);
                applied = true;
            } else {
                debug!(
                    "{}: dropping stale message (generation {} != {})",
                    self.name, generation, self.generation
                );
            }
        }
        applied
    }

    /// Waits for the running task to finish, then drains.
    pub async fn settle(&mut self) -> bool {
        if let Some(task) = self.task.take() {
            // A JoinError here means the task was aborted or panicked; either
            // way it will not send anything else.
            let _ = task.await;
        }
        self.drain()
    }

    /// Queues a one-shot label for the owner.
    pub fn publish(&mut self, label: L) {
        self.labels.push_back(label);
    }

    /// Removes and returns every pending label. Each label is seen once.
    pub fn take_labels(&mut self) -> Vec<L> {
        self.labels.drain(..).collect()
    }
}

impl<S, M, L> Drop for StoreCore<S, M, L> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
