// src/submissions.rs
//
// Simulated form submissions. Each one runs as a task that completes after a
// fixed delay unless it is cancelled first.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Sale,
    Donation,
}

impl SubmissionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionKind::Sale => "sale",
            SubmissionKind::Donation => "donation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Completed,
    Cancelled,
}

/// Handle to a running submission.
pub struct SubmissionTask {
    id: u64,
    kind: SubmissionKind,
    cancel: Sender<()>,
    done: mpsc::Receiver<SubmissionOutcome>,
}

impl SubmissionTask {
    pub fn spawn(id: u64, kind: SubmissionKind, delay: Duration) -> Result<Self, ServerError> {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let (done_tx, done_rx) = mpsc::channel();

        std::thread::Builder::new()
            .name(format!("submission-{id}"))
            .spawn(move || {
                // A cancel message, or every canceller going away, ends the wait early.
                let outcome = match cancel_rx.recv_timeout(delay) {
                    Err(RecvTimeoutError::Timeout) => SubmissionOutcome::Completed,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => SubmissionOutcome::Cancelled,
                };
                // Receiver may already be gone if the caller stopped waiting.
                let _ = done_tx.send(outcome);
            })
            .map_err(|e| {
                tracing::error!(error = %e, "failed to spawn submission task");
                ServerError::InternalError
            })?;

        Ok(Self {
            id,
            kind,
            cancel: cancel_tx,
            done: done_rx,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> SubmissionKind {
        self.kind
    }

    pub fn cancel(&self) {
        let _ = self.cancel.send(());
    }

    fn canceller(&self) -> Sender<()> {
        self.cancel.clone()
    }

    /// Block until the task resolves.
    pub fn wait(self) -> SubmissionOutcome {
        self.done.recv().unwrap_or(SubmissionOutcome::Cancelled)
    }
}

/// Registry of in-flight submissions so they can be cancelled together, e.g.
/// when the user signs out while one is pending.
#[derive(Default)]
pub struct SubmissionTracker {
    next_id: AtomicU64,
    pending: Mutex<HashMap<u64, Sender<()>>>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self, kind: SubmissionKind, delay: Duration) -> Result<SubmissionTask, ServerError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let task = SubmissionTask::spawn(id, kind, delay)?;
        self.pending.lock().insert(id, task.canceller());
        debug!(id, kind = kind.as_str(), "submission started");
        Ok(task)
    }

    /// Start a submission and wait for it. `still_allowed` is checked once the
    /// task is registered: a false answer cancels it straight away, and
    /// anything that changes the answer later has to go through
    /// [`SubmissionTracker::cancel_all`].
    pub fn run_while(
        &self,
        kind: SubmissionKind,
        delay: Duration,
        still_allowed: impl FnOnce() -> bool,
    ) -> Result<SubmissionOutcome, ServerError> {
        let task = self.start(kind, delay)?;
        let (id, kind) = (task.id(), task.kind());
        if !still_allowed() {
            debug!(id, "submission no longer allowed");
            task.cancel();
        }
        let outcome = task.wait();
        self.pending.lock().remove(&id);
        info!(id, kind = kind.as_str(), ?outcome, "submission resolved");
        Ok(outcome)
    }

    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }

    /// Cancel every in-flight submission. Returns how many were signalled.
    pub fn cancel_all(&self) -> usize {
        let drained: Vec<(u64, Sender<()>)> = self.pending.lock().drain().collect();
        for (id, cancel) in &drained {
            let _ = cancel.send(());
            debug!(id, "submission cancelled");
        }
        drained.len()
    }
}
