//! Cancellable handles for long-lived `spawn_local` loops.
//!
//! A timer loop that only checks a flag after each sleep keeps running until
//! the sleep ends. Wrapping the loop in [`Abortable`] lets [`TaskHandle::cancel`]
//! drop it at its current await point instead, which also drops the pending
//! timer.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

use futures::future::{AbortHandle, Abortable};

#[derive(Clone, Debug)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    /// Wrap `task`; the returned future resolves to `Err(Aborted)` once
    /// [`TaskHandle::cancel`] is called.
    pub fn wrap<F: Future>(task: F) -> (Self, Abortable<F>) {
        let (abort, registration) = AbortHandle::new_pair();
        (Self { abort }, Abortable::new(task, registration))
    }

    /// Wake and drop the wrapped task. Idempotent.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// At most one running task; starting another cancels the previous one.
#[derive(Clone, Debug, Default)]
pub struct TaskSlot {
    current: Option<TaskHandle>,
}

impl TaskSlot {
    pub fn replace(&mut self, handle: TaskHandle) {
        if let Some(previous) = self.current.replace(handle) {
            previous.cancel();
        }
    }

    pub fn cancel(&mut self) {
        if let Some(current) = self.current.take() {
            current.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(|h| !h.is_cancelled())
    }
}

/// Spawn `task` on the local executor and return its cancel handle.
#[cfg(feature = "hydrate")]
pub fn spawn_cancellable<F: Future<Output = ()> + 'static>(task: F) -> TaskHandle {
    let (handle, task) = TaskHandle::wrap(task);
    leptos::task::spawn_local(async move {
        let _ = task.await;
    });
    handle
}
