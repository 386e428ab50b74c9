//! Serialized failure reporting for drivers that detect failures on more than
//! one thread.
//!
//! A reporter takes `&mut self` and must never see two failures at once. The
//! [`FailureChannel`] lends out a cloneable [`FailureSender`] and lets a single
//! scoped thread own the reporter, feeding it failures in the order they are
//! received.

use std::num::NonZeroUsize;

use crossbeam_channel::{Receiver, Sender};

use crate::{failure::Failure, reporter::Reporter};

const FAILURES_PER_THREAD: NonZeroUsize = NonZeroUsize::new(4).unwrap();

#[derive(Debug, Clone)]
pub struct FailureChannel {
    capacity: NonZeroUsize,
}

impl Default for FailureChannel {
    fn default() -> Self {
        let threads = std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
        Self {
            capacity: threads.saturating_mul(FAILURES_PER_THREAD),
        }
    }
}

impl FailureChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound on failures buffered before senders block.
    pub fn with_capacity(self, capacity: NonZeroUsize) -> Self {
        Self { capacity }
    }

    /// Run `body` while a dedicated thread forwards every sent failure to
    /// `reporter`.
    ///
    /// Returns once `body` has returned and every failure sent until then has
    /// reached the reporter. Clones of the sender that outlive `body` are
    /// disconnected; whatever they send afterwards is discarded. Run start and
    /// end are left to the caller.
    pub fn run<R, T>(
        &self,
        reporter: &mut R,
        body: impl FnOnce(&FailureSender) -> T,
    ) -> (T, Vec<R::Error>)
    where
        R: Reporter + Send,
        R::Error: Send,
    {
        let (tx, rx) = crossbeam_channel::bounded(self.capacity.get());
        let (close_tx, close_rx) = crossbeam_channel::bounded::<()>(0);
        std::thread::scope(move |scope| {
            let report_thread = scope.spawn(move || drain(reporter, rx, close_rx));

            let sender = FailureSender(tx);
            let value = body(&sender);
            drop(sender);
            drop(close_tx);

            let errors = match report_thread.join() {
                Ok(errors) => errors,
                Err(panic) => std::panic::resume_unwind(panic),
            };
            (value, errors)
        })
    }
}

fn drain<R: Reporter>(
    reporter: &mut R,
    rx: Receiver<Failure>,
    close_rx: Receiver<()>,
) -> Vec<R::Error> {
    let mut errors = Vec::new();
    let mut received = 0usize;
    let mut forward = |failure: Failure| {
        received += 1;
        if let Err(err) = reporter.on_failure(&failure) {
            errors.push(err);
        }
    };

    loop {
        crossbeam_channel::select! {
            recv(rx) -> failure => match failure {
                Ok(failure) => forward(failure),
                Err(_) => break,
            },
            recv(close_rx) -> _ => {
                rx.try_iter().for_each(&mut forward);
                break;
            },
        }
    }

    tracing::trace!(received, "failure channel closed");
    errors
}

/// Sending half of a [`FailureChannel`].
#[derive(Debug, Clone)]
pub struct FailureSender(Sender<Failure>);

impl FailureSender {
    pub fn send(&self, failure: Failure) {
        // disconnected once `run` is done or the reporter panicked; such
        // failures are dropped
        let _ = self.0.send(failure);
    }
}
