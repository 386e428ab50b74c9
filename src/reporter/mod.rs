//! The callbacks a driver invokes while a run is in progress.
//!
//! A driver calls [`Reporter::on_run_started`] once, [`Reporter::on_failure`]
//! for every failure in the order they were detected and
//! [`Reporter::on_run_ended`] once at the end. Errors are returned to the
//! driver, which keeps going and records them next to the [`ReportEvent`] that
//! produced them.

use std::fmt;

use crate::failure::Failure;

mod no;
pub use no::NoReporter;

pub trait Reporter {
    type Error;

    fn on_run_started(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_failure(&mut self, failure: &Failure) -> Result<(), Self::Error>;

    fn on_run_ended(&mut self, total_tests: usize) -> Result<(), Self::Error>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    type Error = R::Error;

    fn on_run_started(&mut self) -> Result<(), Self::Error> {
        (**self).on_run_started()
    }

    fn on_failure(&mut self, failure: &Failure) -> Result<(), Self::Error> {
        (**self).on_failure(failure)
    }

    fn on_run_ended(&mut self, total_tests: usize) -> Result<(), Self::Error> {
        (**self).on_run_ended(total_tests)
    }
}

/// The callback that returned an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportEvent {
    RunStarted,
    Failure,
    RunEnded,
}

impl ReportEvent {
    pub const fn name(self) -> &'static str {
        match self {
            ReportEvent::RunStarted => "on_run_started",
            ReportEvent::Failure => "on_failure",
            ReportEvent::RunEnded => "on_run_ended",
        }
    }
}

impl fmt::Display for ReportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) trait PushOnError<E> {
    fn push_on_error(&mut self, event: ReportEvent, result: Result<(), E>);
}

impl<E> PushOnError<E> for Vec<(ReportEvent, E)> {
    fn push_on_error(&mut self, event: ReportEvent, result: Result<(), E>) {
        if let Err(err) = result {
            tracing::debug!(%event, "reporter callback failed");
            self.push((event, err));
        }
    }
}
