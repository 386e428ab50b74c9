use crate::{failure::Failure, reporter::Reporter};

/// A reporter that produces no output.
///
/// Useful when a run should only yield its [`RunReport`](crate::RunReport),
/// for example when the embedding program does its own printing.
#[derive(Debug, Default, Clone)]
pub struct NoReporter;

impl Reporter for NoReporter {
    type Error = ();

    fn on_failure(&mut self, _: &Failure) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_run_ended(&mut self, _: usize) -> Result<(), Self::Error> {
        Ok(())
    }
}
