use std::{io, time::Instant};

use crate::{
    RunReport,
    collector::ResultCollector,
    reporter::{PushOnError, ReportEvent, Reporter},
    test::Test,
};

/// Drives one run over a fixed set of tests.
///
/// Tests run in order on the calling thread. The reporter is owned by the run
/// and dropped once [`TestRun::run`] returns, so every run gets its own.
#[derive(Debug)]
pub struct TestRun<'t, R> {
    tests: &'t [Test],
    reporter: R,
}

impl<'t> TestRun<'t, ResultCollector<io::Stdout>> {
    pub fn new(tests: &'t [Test]) -> Self {
        Self {
            tests,
            reporter: ResultCollector::default(),
        }
    }
}

impl<'t, R> TestRun<'t, R> {
    pub fn with_reporter<WithReporter: Reporter>(
        self,
        reporter: WithReporter,
    ) -> TestRun<'t, WithReporter> {
        TestRun {
            tests: self.tests,
            reporter,
        }
    }
}

impl<'t, R: Reporter> TestRun<'t, R> {
    pub fn run(self) -> RunReport<'t, R::Error> {
        let now = Instant::now();
        let mut reporter = self.reporter;
        let mut report_errors = Vec::new();
        let mut failed = Vec::new();

        tracing::debug!(tests = self.tests.len(), "run started");
        report_errors.push_on_error(ReportEvent::RunStarted, reporter.on_run_started());

        for test in self.tests {
            tracing::trace!(name = %test.name, "running test");
            if let Err(failure) = test.call().0 {
                report_errors.push_on_error(ReportEvent::Failure, reporter.on_failure(&failure));
                failed.push(&test.name);
            }
        }

        report_errors.push_on_error(
            ReportEvent::RunEnded,
            reporter.on_run_ended(self.tests.len()),
        );

        RunReport {
            total: self.tests.len(),
            failed,
            duration: now.elapsed(),
            report_errors,
        }
    }
}
