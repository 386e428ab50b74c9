use std::{fmt, io};

use crate::{failure::Failure, reporter::Reporter};

/// Counts failures of one test run and prints them as they arrive.
///
/// Each failure is written immediately as
/// `Failure: "<message>" line <line> in <file>`, and the end of the run
/// produces exactly one summary line. The collector keeps no state besides
/// the counter, so a fresh one is needed for every run.
#[derive(Debug)]
pub struct ResultCollector<W: io::Write> {
    target: W,
    failure_count: usize,
}

impl Default for ResultCollector<io::Stdout> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
            failure_count: 0,
        }
    }
}

impl ResultCollector<io::Stdout> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: io::Write> ResultCollector<W> {
    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> ResultCollector<WithTarget> {
        ResultCollector {
            target: with_target,
            failure_count: self.failure_count,
        }
    }

    pub fn failure_count(&self) -> usize {
        self.failure_count
    }

    /// Emit the summary line and consume the collector.
    pub fn finish(mut self, total_tests: usize) -> io::Result<RunSummary> {
        self.on_run_ended(total_tests)?;
        Ok(RunSummary {
            failure_count: self.failure_count,
            total_tests,
        })
    }
}

impl<W: io::Write> Reporter for ResultCollector<W> {
    type Error = io::Error;

    fn on_failure(&mut self, failure: &Failure) -> Result<(), Self::Error> {
        tracing::trace!(file = %failure.file, line = failure.line, "recording failure");
        let write_res = writeln!(self.target, "{failure}");
        self.failure_count += 1;
        write_res
    }

    fn on_run_ended(&mut self, total_tests: usize) -> Result<(), Self::Error> {
        let summary = RunSummary {
            failure_count: self.failure_count,
            total_tests,
        };
        tracing::debug!(
            failures = summary.failure_count,
            tests = summary.total_tests,
            "run ended"
        );
        writeln!(self.target, "{summary}")?;
        self.target.flush()
    }
}

/// The counts behind the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub failure_count: usize,
    pub total_tests: usize,
}

impl RunSummary {
    pub fn all_passed(&self) -> bool {
        self.failure_count == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failure_count {
            0 => write!(f, "There were no test failures in {} test(s)", self.total_tests),
            count => write!(f, "There were {count} failures in {} test(s)", self.total_tests),
        }
    }
}
