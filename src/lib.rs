//! Failure collection and plain-text run summaries for a minimal test harness.
//!
//! A [`ResultCollector`](collector::ResultCollector) is built once per run and
//! handed to the driver by value. It prints one line per failure as it arrives
//! and a single summary line when the run ends:
//!
//! ```text
//! Failure: "x" line 1 in a.cc
//! Failure: "y" line 2 in b.cc
//! There were 2 failures in 5 test(s)
//! ```

pub mod channel;
pub mod collector;
pub mod failure;
pub mod reporter;

mod run;
pub use run::*;

mod report;
pub use report::*;

pub mod prelude {
    pub use crate::{
        RunReport, TestRun,
        channel::{FailureChannel, FailureSender},
        collector::{ResultCollector, RunSummary},
        failure::Failure,
        reporter::{NoReporter, ReportEvent, Reporter},
        test::{Test, TestFn, TestResult},
    };
    pub use std::borrow::Cow;
}
