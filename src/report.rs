use std::{borrow::Cow, time::Duration};

use crate::reporter::ReportEvent;

#[derive(Debug)]
#[non_exhaustive]
pub struct RunReport<'t, ReportError: 't> {
    pub total: usize,
    pub failed: Vec<&'t Cow<'static, str>>,
    pub duration: Duration,
    pub report_errors: Vec<(ReportEvent, ReportError)>,
}

impl<'t, ReportError: 't> RunReport<'t, ReportError> {
    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}
