use std::{borrow::Cow, fmt, panic::Location};

/// A single recorded assertion failure.
///
/// Nothing is validated: an empty message or a negative line is printed as
/// given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Failure {
    pub message: Cow<'static, str>,
    pub line: i64,
    pub file: Cow<'static, str>,
}

impl Failure {
    pub fn new(
        message: impl Into<Cow<'static, str>>,
        line: i64,
        file: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            message: message.into(),
            line,
            file: file.into(),
        }
    }

    /// Create a failure located at the caller's source position.
    #[track_caller]
    pub fn here(message: impl Into<Cow<'static, str>>) -> Self {
        let location = Location::caller();
        Self::new(message, i64::from(location.line()), location.file())
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failure: \"{}\" line {} in {}",
            self.message, self.line, self.file
        )
    }
}
