use std::{string::FromUtf8Error, sync::LazyLock};

use regex::Regex;

mod buffer;
pub use buffer::Buffer;

#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Poison,
    FromUtf8(FromUtf8Error),
}

static FAILURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Failure: "<message>" line <line> in <file>
    Regex::new(r#"^Failure: "(?P<message>.*)" line (?P<line>-?\d+) in (?P<file>.*)$"#).unwrap()
});

static SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^There were (?P<failures>\d+|no test) failures in (?P<total>\d+) test\(s\)$")
        .unwrap()
});

#[derive(Debug, PartialEq, Eq)]
pub struct ParsedFailure {
    pub message: String,
    pub line: i64,
    pub file: String,
}

pub fn parse_failure(line: &str) -> Option<ParsedFailure> {
    let caps = FAILURE_RE.captures(line)?;
    Some(ParsedFailure {
        message: caps["message"].to_string(),
        line: caps["line"].parse().ok()?,
        file: caps["file"].to_string(),
    })
}

/// Returns `(failures, total)` of a summary line.
pub fn parse_summary(line: &str) -> Option<(usize, usize)> {
    let caps = SUMMARY_RE.captures(line)?;
    let failures = match &caps["failures"] {
        "no test" => 0,
        count => count.parse().ok()?,
    };
    Some((failures, caps["total"].parse().ok()?))
}
