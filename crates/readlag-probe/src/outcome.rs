use std::time::Duration;

use crate::errors::ProbeError;

/// Result of one task execution.
///
/// Timing is always present, including for failed reads, so a harness
/// that only cares about latency can keep ingesting durations while a
/// stricter one checks [`ReadOutcome::error`] before accepting them.
#[derive(Debug)]
pub struct ReadOutcome {
    elapsed: Duration,
    result: Result<(), ProbeError>,
}

impl ReadOutcome {
    pub(crate) fn new(elapsed: Duration, result: Result<(), ProbeError>) -> Self {
        Self { elapsed, result }
    }

    /// Wall-clock time the execution took, success or not.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&ProbeError> {
        self.result.as_ref().err()
    }

    /// Split into timing and result, for harnesses that route them apart.
    pub fn into_parts(self) -> (Duration, Result<(), ProbeError>) {
        (self.elapsed, self.result)
    }
}
