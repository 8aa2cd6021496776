//! Wall-clock timing check.

use crate::error::{CheckError, CheckResult};
use std::time::{Duration, Instant};

/// Runs `action` to completion on the calling thread, then fails if the
/// measured wall-clock duration exceeded `timeout`.
///
/// This is a post-hoc measurement, not an enforced deadline: the action is
/// never interrupted or cancelled, and there is exactly one measurement.
pub fn completes_in<F: FnOnce()>(action: F, timeout: Duration, label: &str) -> CheckResult {
    let start = Instant::now();
    action();
    let elapsed = start.elapsed();
    if elapsed > timeout {
        return Err(CheckError::failed(format!(
            "{label} should complete within {timeout:?}, but completed in {elapsed:?}."
        )));
    }
    Ok(())
}
