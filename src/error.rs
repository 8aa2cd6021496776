use thiserror::Error;
use tracing::debug;

/// Result of a single check invocation.
pub type CheckResult = Result<(), CheckError>;

/// The failure signal raised by every check. The formatted message is the
/// entire contract surface: there are no error codes and no structured fields
/// beyond it.
///
/// `Misuse` marks a caller-contract violation (e.g. passing `None` to a check
/// whose contract assumes a present value) rather than a condition that was
/// evaluated and found false. Both variants display as their bare message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("{0}")]
    Failed(String),
    #[error("{0}")]
    Misuse(String),
}

impl CheckError {
    pub(crate) fn failed(message: String) -> Self {
        debug!("check failed: {message}");
        CheckError::Failed(message)
    }

    pub(crate) fn misuse(message: String) -> Self {
        debug!("check misused: {message}");
        CheckError::Misuse(message)
    }

    /// The diagnostic message carried by this failure.
    pub fn message(&self) -> &str {
        match self {
            CheckError::Failed(message) | CheckError::Misuse(message) => message,
        }
    }
}
