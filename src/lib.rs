//! Runtime checks that succeed silently or fail with a diagnostic message
//! naming the offending expression and the values involved.
//!
//! Every check is a pure function returning [`CheckResult`]; nothing panics
//! and nothing is retried. The `check_*!` macros wrap the functions and fill
//! in the label with the stringified caller expression:
//!
//! ```
//! use attest::prelude::*;
//!
//! fn clamp_percent(value: i64) -> CheckResult {
//!     attest::check_between!(value, 0, 100)
//! }
//!
//! assert!(clamp_percent(50).is_ok());
//! let err = clamp_percent(200).unwrap_err();
//! assert_eq!(err.to_string(), "value (200) should be between (0) and (100).");
//! ```

// Lets the derive macro's generated `attest::Flags` path resolve in our own
// unit tests.
#[cfg(test)]
extern crate self as attest;

pub mod check;
pub mod collection;
pub mod error;
pub mod flags;
mod macros;
pub mod prelude;
pub mod reflect;
pub mod timing;

pub use error::{CheckError, CheckResult};
pub use flags::Flags;
