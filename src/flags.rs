//! Bit-flag containment checks.
//!
//! "Is this a flag-capable type" is enforced at compile time by the [`Flags`]
//! bound instead of a runtime type guard, so the invalid-operand failure mode
//! of dynamically typed flag checks cannot occur here.

use crate::error::{CheckError, CheckResult};
use std::fmt::Debug;

pub use attest_derive::Flags;

/// Capability trait for bit-flag domains: values that lower to a raw bit
/// pattern and are tested via bitwise AND containment.
///
/// Implemented for the unsigned integer primitives, and derivable with
/// `#[derive(Flags)]` for fieldless enums with explicit discriminants
/// (C#-style flag enums, where combined values get their own variant).
pub trait Flags: Copy + PartialEq + Debug {
    fn bits(self) -> u64;

    /// `true` iff every set bit of `flag` is also set in `self`.
    fn contains(self, flag: Self) -> bool {
        self.bits() & flag.bits() == flag.bits()
    }
}

macro_rules! impl_flags_for_unsigned {
    ($($t:ty),+) => {$(
        impl Flags for $t {
            fn bits(self) -> u64 {
                self as u64
            }
        }
    )+};
}
impl_flags_for_unsigned!(u8, u16, u32, u64, usize);

/// Checks that all bits of `flag` are set in `actual`:
/// `(actual & flag) == flag`. Mere overlap is not enough.
pub fn flag<F: Flags>(actual: F, flag: F, label: &str) -> CheckResult {
    if !actual.contains(flag) {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should have flag ({flag:?}) set."
        )));
    }
    Ok(())
}

/// Checks that `flag`'s bits are not all set in `actual`.
pub fn not_flag<F: Flags>(actual: F, flag: F, label: &str) -> CheckResult {
    if actual.contains(flag) {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should not have flag ({flag:?}) set."
        )));
    }
    Ok(())
}
