//! Equality, option, boolean, ordering and range checks.
//!
//! Every function takes a trailing `label` naming the caller's "actual"
//! expression; the label appears verbatim in the failure message. The
//! `check_*!` macros fill it in with `stringify!`.

use crate::error::{CheckError, CheckResult};
use std::fmt::Debug;

/// Checks an actual value equals an expected value under value equality.
///
/// A `None` actual is a contract violation, not an equality failure: the
/// message redirects the caller to [`none`].
pub fn equals<T: PartialEq + Debug>(actual: Option<&T>, expected: &T, label: &str) -> CheckResult {
    let Some(actual) = actual else {
        return Err(CheckError::misuse(format!(
            "{label} is None. If you are testing for None, use check::none()."
        )));
    };
    if actual != expected {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should be equal to ({expected:?})."
        )));
    }
    Ok(())
}

/// Checks an actual value does not equal an expected value.
pub fn not_equals<T: PartialEq + Debug>(
    actual: Option<&T>,
    expected: &T,
    label: &str,
) -> CheckResult {
    let Some(actual) = actual else {
        return Err(CheckError::misuse(format!(
            "{label} is None. If you are testing for None, use check::none()."
        )));
    };
    if actual == expected {
        return Err(CheckError::failed(format!(
            "{label} should not be equal to ({expected:?})."
        )));
    }
    Ok(())
}

/// Checks a value is absent.
pub fn none<T>(value: Option<&T>, label: &str) -> CheckResult {
    if value.is_some() {
        return Err(CheckError::failed(format!("{label} should be None.")));
    }
    Ok(())
}

/// Checks a value is present.
pub fn some<T>(value: Option<&T>, label: &str) -> CheckResult {
    if value.is_none() {
        return Err(CheckError::failed(format!("{label} should not be None.")));
    }
    Ok(())
}

/// Checks a boolean expression is true.
pub fn is_true(expr: bool, label: &str) -> CheckResult {
    if !expr {
        return Err(CheckError::failed(format!("({label}) should be true.")));
    }
    Ok(())
}

/// Checks a boolean expression is false.
pub fn is_false(expr: bool, label: &str) -> CheckResult {
    if expr {
        return Err(CheckError::failed(format!("({label}) should be false.")));
    }
    Ok(())
}

// Ordering checks compare with the operators, so any `PartialOrd` type works;
// behaviour for incomparable inputs (e.g. NaN) is the caller's problem.

/// Checks `actual > expected` (strict).
pub fn greater_than<T: PartialOrd + Debug>(actual: &T, expected: &T, label: &str) -> CheckResult {
    if !(actual > expected) {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should be greater than expected ({expected:?})."
        )));
    }
    Ok(())
}

/// Checks `actual` is not greater than `expected`.
pub fn not_greater_than<T: PartialOrd + Debug>(
    actual: &T,
    expected: &T,
    label: &str,
) -> CheckResult {
    if actual > expected {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should not be greater than expected ({expected:?})."
        )));
    }
    Ok(())
}

/// Checks `actual >= expected`.
pub fn greater_than_equals<T: PartialOrd + Debug>(
    actual: &T,
    expected: &T,
    label: &str,
) -> CheckResult {
    if !(actual >= expected) {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should be greater than or equal to expected ({expected:?})."
        )));
    }
    Ok(())
}

/// Checks `actual` is not greater than or equal to `expected`.
pub fn not_greater_than_equals<T: PartialOrd + Debug>(
    actual: &T,
    expected: &T,
    label: &str,
) -> CheckResult {
    if actual >= expected {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should not be greater than or equal to expected ({expected:?})."
        )));
    }
    Ok(())
}

/// Checks `actual < expected` (strict).
pub fn less_than<T: PartialOrd + Debug>(actual: &T, expected: &T, label: &str) -> CheckResult {
    if !(actual < expected) {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should be less than expected ({expected:?})."
        )));
    }
    Ok(())
}

/// Checks `actual` is not less than `expected`.
pub fn not_less_than<T: PartialOrd + Debug>(actual: &T, expected: &T, label: &str) -> CheckResult {
    if actual < expected {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should not be less than expected ({expected:?})."
        )));
    }
    Ok(())
}

/// Checks `actual <= expected`.
pub fn less_than_equals<T: PartialOrd + Debug>(
    actual: &T,
    expected: &T,
    label: &str,
) -> CheckResult {
    if !(actual <= expected) {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should be less than or equal to expected ({expected:?})."
        )));
    }
    Ok(())
}

/// Checks `actual` is not less than or equal to `expected`.
pub fn not_less_than_equals<T: PartialOrd + Debug>(
    actual: &T,
    expected: &T,
    label: &str,
) -> CheckResult {
    if actual <= expected {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should not be less than or equal to expected ({expected:?})."
        )));
    }
    Ok(())
}

/// Checks `min <= actual <= max`, inclusive at both ends. `min == max` is a
/// valid degenerate range matching only that value.
pub fn between<T: PartialOrd + Debug>(actual: &T, min: &T, max: &T, label: &str) -> CheckResult {
    if !(actual >= min && actual <= max) {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should be between ({min:?}) and ({max:?})."
        )));
    }
    Ok(())
}

/// Checks `actual` falls outside the inclusive range `[min, max]`.
pub fn not_between<T: PartialOrd + Debug>(
    actual: &T,
    min: &T,
    max: &T,
    label: &str,
) -> CheckResult {
    if actual >= min && actual <= max {
        return Err(CheckError::failed(format!(
            "{label} ({actual:?}) should not be between ({min:?}) and ({max:?})."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;

    #[test]
    fn equals_success() {
        assert!(equals(Some(&10), &10, "x").is_ok());
        assert!(equals(Some(&true), &true, "x").is_ok());
        assert!(equals(Some(&"ABC"), &"ABC", "x").is_ok());
    }

    #[test]
    fn equals_failure() {
        let err = equals(Some(&10), &9, "x").unwrap_err();
        assert_eq!(err.to_string(), "x (10) should be equal to (9).");
        assert!(equals(Some(&true), &false, "x").is_err());
        assert!(equals(Some(&"ABC"), &"ABCD", "x").is_err());
    }

    #[test]
    fn equals_redirects_none_to_the_option_check() {
        let err = equals(None::<&i32>, &10, "x").unwrap_err();
        assert_eq!(
            err,
            CheckError::Misuse("x is None. If you are testing for None, use check::none().".to_string())
        );
        assert!(not_equals(None::<&i32>, &10, "x").is_err());
    }

    #[test]
    fn not_equals_is_the_complement_when_present() {
        for (a, b) in [(1, 1), (1, 2), (-3, 3)] {
            assert_eq!(
                equals(Some(&a), &b, "a").is_ok(),
                not_equals(Some(&a), &b, "a").is_err()
            );
        }
        let err = not_equals(Some(&7), &7, "a").unwrap_err();
        assert_eq!(err.to_string(), "a should not be equal to (7).");
    }

    #[test]
    fn option_checks() {
        assert!(none(None::<&i32>, "x").is_ok());
        assert!(some(Some(&1), "x").is_ok());
        assert_eq!(
            none(Some(&1), "x").unwrap_err().to_string(),
            "x should be None."
        );
        assert_eq!(
            some(None::<&i32>, "x").unwrap_err().to_string(),
            "x should not be None."
        );
    }

    #[test]
    fn boolean_checks() {
        assert!(is_true(1 == 1, "1 == 1").is_ok());
        assert!(is_false(1 == 2, "1 == 2").is_ok());
        assert_eq!(
            is_true(1 == 2, "1 == 2").unwrap_err().to_string(),
            "(1 == 2) should be true."
        );
        assert_eq!(
            is_false(1 == 1, "1 == 1").unwrap_err().to_string(),
            "(1 == 1) should be false."
        );
    }

    #[test]
    fn strict_ordering() {
        assert!(greater_than(&2, &1, "x").is_ok());
        assert!(greater_than(&1, &2, "x").is_err());
        assert!(greater_than(&2, &2, "x").is_err());
        assert!(less_than(&1, &2, "x").is_ok());
        assert!(less_than(&2, &1, "x").is_err());
        assert!(less_than(&2, &2, "x").is_err());

        let err = greater_than(&1, &2, "x").unwrap_err();
        assert_eq!(err.to_string(), "x (1) should be greater than expected (2).");
    }

    #[test]
    fn exactly_one_strict_direction_holds_for_unequal_values() {
        for (a, b) in [(1, 2), (0, 100), (-5, -4)] {
            assert!(less_than(&a, &b, "a").is_ok() ^ less_than(&b, &a, "b").is_ok());
            assert!(greater_than(&b, &a, "b").is_ok());
            assert!(greater_than(&a, &b, "a").is_err());
        }
    }

    #[test]
    fn negated_ordering() {
        assert!(not_greater_than(&2, &2, "x").is_ok());
        assert!(not_greater_than(&2, &3, "x").is_ok());
        assert!(not_greater_than(&2, &1, "x").is_err());
        assert!(not_less_than(&2, &2, "x").is_ok());
        assert!(not_less_than(&2, &1, "x").is_ok());
        assert!(not_less_than(&1, &2, "x").is_err());
    }

    #[test]
    fn non_strict_ordering() {
        assert!(greater_than_equals(&2, &2, "x").is_ok());
        assert!(greater_than_equals(&3, &2, "x").is_ok());
        assert!(greater_than_equals(&1, &2, "x").is_err());
        assert!(not_greater_than_equals(&1, &2, "x").is_ok());
        assert!(not_greater_than_equals(&2, &2, "x").is_err());

        assert!(less_than_equals(&2, &2, "x").is_ok());
        assert!(less_than_equals(&1, &2, "x").is_ok());
        assert!(less_than_equals(&3, &2, "x").is_err());
        assert!(not_less_than_equals(&3, &2, "x").is_ok());
        assert!(not_less_than_equals(&2, &2, "x").is_err());
    }

    #[test]
    fn between_is_inclusive() {
        assert!(between(&2, &1, &3, "x").is_ok());
        assert!(between(&1, &1, &3, "x").is_ok());
        assert!(between(&3, &1, &3, "x").is_ok());
        assert!(between(&0, &1, &3, "x").is_err());
        assert!(between(&4, &1, &3, "x").is_err());

        let err = between(&1, &2, &3, "x").unwrap_err();
        assert_eq!(err.to_string(), "x (1) should be between (2) and (3).");
    }

    #[test]
    fn between_accepts_a_single_point_range() {
        assert!(between(&2, &2, &2, "x").is_ok());
        assert!(not_between(&2, &2, &2, "x").is_err());
    }

    #[test]
    fn not_between_is_the_complement() {
        for a in -1..=5 {
            assert_eq!(
                between(&a, &1, &3, "a").is_ok(),
                not_between(&a, &1, &3, "a").is_err()
            );
        }
        let err = not_between(&2, &1, &3, "x").unwrap_err();
        assert_eq!(err.to_string(), "x (2) should not be between (1) and (3).");
    }
}
