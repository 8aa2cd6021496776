//! `check_*!` macros: one per check function, capturing the caller's actual
//! expression with `stringify!` so failure messages name the source text,
//! the portable stand-in for C#'s `[CallerArgumentExpression]`.
//!
//! Each macro evaluates to a [`crate::CheckResult`] for `?`-propagation.

/// Checks a boolean expression is true. See [`crate::check::is_true`].
#[macro_export]
macro_rules! check {
    ($expr:expr) => {
        $crate::check::is_true($expr, stringify!($expr))
    };
}

/// Checks a boolean expression is false. See [`crate::check::is_false`].
#[macro_export]
macro_rules! check_false {
    ($expr:expr) => {
        $crate::check::is_false($expr, stringify!($expr))
    };
}

/// Checks two values are equal. See [`crate::check::equals`].
#[macro_export]
macro_rules! check_eq {
    ($actual:expr, $expected:expr) => {
        $crate::check::equals(Some(&$actual), &$expected, stringify!($actual))
    };
}

/// Checks two values are not equal. See [`crate::check::not_equals`].
#[macro_export]
macro_rules! check_ne {
    ($actual:expr, $expected:expr) => {
        $crate::check::not_equals(Some(&$actual), &$expected, stringify!($actual))
    };
}

/// Checks an `Option` is `None`. See [`crate::check::none`].
#[macro_export]
macro_rules! check_none {
    ($value:expr) => {
        $crate::check::none($value.as_ref(), stringify!($value))
    };
}

/// Checks an `Option` is `Some`. See [`crate::check::some`].
#[macro_export]
macro_rules! check_some {
    ($value:expr) => {
        $crate::check::some($value.as_ref(), stringify!($value))
    };
}

/// Checks `actual > expected`. See [`crate::check::greater_than`].
#[macro_export]
macro_rules! check_gt {
    ($actual:expr, $expected:expr) => {
        $crate::check::greater_than(&$actual, &$expected, stringify!($actual))
    };
}

/// Checks `actual` is not greater than `expected`.
#[macro_export]
macro_rules! check_not_gt {
    ($actual:expr, $expected:expr) => {
        $crate::check::not_greater_than(&$actual, &$expected, stringify!($actual))
    };
}

/// Checks `actual >= expected`. See [`crate::check::greater_than_equals`].
#[macro_export]
macro_rules! check_ge {
    ($actual:expr, $expected:expr) => {
        $crate::check::greater_than_equals(&$actual, &$expected, stringify!($actual))
    };
}

/// Checks `actual` is not greater than or equal to `expected`.
#[macro_export]
macro_rules! check_not_ge {
    ($actual:expr, $expected:expr) => {
        $crate::check::not_greater_than_equals(&$actual, &$expected, stringify!($actual))
    };
}

/// Checks `actual < expected`. See [`crate::check::less_than`].
#[macro_export]
macro_rules! check_lt {
    ($actual:expr, $expected:expr) => {
        $crate::check::less_than(&$actual, &$expected, stringify!($actual))
    };
}

/// Checks `actual` is not less than `expected`.
#[macro_export]
macro_rules! check_not_lt {
    ($actual:expr, $expected:expr) => {
        $crate::check::not_less_than(&$actual, &$expected, stringify!($actual))
    };
}

/// Checks `actual <= expected`. See [`crate::check::less_than_equals`].
#[macro_export]
macro_rules! check_le {
    ($actual:expr, $expected:expr) => {
        $crate::check::less_than_equals(&$actual, &$expected, stringify!($actual))
    };
}

/// Checks `actual` is not less than or equal to `expected`.
#[macro_export]
macro_rules! check_not_le {
    ($actual:expr, $expected:expr) => {
        $crate::check::not_less_than_equals(&$actual, &$expected, stringify!($actual))
    };
}

/// Checks `min <= actual <= max`, inclusive. See [`crate::check::between`].
#[macro_export]
macro_rules! check_between {
    ($actual:expr, $min:expr, $max:expr) => {
        $crate::check::between(&$actual, &$min, &$max, stringify!($actual))
    };
}

/// Checks `actual` lies outside `[min, max]`. See [`crate::check::not_between`].
#[macro_export]
macro_rules! check_not_between {
    ($actual:expr, $min:expr, $max:expr) => {
        $crate::check::not_between(&$actual, &$min, &$max, stringify!($actual))
    };
}

/// Checks all bits of `flag` are set in `actual`. See [`crate::flags::flag`].
#[macro_export]
macro_rules! check_flag {
    ($actual:expr, $flag:expr) => {
        $crate::flags::flag($actual, $flag, stringify!($actual))
    };
}

/// Checks `flag` is not fully set in `actual`. See [`crate::flags::not_flag`].
#[macro_export]
macro_rules! check_not_flag {
    ($actual:expr, $flag:expr) => {
        $crate::flags::not_flag($actual, $flag, stringify!($actual))
    };
}

/// Checks the value's exact runtime type. See [`crate::reflect::is_type`].
#[macro_export]
macro_rules! check_is_type {
    ($actual:expr, $ty:ty) => {
        $crate::reflect::is_type::<$ty>(Some(&$actual), stringify!($actual))
    };
}

/// Checks the value's runtime type differs. See [`crate::reflect::not_is_type`].
#[macro_export]
macro_rules! check_not_is_type {
    ($actual:expr, $ty:ty) => {
        $crate::reflect::not_is_type::<$ty>(Some(&$actual), stringify!($actual))
    };
}

/// Checks the value can stand in for the candidate type.
/// See [`crate::reflect::assignable_from`].
#[macro_export]
macro_rules! check_assignable_from {
    ($actual:expr, $ty:ty) => {
        $crate::reflect::assignable_from::<$ty>(Some(&$actual), stringify!($actual))
    };
}

/// Checks the value cannot stand in for the candidate type.
/// See [`crate::reflect::not_assignable_from`].
#[macro_export]
macro_rules! check_not_assignable_from {
    ($actual:expr, $ty:ty) => {
        $crate::reflect::not_assignable_from::<$ty>(Some(&$actual), stringify!($actual))
    };
}

/// Checks the collection contains the element. See [`crate::collection::contains`].
#[macro_export]
macro_rules! check_contains {
    ($actual:expr, $expected:expr) => {
        $crate::collection::contains(Some(&$actual), &$expected, stringify!($actual))
    };
}

/// Checks the collection does not contain the element.
/// See [`crate::collection::not_contains`].
#[macro_export]
macro_rules! check_not_contains {
    ($actual:expr, $expected:expr) => {
        $crate::collection::not_contains(Some(&$actual), &$expected, stringify!($actual))
    };
}

/// Checks the collection is empty. See [`crate::collection::empty`].
#[macro_export]
macro_rules! check_empty {
    ($actual:expr) => {
        $crate::collection::empty(Some(&$actual), stringify!($actual))
    };
}

/// Checks the collection is not empty. See [`crate::collection::not_empty`].
#[macro_export]
macro_rules! check_not_empty {
    ($actual:expr) => {
        $crate::collection::not_empty(Some(&$actual), stringify!($actual))
    };
}

/// Checks the collection has exactly one element. See [`crate::collection::single`].
#[macro_export]
macro_rules! check_single {
    ($actual:expr) => {
        $crate::collection::single(Some(&$actual), stringify!($actual))
    };
}

/// Checks the collection does not have exactly one element.
/// See [`crate::collection::not_single`].
#[macro_export]
macro_rules! check_not_single {
    ($actual:expr) => {
        $crate::collection::not_single(Some(&$actual), stringify!($actual))
    };
}

/// Checks every element satisfies the predicate; the predicate's source text
/// is captured too. See [`crate::collection::all`].
#[macro_export]
macro_rules! check_all {
    ($actual:expr, $predicate:expr) => {
        $crate::collection::all(
            Some(&$actual),
            $predicate,
            stringify!($actual),
            stringify!($predicate),
        )
    };
}

/// Runs the action and checks it completed within the timeout.
/// See [`crate::timing::completes_in`].
#[macro_export]
macro_rules! check_completes_in {
    ($action:expr, $timeout:expr) => {
        $crate::timing::completes_in($action, $timeout, stringify!($action))
    };
}

#[cfg(test)]
mod tests {
    use crate::error::CheckError;
    use std::time::Duration;

    #[test]
    fn labels_carry_the_source_expression() {
        let x = 2;
        let err = crate::check_eq!(x + 1, 4).unwrap_err();
        assert_eq!(err.to_string(), "x + 1 (3) should be equal to (4).");

        let err = crate::check!(x > 10).unwrap_err();
        assert_eq!(err.to_string(), "(x > 10) should be true.");

        let err = crate::check_false!(x < 10).unwrap_err();
        assert_eq!(err.to_string(), "(x < 10) should be false.");
    }

    #[test]
    fn results_propagate_with_the_question_mark_operator() {
        fn guarded(x: i32) -> crate::CheckResult {
            crate::check_gt!(x, 0)?;
            crate::check_le!(x, 100)?;
            Ok(())
        }
        assert!(guarded(50).is_ok());
        assert_eq!(
            guarded(-1).unwrap_err().to_string(),
            "x (-1) should be greater than expected (0)."
        );
        assert_eq!(
            guarded(101).unwrap_err().to_string(),
            "x (101) should be less than or equal to expected (100)."
        );
    }

    #[test]
    fn option_macros() {
        let present = Some(5);
        let absent: Option<i32> = None;
        assert!(crate::check_some!(present).is_ok());
        assert!(crate::check_none!(absent).is_ok());
        assert_eq!(
            crate::check_none!(present).unwrap_err().to_string(),
            "present should be None."
        );
        assert_eq!(
            crate::check_some!(absent).unwrap_err().to_string(),
            "absent should not be None."
        );
    }

    #[test]
    fn ordering_and_range_macros() {
        let v = 7;
        assert!(crate::check_lt!(v, 10).is_ok());
        assert!(crate::check_not_lt!(v, 7).is_ok());
        assert!(crate::check_ge!(v, 7).is_ok());
        assert!(crate::check_not_ge!(v, 8).is_ok());
        assert!(crate::check_not_gt!(v, 7).is_ok());
        assert!(crate::check_not_le!(v, 6).is_ok());
        assert!(crate::check_between!(v, 0, 10).is_ok());
        assert!(crate::check_not_between!(v, 8, 10).is_ok());

        let err = crate::check_between!(v, 8, 10).unwrap_err();
        assert_eq!(err.to_string(), "v (7) should be between (8) and (10).");
    }

    #[test]
    fn flag_macros() {
        let mode = 0b101u8;
        assert!(crate::check_flag!(mode, 0b100u8).is_ok());
        assert!(crate::check_not_flag!(mode, 0b010u8).is_ok());
        assert_eq!(
            crate::check_flag!(mode, 0b010u8).unwrap_err().to_string(),
            "mode (5) should have flag (2) set."
        );
    }

    #[test]
    fn type_macros() {
        struct Marker;
        let m = Marker;
        assert!(crate::check_is_type!(m, Marker).is_ok());
        assert!(crate::check_not_is_type!(m, i32).is_ok());
        assert!(crate::check_assignable_from!(m, Marker).is_ok());
        assert!(crate::check_not_assignable_from!(m, i32).is_ok());
    }

    #[test]
    fn collection_macros() {
        let xs = vec![1, 2, 3];
        assert!(crate::check_contains!(xs, 3).is_ok());
        assert!(crate::check_not_contains!(xs, 4).is_ok());
        assert!(crate::check_not_empty!(xs).is_ok());
        assert!(crate::check_not_single!(xs).is_ok());

        let one = [9];
        assert!(crate::check_single!(one).is_ok());
        let zero: [i32; 0] = [];
        assert!(crate::check_empty!(zero).is_ok());

        // stringify!'s exact token spacing is not guaranteed, so derive the
        // expected predicate text the same way the macro does.
        let err = crate::check_all!(xs, |x| *x > 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "xs should satisfy the predicate ({}) for all elements.",
                stringify!(|x| *x > 1)
            )
        );
        assert!(crate::check_all!(xs, |x| *x > 0).is_ok());
    }

    #[test]
    fn timing_macro() {
        assert!(crate::check_completes_in!(|| (), Duration::from_secs(1)).is_ok());
        let err = crate::check_completes_in!(
            || std::thread::sleep(Duration::from_millis(20)),
            Duration::from_millis(1)
        )
        .unwrap_err();
        assert!(err.to_string().contains("should complete within 1ms"));
        assert!(matches!(err, CheckError::Failed(_)));
    }
}
