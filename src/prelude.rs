//! Single glob import for the whole check surface.

#[allow(unused_imports)]
pub use crate::{
    check::{
        between, equals, greater_than, greater_than_equals, is_false, is_true, less_than,
        less_than_equals, none, not_between, not_equals, not_greater_than,
        not_greater_than_equals, not_less_than, not_less_than_equals, some,
    },
    collection::{all, contains, empty, not_contains, not_empty, not_single, single},
    error::{CheckError, CheckResult},
    flags::{flag, not_flag, Flags},
    reflect::{assignable_from, is_type, not_assignable_from, not_is_type, AnyValue},
    timing::completes_in,
};
