//! Collection membership, cardinality and predicate checks.
//!
//! Collections are anything iterable by shared reference (`Vec`, slices,
//! arrays, `HashSet`, ...). An absent (`None`) collection is a contract
//! violation for every check here.

use crate::error::{CheckError, CheckResult};
use itertools::Itertools;
use std::fmt::Debug;

fn present<'a, C: ?Sized>(actual: Option<&'a C>, label: &str) -> Result<&'a C, CheckError> {
    actual.ok_or_else(|| CheckError::misuse(format!("{label} should not be None.")))
}

/// Checks the collection contains an element equal to `expected`.
pub fn contains<'a, C, T>(actual: Option<&'a C>, expected: &T, label: &str) -> CheckResult
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a T>,
    T: PartialEq + Debug + 'a,
{
    let actual = present(actual, label)?;
    if !actual.into_iter().contains(expected) {
        return Err(CheckError::failed(format!(
            "{label} should contain element ({expected:?})."
        )));
    }
    Ok(())
}

/// Checks the collection contains no element equal to `expected`.
pub fn not_contains<'a, C, T>(actual: Option<&'a C>, expected: &T, label: &str) -> CheckResult
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a T>,
    T: PartialEq + Debug + 'a,
{
    let actual = present(actual, label)?;
    if actual.into_iter().contains(expected) {
        return Err(CheckError::failed(format!(
            "{label} should not contain element ({expected:?})."
        )));
    }
    Ok(())
}

/// Checks the collection has no elements.
pub fn empty<'a, C>(actual: Option<&'a C>, label: &str) -> CheckResult
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    let actual = present(actual, label)?;
    if actual.into_iter().next().is_some() {
        return Err(CheckError::failed(format!("{label} should be empty.")));
    }
    Ok(())
}

/// Checks the collection has at least one element.
pub fn not_empty<'a, C>(actual: Option<&'a C>, label: &str) -> CheckResult
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    let actual = present(actual, label)?;
    if actual.into_iter().next().is_none() {
        return Err(CheckError::failed(format!("{label} should not be empty.")));
    }
    Ok(())
}

/// Checks the collection has exactly one element.
pub fn single<'a, C>(actual: Option<&'a C>, label: &str) -> CheckResult
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    let actual = present(actual, label)?;
    if actual.into_iter().exactly_one().is_err() {
        return Err(CheckError::failed(format!(
            "{label} should have exactly one element."
        )));
    }
    Ok(())
}

/// Checks the collection has any number of elements other than one.
pub fn not_single<'a, C>(actual: Option<&'a C>, label: &str) -> CheckResult
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    let actual = present(actual, label)?;
    if actual.into_iter().exactly_one().is_ok() {
        return Err(CheckError::failed(format!(
            "{label} should not have exactly one element."
        )));
    }
    Ok(())
}

/// Checks every element satisfies `predicate`; the failure message names the
/// predicate's source text via `predicate_label`.
pub fn all<'a, C, T, P>(
    actual: Option<&'a C>,
    mut predicate: P,
    label: &str,
    predicate_label: &str,
) -> CheckResult
where
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a T>,
    T: 'a,
    P: FnMut(&T) -> bool,
{
    let actual = present(actual, label)?;
    if !actual.into_iter().all(|element| predicate(element)) {
        return Err(CheckError::failed(format!(
            "{label} should satisfy the predicate ({predicate_label}) for all elements."
        )));
    }
    Ok(())
}
