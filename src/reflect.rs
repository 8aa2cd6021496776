//! Runtime type-relationship checks over [`AnyValue`] trait objects.
//!
//! Rust has no runtime subtype relation, so "assignable from" collapses to
//! downcastability: `assignable_from::<C>` succeeds iff the value's runtime
//! type can stand in for `C`, i.e. iff a downcast to `C` would succeed. Its
//! negation is the strict logical complement. (The reference implementation
//! raised failure from both directions of the relation; see DESIGN.md.)

use crate::error::{CheckError, CheckResult};
use std::any::{type_name, Any, TypeId};

/// Object-safe view of a value that remembers its concrete type name at the
/// point of coercion. Blanket-implemented for every `'static` sized type, so
/// any `&value` coerces to `&dyn AnyValue` at a check call site.
pub trait AnyValue: Any {
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AnyValue for T {
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn present<'a>(actual: Option<&'a dyn AnyValue>, label: &str) -> Result<&'a dyn AnyValue, CheckError> {
    actual.ok_or_else(|| CheckError::misuse(format!("{label} should not be None.")))
}

/// Checks the value's exact runtime type is `E`. No subtype notion applies:
/// a wrapper type never matches the type it wraps.
pub fn is_type<E: Any>(actual: Option<&dyn AnyValue>, label: &str) -> CheckResult {
    let actual = present(actual, label)?;
    if actual.as_any().type_id() != TypeId::of::<E>() {
        return Err(CheckError::failed(format!(
            "{label} ({}) should be of type ({}).",
            actual.type_name(),
            type_name::<E>()
        )));
    }
    Ok(())
}

/// Checks the value's exact runtime type is not `E`.
pub fn not_is_type<E: Any>(actual: Option<&dyn AnyValue>, label: &str) -> CheckResult {
    let actual = present(actual, label)?;
    if actual.as_any().type_id() == TypeId::of::<E>() {
        return Err(CheckError::failed(format!(
            "{label} should not be of type ({}).",
            type_name::<E>()
        )));
    }
    Ok(())
}

/// Checks the value can stand in for candidate type `C` at runtime (its
/// downcast to `C` would succeed).
pub fn assignable_from<C: Any>(actual: Option<&dyn AnyValue>, label: &str) -> CheckResult {
    let actual = present(actual, label)?;
    if !actual.as_any().is::<C>() {
        return Err(CheckError::failed(format!(
            "{label} ({}) should be assignable from ({}).",
            actual.type_name(),
            type_name::<C>()
        )));
    }
    Ok(())
}

/// Strict complement of [`assignable_from`].
pub fn not_assignable_from<C: Any>(actual: Option<&dyn AnyValue>, label: &str) -> CheckResult {
    let actual = present(actual, label)?;
    if actual.as_any().is::<C>() {
        return Err(CheckError::failed(format!(
            "{label} should not be assignable from ({}).",
            type_name::<C>()
        )));
    }
    Ok(())
}
