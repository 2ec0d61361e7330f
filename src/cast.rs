//! Checked and unchecked recovery of the value stored in an
//! [`AnyValue`](crate::AnyValue).
//!
//! The checked functions compare the held type identity before handing
//! anything back: the reference forms report mismatch or emptiness as
//! `None`, the value forms as [`BadAnyCast`]. The unchecked functions skip
//! the comparison entirely and reinterpret the holder's storage; they exist
//! as a trusted-caller fast path for code that has already established the
//! type, and must never be reachable from untrusted input.

use crate::error::BadAnyCast;
use crate::holder::{ErasedHolder, Holder};
use crate::token::TypeToken;
use crate::AnyValue;

/// Returns a reference to the held value if it is a `T`.
///
/// Returns `None` when the container is empty or holds a different type,
/// letting callers probe without any control-flow cost.
///
/// # Examples
///
/// ```
/// use anycell::{cast_ref, AnyValue};
///
/// let value = AnyValue::new(42i32);
/// assert_eq!(cast_ref::<i32>(&value), Some(&42));
/// assert_eq!(cast_ref::<String>(&value), None);
/// assert_eq!(cast_ref::<i32>(&AnyValue::empty()), None);
/// ```
pub fn cast_ref<T: 'static>(value: &AnyValue) -> Option<&T> {
    value.content.as_deref()?.as_any().downcast_ref::<T>()
}

/// Returns a mutable reference to the held value if it is a `T`.
///
/// # Examples
///
/// ```
/// use anycell::{cast_mut, cast_ref, AnyValue};
///
/// let mut value = AnyValue::new(vec![1, 2]);
/// cast_mut::<Vec<i32>>(&mut value).unwrap().push(3);
/// assert_eq!(cast_ref::<Vec<i32>>(&value), Some(&vec![1, 2, 3]));
/// ```
pub fn cast_mut<T: 'static>(value: &mut AnyValue) -> Option<&mut T> {
    value.content.as_deref_mut()?.as_any_mut().downcast_mut::<T>()
}

/// Returns a clone of the held value if it is a `T`.
///
/// # Errors
///
/// Returns [`BadAnyCast`] when the container is empty or holds a different
/// type; the message names the requested type and what was actually held.
///
/// # Examples
///
/// ```
/// use anycell::{cast, AnyValue};
///
/// let value = AnyValue::new(42i32);
/// assert_eq!(cast::<i32>(&value).unwrap(), 42);
/// assert!(cast::<f64>(&value).is_err());
/// ```
pub fn cast<T: Clone + 'static>(value: &AnyValue) -> Result<T, BadAnyCast> {
    match cast_ref::<T>(value) {
        Some(held) => Ok(held.clone()),
        None if value.is_empty() => Err(BadAnyCast::empty(TypeToken::of::<T>())),
        None => Err(BadAnyCast::mismatch(
            TypeToken::of::<T>(),
            value.type_token(),
        )),
    }
}

/// Consumes the container and returns the held value if it is a `T`.
///
/// Unlike [`cast`] this moves the value out without cloning, so it also
/// works as the final step of an ownership transfer.
///
/// # Errors
///
/// Returns [`BadAnyCast`] when the container is empty or holds a different
/// type. The container is consumed either way.
///
/// # Examples
///
/// ```
/// use anycell::{cast_into, AnyValue};
///
/// let value = AnyValue::new(String::from("owned"));
/// let text: String = cast_into(value).unwrap();
/// assert_eq!(text, "owned");
/// ```
pub fn cast_into<T: 'static>(value: AnyValue) -> Result<T, BadAnyCast> {
    let requested = TypeToken::of::<T>();
    let held = value.type_token();
    match value.content {
        None => Err(BadAnyCast::empty(requested)),
        Some(holder) => holder
            .into_any()
            .downcast::<T>()
            .map(|held| *held)
            .map_err(|_| BadAnyCast::mismatch(requested, held)),
    }
}

/// Returns a reference to the held value with no identity check.
///
/// This is the expert-only fast path: it skips the type comparison and
/// reinterprets the holder's storage directly.
///
/// # Safety
///
/// The container must be non-empty and must hold exactly a `T` (that is,
/// `value.is_type::<T>()` must be true). Violating either assumption is
/// undefined behavior. Never expose this path across a trust boundary; when
/// in doubt use [`cast_ref`].
///
/// # Examples
///
/// ```
/// use anycell::{cast_ref_unchecked, AnyValue};
///
/// let value = AnyValue::new(42i32);
/// // Type just established above, so the assumption holds.
/// let held = unsafe { cast_ref_unchecked::<i32>(&value) };
/// assert_eq!(*held, 42);
/// ```
pub unsafe fn cast_ref_unchecked<T: 'static>(value: &AnyValue) -> &T {
    debug_assert!(
        value.is_type::<T>(),
        "cast_ref_unchecked: container does not hold a {}",
        std::any::type_name::<T>()
    );
    let holder: &dyn ErasedHolder = match &value.content {
        Some(holder) => &**holder,
        None => std::hint::unreachable_unchecked(),
    };
    let raw = holder as *const dyn ErasedHolder as *const Holder<T>;
    &(*raw).held
}

/// Returns a mutable reference to the held value with no identity check.
///
/// # Safety
///
/// Same contract as [`cast_ref_unchecked`]: the container must be non-empty
/// and hold exactly a `T`.
pub unsafe fn cast_mut_unchecked<T: 'static>(value: &mut AnyValue) -> &mut T {
    debug_assert!(
        value.is_type::<T>(),
        "cast_mut_unchecked: container does not hold a {}",
        std::any::type_name::<T>()
    );
    let holder: &mut dyn ErasedHolder = match &mut value.content {
        Some(holder) => &mut **holder,
        None => std::hint::unreachable_unchecked(),
    };
    let raw = holder as *mut dyn ErasedHolder as *mut Holder<T>;
    &mut (*raw).held
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_ref_hit_and_miss() {
        let value = AnyValue::new(42i32);
        assert_eq!(cast_ref::<i32>(&value), Some(&42));
        assert_eq!(cast_ref::<u32>(&value), None);
        assert_eq!(cast_ref::<i32>(&AnyValue::empty()), None);
    }

    #[test]
    fn test_cast_mut_updates_in_place() {
        let mut value = AnyValue::new(String::from("a"));
        cast_mut::<String>(&mut value).unwrap().push('b');
        assert_eq!(cast_ref::<String>(&value).unwrap(), "ab");
        assert!(cast_mut::<i32>(&mut value).is_none());
    }

    #[test]
    fn test_cast_value_clones() {
        let value = AnyValue::new(vec![1, 2, 3]);
        let mut extracted = cast::<Vec<i32>>(&value).unwrap();
        extracted.push(4);
        // The container still holds the original.
        assert_eq!(cast_ref::<Vec<i32>>(&value), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_cast_mismatch_error_message() {
        let value = AnyValue::new(42i32);
        let err = cast::<String>(&value).unwrap_err();
        assert!(err.message().contains("String"));
        assert!(err.message().contains("i32"));
    }

    #[test]
    fn test_cast_empty_error_message() {
        let err = cast::<i32>(&AnyValue::empty()).unwrap_err();
        assert!(err.message().contains("empty"));
    }

    #[test]
    fn test_cast_into_moves_value_out() {
        let value = AnyValue::new(String::from("owned"));
        let text: String = cast_into(value).unwrap();
        assert_eq!(text, "owned");
    }

    #[test]
    fn test_cast_into_mismatch_and_empty() {
        assert!(cast_into::<i32>(AnyValue::new(1.0f64)).is_err());
        assert!(cast_into::<i32>(AnyValue::empty()).is_err());
    }

    #[test]
    fn test_unchecked_ref() {
        let value = AnyValue::new(42i32);
        assert!(value.is_type::<i32>());
        let held = unsafe { cast_ref_unchecked::<i32>(&value) };
        assert_eq!(*held, 42);
    }

    #[test]
    fn test_unchecked_mut() {
        let mut value = AnyValue::new(vec![1u8]);
        assert!(value.is_type::<Vec<u8>>());
        unsafe { cast_mut_unchecked::<Vec<u8>>(&mut value) }.push(2);
        assert_eq!(cast_ref::<Vec<u8>>(&value), Some(&vec![1u8, 2]));
    }
}
