use std::fmt;
use std::mem;

use crate::holder::{ErasedHolder, Holder};
use crate::token::TypeToken;
use crate::traits::HeldValue;

/// A type-erased container owning zero or one value, with value semantics.
///
/// `AnyValue` is either *empty* or holds exactly one value of some concrete
/// type behind a per-type holder. Cloning a non-empty container deep-copies
/// the value, so every container owns its content exclusively; two
/// containers never share storage. Moving is Rust's native move, and
/// [`take`](AnyValue::take) gives the same transfer while leaving the source
/// observably empty.
///
/// Stored types must satisfy [`HeldValue`](crate::HeldValue) (`Clone` +
/// `'static`); anything else is rejected at compile time. Reading the value
/// back goes through the cast functions ([`cast_ref`](crate::cast_ref),
/// [`cast`](crate::cast) and friends), which check the held type identity.
///
/// `AnyValue` behaves like an ordinary value type: no internal
/// synchronization, no blocking, every operation runs to completion.
///
/// # Examples
///
/// ```
/// use anycell::{cast_ref, AnyValue, TypeToken};
///
/// let mut slot = AnyValue::empty();
/// assert!(slot.is_empty());
/// assert!(slot.type_token().is_none());
///
/// slot.set(42i32);
/// assert_eq!(slot.type_token(), TypeToken::of::<i32>());
/// assert_eq!(cast_ref::<i32>(&slot), Some(&42));
///
/// // Clones are independent copies.
/// let copy = slot.clone();
/// slot.set("replaced".to_string());
/// assert_eq!(cast_ref::<i32>(&copy), Some(&42));
/// ```
pub struct AnyValue {
    pub(crate) content: Option<Box<dyn ErasedHolder>>,
}

impl AnyValue {
    /// Creates an empty container.
    ///
    /// Equivalent to `AnyValue::default()`. An empty container reports
    /// [`TypeToken::none`] and fails every checked cast.
    pub fn empty() -> Self {
        Self { content: None }
    }

    /// Creates a container holding `value`.
    ///
    /// The value is moved in; the container allocates one holder for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use anycell::{AnyValue, TypeToken};
    ///
    /// let value = AnyValue::new(vec![1u8, 2, 3]);
    /// assert!(!value.is_empty());
    /// assert_eq!(value.type_token(), TypeToken::of::<Vec<u8>>());
    /// ```
    pub fn new<T: HeldValue>(value: T) -> Self {
        Self {
            content: Some(Box::new(Holder::new(value))),
        }
    }

    /// True if the container holds no value. O(1).
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// The identity of held type, or [`TypeToken::none`] when empty. O(1).
    pub fn type_token(&self) -> TypeToken {
        match &self.content {
            Some(holder) => holder.token(),
            None => TypeToken::none(),
        }
    }

    /// True if the container currently holds a value of type `T`.
    ///
    /// Always false on an empty container.
    pub fn is_type<T: ?Sized + 'static>(&self) -> bool {
        self.type_token() == TypeToken::of::<T>()
    }

    /// Replaces the content with `value`.
    ///
    /// Built as copy-and-swap: the replacement container is fully
    /// constructed first, then swapped in, so the previous content is
    /// released exactly once and only after the new holder exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use anycell::{cast_ref, AnyValue};
    ///
    /// let mut slot = AnyValue::new(1i32);
    /// slot.set("two".to_string());
    /// assert_eq!(cast_ref::<String>(&slot).unwrap(), "two");
    /// ```
    pub fn set<T: HeldValue>(&mut self, value: T) {
        let mut fresh = AnyValue::new(value);
        self.swap(&mut fresh);
    }

    /// Exchanges content with `other`. O(1), never allocates, never fails.
    pub fn swap(&mut self, other: &mut AnyValue) {
        mem::swap(&mut self.content, &mut other.content);
    }

    /// Empties the container, releasing any held value.
    pub fn clear(&mut self) {
        self.content = None;
    }

    /// Moves the content out, leaving this container empty.
    ///
    /// This is the observable form of move-assignment: ownership of the
    /// holder transfers in O(1) and the source reports
    /// `is_empty() == true` afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use anycell::{cast_ref, AnyValue};
    ///
    /// let mut a = AnyValue::new(42i32);
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(cast_ref::<i32>(&b), Some(&42));
    /// ```
    pub fn take(&mut self) -> AnyValue {
        mem::take(self)
    }
}

impl Clone for AnyValue {
    /// Deep-copies through the holder's clone; empty clones to empty.
    fn clone(&self) -> Self {
        Self {
            content: self.content.as_ref().map(|holder| holder.clone_holder()),
        }
    }
}

impl Default for AnyValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.content {
            Some(holder) => write!(f, "AnyValue({})", holder.token()),
            None => f.write_str("AnyValue(empty)"),
        }
    }
}
