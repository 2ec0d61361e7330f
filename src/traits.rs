//! The small trait-detection kernel behind [`AnyValue`](crate::AnyValue).
//!
//! Rust's generics already cover most of what a hand-rolled metaprogramming
//! layer would provide:
//!
//! - *decay / remove_reference*: a by-value generic parameter receives the
//!   decayed type, and the `'static` bound on stored values rejects borrowed
//!   types at compile time.
//! - *enable_if / capability gating*: `where` clauses. The [`HeldValue`]
//!   alias names the capability a stored value must have; a type that lacks
//!   it fails to compile at the construction call site, never at run time.
//!
//! What remains is the runtime same-type query ([`is_same`]), a compile-time
//! conditional type selector ([`Select`] / [`If`]), and a small non-owning
//! reference box ([`RefBox`]).

use std::any::TypeId;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

/// True if and only if `T` and `U` are the same type.
///
/// # Examples
///
/// ```
/// use anycell::is_same;
///
/// assert!(is_same::<i32, i32>());
/// assert!(!is_same::<i32, u32>());
/// assert!(!is_same::<&str, String>());
/// ```
pub fn is_same<T: ?Sized + 'static, U: ?Sized + 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<U>()
}

/// The capability required of a value stored in an
/// [`AnyValue`](crate::AnyValue): owned (`'static`) and copyable (`Clone`).
///
/// Blanket-implemented for every qualifying type; you never implement it by
/// hand. Its purpose is to reject unsupported types where they are passed
/// in, rather than deep inside the container.
pub trait HeldValue: Clone + 'static {}

impl<T: Clone + 'static> HeldValue for T {}

/// Compile-time conditional type selection, resolved through [`If`].
///
/// # Examples
///
/// ```
/// use anycell::{is_same, If, Select};
///
/// type Wide = <If<true, u64, u32> as Select>::Output;
/// type Narrow = <If<false, u64, u32> as Select>::Output;
///
/// assert!(is_same::<Wide, u64>());
/// assert!(is_same::<Narrow, u32>());
/// ```
pub trait Select {
    /// The selected type.
    type Output;
}

/// Selector carrier for [`Select`]: `If<true, T, F>` selects `T`,
/// `If<false, T, F>` selects `F`.
pub struct If<const B: bool, T, F>(PhantomData<(T, F)>);

impl<T, F> Select for If<true, T, F> {
    type Output = T;
}

impl<T, F> Select for If<false, T, F> {
    type Output = F;
}

/// A non-owning box with reference semantics and an explicit `get()`.
///
/// `RefBox` is `Copy` regardless of its target, making a borrowed value easy
/// to pass around by value. It is a supporting utility and plays no part in
/// the container's ownership model.
///
/// # Examples
///
/// ```
/// use anycell::RefBox;
///
/// let text = String::from("hello");
/// let boxed = RefBox::new(&text);
/// let again = boxed; // Copy, original still usable
///
/// assert_eq!(boxed.get(), "hello");
/// assert_eq!(again.len(), 5); // Deref passthrough
/// ```
pub struct RefBox<'a, T: ?Sized> {
    target: &'a T,
}

impl<'a, T: ?Sized> RefBox<'a, T> {
    /// Wraps a reference.
    pub fn new(target: &'a T) -> Self {
        Self { target }
    }

    /// Returns the wrapped reference with its full lifetime.
    pub fn get(&self) -> &'a T {
        self.target
    }
}

// Hand-written so the impls don't demand `T: Clone` / `T: Copy`.
impl<T: ?Sized> Clone for RefBox<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for RefBox<'_, T> {}

impl<T: ?Sized> Deref for RefBox<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.target
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for RefBox<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("RefBox").field(&self.target).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_same() {
        assert!(is_same::<String, String>());
        assert!(is_same::<(), ()>());
        assert!(!is_same::<String, &'static str>());
        assert!(!is_same::<Box<i32>, i32>());
    }

    #[test]
    fn test_is_same_unsized() {
        assert!(is_same::<str, str>());
        assert!(!is_same::<str, [u8]>());
    }

    #[test]
    fn test_select_resolution() {
        assert!(is_same::<<If<true, i32, f64> as Select>::Output, i32>());
        assert!(is_same::<<If<false, i32, f64> as Select>::Output, f64>());
    }

    #[test]
    fn test_select_nested() {
        type Inner = <If<false, u8, u16> as Select>::Output;
        type Outer = <If<true, Inner, u32> as Select>::Output;
        assert!(is_same::<Outer, u16>());
    }

    #[test]
    fn test_refbox_get_and_deref() {
        let numbers = vec![1, 2, 3];
        let boxed = RefBox::new(&numbers);
        assert_eq!(boxed.get(), &vec![1, 2, 3]);
        assert_eq!(boxed.len(), 3);
    }

    #[test]
    fn test_refbox_copy_on_noncopy_target() {
        let text = String::from("shared");
        let a = RefBox::new(&text);
        let b = a;
        assert_eq!(a.get(), b.get());
    }

    #[test]
    fn test_refbox_borrow_outlives_box() {
        let value = 7u64;
        let inner;
        {
            let boxed = RefBox::new(&value);
            inner = boxed.get();
        }
        assert_eq!(*inner, 7);
    }

    fn takes_held_value<T: HeldValue>(value: T) -> T {
        value.clone()
    }

    #[test]
    fn test_held_value_blanket() {
        assert_eq!(takes_held_value(3i8), 3);
        assert_eq!(takes_held_value("owned".to_string()), "owned");
    }
}
