//! # anycell
//!
//! A type-erased single-value container with value semantics.
//!
//! `anycell` provides [`AnyValue`], a box that owns zero or one value of any
//! clonable `'static` type, together with checked and unchecked functions to
//! recover the value's concrete type. It is the single-slot sibling of a
//! typemap: instead of many values keyed by name, one value whose type is
//! erased at the API boundary and re-established on the way out.
//!
//! ## Key Features
//!
//! - **Type-safe recovery**: the checked cast functions compare the held
//!   type identity before returning anything
//! - **Value semantics**: cloning a container deep-copies the stored value;
//!   two containers never share storage
//! - **Compile-time gating**: a type that cannot be cloned is rejected when
//!   you try to store it, never as a runtime fault
//! - **Expert fast path**: `unsafe` unchecked casts for callers that have
//!   already established the held type
//! - **No macros**: a plain trait-object design over `std::any`
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use anycell::{cast, cast_ref, AnyValue, TypeToken};
//!
//! // Store any clonable value.
//! let mut slot = AnyValue::new(42i32);
//! assert_eq!(slot.type_token(), TypeToken::of::<i32>());
//!
//! // Probe without committing.
//! assert_eq!(cast_ref::<i32>(&slot), Some(&42));
//! assert_eq!(cast_ref::<String>(&slot), None);
//!
//! // Or extract a copy and handle the failure case.
//! match cast::<String>(&slot) {
//!     Ok(text) => println!("held text: {}", text),
//!     Err(e) => println!("not text: {}", e),
//! }
//!
//! // Replace and clear.
//! slot.set("now a string".to_string());
//! assert!(slot.is_type::<String>());
//! slot.clear();
//! assert!(slot.is_empty());
//! ```
//!
//! ### Independent Copies
//!
//! ```rust
//! use anycell::{cast_mut, cast_ref, AnyValue};
//!
//! let a = AnyValue::new(vec![1, 2, 3]);
//! let mut b = a.clone();
//!
//! // Mutating one copy never affects the other.
//! cast_mut::<Vec<i32>>(&mut b).unwrap().push(4);
//! assert_eq!(cast_ref::<Vec<i32>>(&a), Some(&vec![1, 2, 3]));
//! assert_eq!(cast_ref::<Vec<i32>>(&b), Some(&vec![1, 2, 3, 4]));
//! ```
//!
//! ### Ownership Transfer
//!
//! ```rust
//! use anycell::{cast_into, AnyValue};
//!
//! let mut a = AnyValue::new(String::from("payload"));
//!
//! // take() transfers the holder and leaves the source empty.
//! let b = a.take();
//! assert!(a.is_empty());
//!
//! // cast_into() moves the value out without cloning.
//! let payload: String = cast_into(b).unwrap();
//! assert_eq!(payload, "payload");
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use anycell::{cast, AnyValue};
//!
//! let slot = AnyValue::new(3.5f64);
//!
//! // The value-returning checked path reports failures as BadAnyCast,
//! // with a message naming both sides.
//! if let Err(e) = cast::<i32>(&slot) {
//!     assert!(e.message().contains("i32"));
//!     assert!(e.message().contains("f64"));
//! }
//!
//! // Casting an empty container fails the same way.
//! assert!(cast::<i32>(&AnyValue::empty()).is_err());
//! ```
//!
//! ## Thread Safety
//!
//! `AnyValue` behaves like an ordinary value type and carries no internal
//! synchronization. Share an instance across threads the way you would any
//! other value: exclusive ownership per thread, or a clone per thread.

mod any_value;
mod cast;
mod error;
mod holder;
mod token;
mod traits;

pub use any_value::AnyValue;
pub use cast::{cast, cast_into, cast_mut, cast_mut_unchecked, cast_ref, cast_ref_unchecked};
pub use error::BadAnyCast;
pub use token::TypeToken;
pub use traits::{is_same, HeldValue, If, RefBox, Select};

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};
