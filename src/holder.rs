use std::any::Any;

use crate::token::TypeToken;

/// Object-safe facade over a [`Holder<T>`]: the type tag, a deep clone, and
/// the downcast accessors the cast layer needs.
pub(crate) trait ErasedHolder: Any {
    fn token(&self) -> TypeToken;
    fn clone_holder(&self) -> Box<dyn ErasedHolder>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Concrete per-type carrier: exactly one `T`, owned by value.
///
/// The `Clone` bound sits on the `ErasedHolder` impl, so a non-clonable type
/// is rejected at the call site that tries to box one, at compile time.
pub(crate) struct Holder<T> {
    pub(crate) held: T,
}

impl<T> Holder<T> {
    pub(crate) fn new(held: T) -> Self {
        Self { held }
    }
}

impl<T: Clone + 'static> ErasedHolder for Holder<T> {
    fn token(&self) -> TypeToken {
        TypeToken::of::<T>()
    }

    fn clone_holder(&self) -> Box<dyn ErasedHolder> {
        Box::new(Holder {
            held: self.held.clone(),
        })
    }

    fn as_any(&self) -> &dyn Any {
        &self.held
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        &mut self.held
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        Box::new(self.held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holder_reports_held_type() {
        let holder = Holder::new(5u16);
        assert_eq!(holder.token(), TypeToken::of::<u16>());
        assert_ne!(holder.token(), TypeToken::of::<u32>());
    }

    #[test]
    fn test_clone_holder_is_independent() {
        let holder = Holder::new(vec![1, 2, 3]);
        let mut copy = holder.clone_holder();

        copy.as_any_mut()
            .downcast_mut::<Vec<i32>>()
            .unwrap()
            .push(4);

        assert_eq!(holder.held, vec![1, 2, 3]);
        assert_eq!(
            copy.as_any().downcast_ref::<Vec<i32>>().unwrap(),
            &vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_into_any_returns_held_value() {
        let boxed: Box<dyn ErasedHolder> = Box::new(Holder::new("inner".to_string()));
        let value = boxed.into_any().downcast::<String>().unwrap();
        assert_eq!(*value, "inner");
    }
}
