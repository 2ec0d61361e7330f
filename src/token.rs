use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Sentinel type backing [`TypeToken::none`]. Private, so user code can never
/// construct a token that compares equal to the empty sentinel.
enum NoneSentinel {}

/// An opaque, comparable token identifying a concrete type.
///
/// Two tokens are equal if and only if they were produced for the same type.
/// Alongside the identity it carries the type's name, which is used purely
/// for diagnostics (error messages, `Debug` output) and never for comparison.
///
/// # Examples
///
/// ```
/// use anycell::TypeToken;
///
/// let a = TypeToken::of::<i32>();
/// let b = TypeToken::of::<i32>();
/// let c = TypeToken::of::<String>();
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert!(!a.is_none());
/// ```
#[derive(Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// Returns the token identifying `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the sentinel token reported by an empty container.
    ///
    /// The sentinel is distinct from the token of every storable type.
    ///
    /// # Examples
    ///
    /// ```
    /// use anycell::TypeToken;
    ///
    /// assert!(TypeToken::none().is_none());
    /// assert_ne!(TypeToken::none(), TypeToken::of::<()>());
    /// ```
    pub fn none() -> Self {
        Self {
            id: TypeId::of::<NoneSentinel>(),
            name: "none",
        }
    }

    /// True if this is the empty-container sentinel.
    pub fn is_none(&self) -> bool {
        self.id == TypeId::of::<NoneSentinel>()
    }

    /// The name of the identified type, as reported by
    /// [`std::any::type_name`]. Diagnostic only; not part of the identity.
    pub fn type_name(&self) -> &'static str {
        self.name
    }
}

// Identity is the TypeId alone; the name rides along for diagnostics and two
// builds may render it differently.
impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("TypeToken").field(&self.name).finish()
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_type_same_token() {
        assert_eq!(TypeToken::of::<Vec<u8>>(), TypeToken::of::<Vec<u8>>());
    }

    #[test]
    fn test_distinct_types_distinct_tokens() {
        assert_ne!(TypeToken::of::<u32>(), TypeToken::of::<i32>());
        assert_ne!(TypeToken::of::<Vec<u8>>(), TypeToken::of::<Vec<u16>>());
    }

    #[test]
    fn test_none_sentinel() {
        assert!(TypeToken::none().is_none());
        assert_eq!(TypeToken::none(), TypeToken::none());
        assert!(!TypeToken::of::<()>().is_none());
        assert_ne!(TypeToken::none(), TypeToken::of::<()>());
    }

    #[test]
    fn test_name_is_diagnostic_only() {
        let token = TypeToken::of::<String>();
        assert!(token.type_name().contains("String"));
        assert_eq!(format!("{}", TypeToken::none()), "none");
    }

    #[test]
    fn test_hash_follows_identity() {
        let mut set = HashSet::new();
        set.insert(TypeToken::of::<i32>());
        set.insert(TypeToken::of::<i32>());
        set.insert(TypeToken::of::<f64>());
        assert_eq!(set.len(), 2);
        assert!(set.contains(&TypeToken::of::<f64>()));
    }
}
