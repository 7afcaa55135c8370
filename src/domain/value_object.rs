//! Value objects: immutable values compared by content.

use std::any::Any;
use std::fmt::Debug;

/// Equality by structure, not by identity.
///
/// Implementors get [`ValueObject::equals`], which accepts any value (or
/// nothing) and only compares against values of the same concrete type.
pub trait ValueObject: Any + PartialEq + Debug {
    /// `false` for `None` or a different concrete type, otherwise `==`.
    fn equals(&self, other: Option<&dyn Any>) -> bool
    where
        Self: Sized,
    {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .is_some_and(|other| other == self)
    }
}
