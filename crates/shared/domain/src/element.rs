//! Native element capability.
//! A minimal type-erased surface over concrete visual elements, plus the type tags used to
//! check an erased instance against the concrete type captured at registration.

use std::any::{Any, TypeId};
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

/// Capability shared by every native element that can cross the dispatch boundary.
///
/// Implement it with `#[derive(vbridge_derive::Element)]`; the implementation is opt-in so that
/// smart pointers such as `Arc<dyn Element>` never masquerade as elements themselves.
pub trait Element: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;

    /// Mutable counterpart of [`Element::as_any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Converts a shared handle into an `Any` handle for `Arc::downcast`.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;

    /// The tag of the concrete type behind this instance.
    fn type_tag(&self) -> TypeTag;
}

/// Shared handle to an erased element (children are passed around as handles).
pub type ElementRef = Arc<dyn Element>;

/// Lightweight type descriptor: the type identifier plus a readable name for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Captures the tag of `T`.
    #[must_use]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self { id: TypeId::of::<T>(), name: std::any::type_name::<T>() }
    }

    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if the runtime type of `element` is exactly the tagged type.
    #[must_use]
    pub fn matches(&self, element: &dyn Element) -> bool {
        element.type_tag() == *self
    }
}

// Names are diagnostic only; identity is the `TypeId`.
impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl std::hash::Hash for TypeTag {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_compare_by_type_identity() {
        assert_eq!(TypeTag::of::<String>(), TypeTag::of::<String>());
        assert_ne!(TypeTag::of::<String>(), TypeTag::of::<u32>());
        assert!(TypeTag::of::<Vec<u8>>().name().contains("Vec"));
    }

    #[test]
    fn display_uses_type_name() {
        assert_eq!(TypeTag::of::<u8>().to_string(), "u8");
    }
}
