//! The capability trait navigated objects implement.
//!
//! Rust has no runtime class hierarchy, so a navigable type declares its
//! ancestry explicitly: `type_chain` returns the concrete type first,
//! followed by the registered base types it wants to inherit steps from.
//! The registry walks that chain most-derived first when resolving a
//! destination.

use std::any::{Any, TypeId};
use std::sync::Arc;

/// Capability trait for objects the [`crate::engine::Navigator`] can drive.
///
/// The default implementation declares no ancestors and no attributes,
/// which is correct for standalone types. Types that participate in a
/// hierarchy override [`Navigable::type_chain`]; types reachable through
/// attribute-derived prerequisites override [`Navigable::attribute`].
pub trait Navigable: Any + Send + Sync {
    /// Runtime type identities to consult when resolving a destination,
    /// most-derived first. Must include the concrete type itself.
    fn type_chain(&self) -> Vec<TypeId> {
        vec![TypeId::of::<Self>()]
    }

    /// Short type name used in diagnostics and error messages.
    fn type_name(&self) -> &'static str {
        short_type_name::<Self>()
    }

    /// Look up a named attribute yielding another navigable object,
    /// typically a containing or parent entity. Returns `None` for
    /// unknown names.
    fn attribute(&self, _name: &str) -> Option<Arc<dyn Navigable>> {
        None
    }
}

/// Last path segment of `std::any::type_name`, e.g. `ClusterView` rather
/// than `myapp::views::ClusterView`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
