//! Core trait definitions for clean module boundaries
//!
//! The single collaborator interface of the crate: a host type system that
//! supplies reflection-style metadata. Hosts either implement [`TypeSystem`]
//! directly over their own runtime or pre-extract metadata into
//! [`TypeRegistry`](crate::registry::TypeRegistry).

use crate::core::errors::Result;
use crate::core::types::{MethodDescriptor, TypeId};

/// Host type system supplying parents and declared methods.
///
/// Both queries are pure reads over an immutable metadata snapshot. A failed
/// lookup must surface as an error, never as a silently empty answer, so
/// callers can tell "no methods" apart from "could not enumerate methods".
pub trait TypeSystem: Send + Sync {
    /// Direct parent of `ty`, or `None` when `ty` is the hierarchy root
    fn parent_of(&self, ty: &TypeId) -> Result<Option<TypeId>>;

    /// Methods declared directly on `ty`.
    ///
    /// Overriding declarations are included; declarations inherited from
    /// ancestors are not.
    fn declared_methods(&self, ty: &TypeId) -> Result<Vec<MethodDescriptor>>;
}
