//! Hierarchy traversal from a type to its root
//!
//! Walks the host-supplied parent chain, most-derived type first, ending at
//! the hierarchy root. The walk is a pure read: it never mutates the host and
//! keeps no state beyond the call.

use crate::core::errors::{Error, Result};
use crate::core::traits::TypeSystem;
use crate::core::types::TypeId;
use std::collections::HashSet;

/// Lazy iterator over a type's inheritance chain, most-derived first.
///
/// Yields the starting type, then each successive parent, then the root.
/// Host failures while resolving a parent surface as an `Err` item, after
/// which the iterator is exhausted.
pub struct TypeChain<'a, S: ?Sized> {
    host: &'a S,
    next: Option<TypeId>,
    visited: HashSet<TypeId>,
    failed: bool,
}

impl<S: TypeSystem + ?Sized> Iterator for TypeChain<'_, S> {
    type Item = Result<TypeId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let current = self.next.take()?;

        // Hierarchies are host-supplied and assumed acyclic; a repeated type
        // means malformed host metadata, not a longer walk.
        if !self.visited.insert(current.clone()) {
            self.failed = true;
            return Some(Err(Error::host_lookup(
                current,
                "type appears twice in its own parent chain",
            )));
        }

        match self.host.parent_of(&current) {
            Ok(parent) => {
                self.next = parent;
                Some(Ok(current))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Begin a lazy walk over `ty` and its ancestors.
///
/// Fails immediately on a blank type identity; host failures surface as
/// `Err` items during iteration.
pub fn chain<'a, S>(host: &'a S, ty: &TypeId) -> Result<TypeChain<'a, S>>
where
    S: TypeSystem + ?Sized,
{
    if ty.is_blank() {
        return Err(Error::invalid_argument("type identity is blank"));
    }
    Ok(TypeChain {
        host,
        next: Some(ty.clone()),
        visited: HashSet::new(),
        failed: false,
    })
}

/// Collect the full inheritance chain of `ty`, most-derived first.
///
/// The result always starts with `ty` itself and ends with the hierarchy
/// root; a root queried directly yields a chain of length 1.
pub fn type_chain<S>(host: &S, ty: &TypeId) -> Result<Vec<TypeId>>
where
    S: TypeSystem + ?Sized,
{
    let types = chain(host, ty)?.collect::<Result<Vec<_>>>()?;
    log::trace!("hierarchy of `{}` has {} type(s)", ty, types.len());
    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{TypeDecl, TypeRegistry};

    fn lineage() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDecl::new("Object"));
        registry.register(TypeDecl::new("Shape").extends("Object"));
        registry.register(TypeDecl::new("Circle").extends("Shape"));
        registry
    }

    #[test]
    fn test_chain_runs_most_derived_to_root() {
        let registry = lineage();
        let types = type_chain(&registry, &TypeId::new("Circle")).unwrap();

        let names: Vec<&str> = types.iter().map(|ty| ty.name()).collect();
        assert_eq!(names, vec!["Circle", "Shape", "Object"]);
    }

    #[test]
    fn test_root_walk_has_length_one() {
        let registry = lineage();
        let types = type_chain(&registry, &TypeId::new("Object")).unwrap();

        assert_eq!(types, vec![TypeId::new("Object")]);
    }

    #[test]
    fn test_blank_identity_is_invalid() {
        let registry = lineage();
        let err = type_chain(&registry, &TypeId::new("  ")).unwrap_err();

        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_unregistered_type_is_a_host_failure() {
        let registry = lineage();
        let err = type_chain(&registry, &TypeId::new("Phantom")).unwrap_err();

        assert!(matches!(err, Error::HostLookup { .. }));
    }

    #[test]
    fn test_walk_reports_cycles_instead_of_looping() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDecl::new("Ouroboros").extends("Tail"));
        registry.register(TypeDecl::new("Tail").extends("Ouroboros"));

        let err = type_chain(&registry, &TypeId::new("Ouroboros")).unwrap_err();
        assert!(matches!(err, Error::HostLookup { .. }));
    }

    #[test]
    fn test_lazy_walk_yields_types_before_a_deep_failure() {
        let mut registry = TypeRegistry::new();
        registry.register(TypeDecl::new("Leaf").extends("Missing"));

        let mut walk = chain(&registry, &TypeId::new("Leaf")).unwrap();
        assert_eq!(walk.next().unwrap().unwrap(), TypeId::new("Leaf"));
        assert!(walk.next().unwrap().is_err());
        assert!(walk.next().is_none());
    }
}
