//! In-memory host type system
//!
//! `TypeRegistry` is the bundled [`TypeSystem`] implementation: a host
//! extracts its type metadata once (from an AST, a class file, a runtime) and
//! registers it here as plain declarations. Registration is
//! order-independent, so a type may extend a parent that is registered later;
//! the parent only has to exist by the time a query walks through it.

use crate::core::errors::{Error, Result};
use crate::core::traits::TypeSystem;
use crate::core::types::{MarkerKind, MethodDescriptor, TypeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Declaration of one method inside a [`TypeDecl`].
///
/// Carries no owning type; the registry stamps the enclosing type onto the
/// resulting [`MethodDescriptor`] at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDecl {
    name: String,
    param_types: Vec<TypeId>,
    markers: Vec<MarkerKind>,
}

impl MethodDecl {
    /// Declare a method with no parameters and no markers
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_types: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Append a parameter type
    pub fn with_param(mut self, ty: impl Into<TypeId>) -> Self {
        self.param_types.push(ty.into());
        self
    }

    /// Attach a marker kind
    pub fn with_marker(mut self, kind: impl Into<MarkerKind>) -> Self {
        self.markers.push(kind.into());
        self
    }

    fn into_descriptor(self, owner: &TypeId) -> MethodDescriptor {
        MethodDescriptor {
            owner: owner.clone(),
            name: self.name,
            param_types: self.param_types,
            markers: self.markers.into_iter().collect(),
        }
    }
}

/// Declaration of one type: an optional parent plus its directly declared
/// methods, in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    name: TypeId,
    parent: Option<TypeId>,
    methods: Vec<MethodDecl>,
}

impl TypeDecl {
    /// Declare a type with no parent and no methods
    pub fn new(name: impl Into<TypeId>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            methods: Vec::new(),
        }
    }

    /// Set the direct parent type
    pub fn extends(mut self, parent: impl Into<TypeId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Append a directly declared method
    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TypeEntry {
    parent: Option<TypeId>,
    methods: Vec<MethodDescriptor>,
}

/// Registry of type declarations backing hierarchy and method queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeRegistry {
    types: HashMap<TypeId, TypeEntry>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type declaration.
    ///
    /// Re-registering a name replaces the earlier declaration entirely.
    pub fn register(&mut self, decl: TypeDecl) {
        let TypeDecl {
            name,
            parent,
            methods,
        } = decl;
        let methods = methods
            .into_iter()
            .map(|method| method.into_descriptor(&name))
            .collect();
        self.types.insert(name, TypeEntry { parent, methods });
    }

    /// Merge another registry into this one; `other` wins on name collisions
    pub fn merge(&mut self, other: &TypeRegistry) {
        for (name, entry) in &other.types {
            self.types.insert(name.clone(), entry.clone());
        }
    }

    /// Whether `ty` has been registered
    pub fn contains(&self, ty: &TypeId) -> bool {
        self.types.contains_key(ty)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all registered type identities, in no particular order
    pub fn type_ids(&self) -> impl Iterator<Item = &TypeId> {
        self.types.keys()
    }

    fn entry(&self, ty: &TypeId) -> Result<&TypeEntry> {
        self.types
            .get(ty)
            .ok_or_else(|| Error::host_lookup(ty.clone(), "type is not registered"))
    }
}

impl TypeSystem for TypeRegistry {
    fn parent_of(&self, ty: &TypeId) -> Result<Option<TypeId>> {
        Ok(self.entry(ty)?.parent.clone())
    }

    fn declared_methods(&self, ty: &TypeId) -> Result<Vec<MethodDescriptor>> {
        Ok(self.entry(ty)?.methods.clone())
    }
}
