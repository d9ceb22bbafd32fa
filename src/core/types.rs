//! Core type definitions for the method metadata model
//!
//! Everything the resolver consumes is plain data extracted from a host type
//! system: type identities, marker kinds, and per-declaration method
//! descriptors. All of it is read-only at query time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Opaque identity of a type known to the host type system.
///
/// Parent and declared-method queries for a `TypeId` go through
/// [`TypeSystem`](crate::core::traits::TypeSystem); the identity itself
/// carries only its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(String);

impl TypeId {
    /// Create a type identity from its name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the type name
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether this identity is blank (empty or whitespace-only name)
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Opaque identifier of a marker (annotation) kind attached to a method
/// declaration.
///
/// Marker kinds carry no payload; queries test set membership only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerKind(String);

impl MarkerKind {
    /// Create a marker kind from its name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the marker name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MarkerKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MarkerKind {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Key identifying a logical method across a hierarchy: name plus ordered
/// parameter types.
///
/// Owning type and markers are excluded, so two declarations with equal
/// signatures on different types in one chain are the same logical method.
/// This is override identity, not overload identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    pub param_types: Vec<TypeId>,
}

impl MethodSignature {
    /// Create a signature from a name and parameter types
    pub fn new(name: impl Into<String>, param_types: Vec<TypeId>) -> Self {
        Self {
            name: name.into(),
            param_types,
        }
    }

    /// Number of parameters
    pub fn arity(&self) -> usize {
        self.param_types.len()
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .param_types
            .iter()
            .map(|ty| ty.name())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({})", self.name, params)
    }
}

/// A method declaration scoped to one type.
///
/// `markers` holds only the kinds attached directly to this declaration;
/// markers on an overridden ancestor declaration are never merged in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Type the declaration belongs to
    pub owner: TypeId,
    /// Method name
    pub name: String,
    /// Ordered parameter-type identities
    pub param_types: Vec<TypeId>,
    /// Marker kinds attached directly to this declaration
    pub markers: BTreeSet<MarkerKind>,
}

impl MethodDescriptor {
    /// Create a descriptor with no parameters and no markers
    pub fn new(owner: impl Into<TypeId>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            param_types: Vec::new(),
            markers: BTreeSet::new(),
        }
    }

    /// Append a parameter type
    pub fn with_param(mut self, ty: impl Into<TypeId>) -> Self {
        self.param_types.push(ty.into());
        self
    }

    /// Attach a marker kind
    pub fn with_marker(mut self, kind: impl Into<MarkerKind>) -> Self {
        self.markers.insert(kind.into());
        self
    }

    /// Derive the logical-method key for this declaration
    pub fn signature(&self) -> MethodSignature {
        MethodSignature::new(self.name.clone(), self.param_types.clone())
    }

    /// Whether this declaration directly carries `kind`
    pub fn has_marker(&self, kind: &MarkerKind) -> bool {
        self.markers.contains(kind)
    }

    /// Whether this declaration directly carries any of `kinds`
    pub fn has_any_marker(&self, kinds: &[MarkerKind]) -> bool {
        kinds.iter().any(|kind| self.markers.contains(kind))
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.owner, self.signature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_signature_ignores_owner_and_markers() {
        let base = MethodDescriptor::new("Base", "render")
            .with_param("Canvas")
            .with_marker("Cached");
        let derived = MethodDescriptor::new("Derived", "render").with_param("Canvas");

        assert_eq!(base.signature(), derived.signature());
    }

    #[test]
    fn test_signature_distinguishes_parameter_types() {
        let by_name = MethodDescriptor::new("Widget", "lookup").with_param("Name");
        let by_index = MethodDescriptor::new("Widget", "lookup").with_param("Index");

        assert_ne!(by_name.signature(), by_index.signature());
        assert_eq!(by_name.signature().arity(), 1);
    }

    #[test]
    fn test_has_any_marker_matches_any_of() {
        let method = MethodDescriptor::new("Service", "commit").with_marker("Transactional");

        assert!(method.has_marker(&MarkerKind::new("Transactional")));
        assert!(method.has_any_marker(&[
            MarkerKind::new("Autowired"),
            MarkerKind::new("Transactional"),
        ]));
        assert!(!method.has_any_marker(&[MarkerKind::new("Autowired")]));
        assert!(!method.has_any_marker(&[]));
    }

    #[test]
    fn test_duplicate_markers_collapse() {
        let method = MethodDescriptor::new("Service", "commit")
            .with_marker("Transactional")
            .with_marker("Transactional");

        assert_eq!(method.markers.len(), 1);
    }

    #[test]
    fn test_display_formats_qualified_signature() {
        let method = MethodDescriptor::new("Repository", "save")
            .with_param("Entity")
            .with_param("Flags");

        assert_eq!(method.to_string(), "Repository::save(Entity, Flags)");
    }

    #[test]
    fn test_blank_type_identity() {
        assert!(TypeId::new("").is_blank());
        assert!(TypeId::new("   ").is_blank());
        assert!(!TypeId::new("Object").is_blank());
    }
}
