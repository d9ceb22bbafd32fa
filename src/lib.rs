// Export modules for library usage
pub mod core;
pub mod hierarchy;
pub mod registry;
pub mod resolution;

// Re-export commonly used types
pub use crate::core::{
    Error, MarkerKind, MethodDescriptor, MethodSignature, Result, TypeId, TypeSystem,
};

pub use crate::hierarchy::{chain, type_chain, TypeChain};

pub use crate::registry::{MethodDecl, TypeDecl, TypeRegistry};

pub use crate::resolution::{
    find_marked_methods, find_methods_with_marker, has_any_marked_method, logical_methods,
};
