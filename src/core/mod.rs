pub mod errors;
pub mod traits;
pub mod types;

pub use errors::{Error, Result};
pub use traits::TypeSystem;
pub use types::{MarkerKind, MethodDescriptor, MethodSignature, TypeId};
