//! Override-aware marker resolution
//!
//! Pure resolution of marker-bearing methods across a type's inheritance
//! chain. Each query walks the chain once, deduplicates declarations into
//! logical methods (name plus parameter signature), and consults only the
//! most-derived declaration's own markers. No I/O or side effects; the
//! signature map lives and dies within one call.

use crate::core::errors::Result;
use crate::core::traits::TypeSystem;
use crate::core::types::{MarkerKind, MethodDescriptor, MethodSignature, TypeId};
use crate::hierarchy::type_chain;
use im::{HashMap, HashSet};

/// Deduplicate every method declared in `ty`'s hierarchy into one descriptor
/// per logical method.
///
/// The chain is scanned most-derived first and the first declaration of each
/// signature wins, so the returned descriptor is always the most specific
/// override. Markers play no role here; ancestors' declarations are dropped
/// even when they carry markers the winner lacks.
pub fn logical_methods<S>(host: &S, ty: &TypeId) -> Result<HashSet<MethodDescriptor>>
where
    S: TypeSystem + ?Sized,
{
    let mut by_signature: HashMap<MethodSignature, MethodDescriptor> = HashMap::new();
    for owner in type_chain(host, ty)? {
        for method in host.declared_methods(&owner)? {
            // First declaration scanned wins; an ancestor declaration never
            // displaces an override, and a duplicate signature within one
            // type resolves to the first-encountered declaration.
            by_signature.entry(method.signature()).or_insert(method);
        }
    }
    Ok(by_signature.into_iter().map(|(_, method)| method).collect())
}

/// Find every logical method in `ty`'s hierarchy whose most-derived
/// declaration carries at least one of `markers`.
///
/// Returns the most-derived descriptor per matching logical method. The set
/// may be empty; "nothing matched" is never an error. An override that drops
/// an ancestor's marker masks it: marker inheritance across overrides is
/// intentionally not performed.
pub fn find_marked_methods<S>(
    host: &S,
    ty: &TypeId,
    markers: &[MarkerKind],
) -> Result<HashSet<MethodDescriptor>>
where
    S: TypeSystem + ?Sized,
{
    if markers.is_empty() {
        return Ok(HashSet::new());
    }
    let methods: HashSet<MethodDescriptor> = logical_methods(host, ty)?
        .into_iter()
        .filter(|method| method.has_any_marker(markers))
        .collect();
    log::debug!("{} marked method(s) in hierarchy of `{}`", methods.len(), ty);
    Ok(methods)
}

/// Single-marker convenience over [`find_marked_methods`].
pub fn find_methods_with_marker<S>(
    host: &S,
    ty: &TypeId,
    marker: &MarkerKind,
) -> Result<HashSet<MethodDescriptor>>
where
    S: TypeSystem + ?Sized,
{
    find_marked_methods(host, ty, std::slice::from_ref(marker))
}

/// Whether any logical method in `ty`'s hierarchy carries at least one of
/// `markers`.
///
/// Equivalent to `!find_marked_methods(host, ty, markers)?.is_empty()` but
/// returns at the first qualifying method instead of materializing the set.
/// Masking still applies: a signature claimed by a more-derived declaration
/// is never re-examined on an ancestor.
pub fn has_any_marked_method<S>(host: &S, ty: &TypeId, markers: &[MarkerKind]) -> Result<bool>
where
    S: TypeSystem + ?Sized,
{
    if markers.is_empty() {
        return Ok(false);
    }
    let mut seen: HashSet<MethodSignature> = HashSet::new();
    for owner in type_chain(host, ty)? {
        for method in host.declared_methods(&owner)? {
            if seen.insert(method.signature()).is_some() {
                continue;
            }
            if method.has_any_marker(markers) {
                log::trace!("`{}` satisfies marker query", method);
                return Ok(true);
            }
        }
    }
    Ok(false)
}
