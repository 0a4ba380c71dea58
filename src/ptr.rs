//! # Layer 2: Pointer Normalization
//!
//! ```text
//! address_of(&value)              -> &value
//! address_of(&(p: *const T))      -> address_of(&*p)
//! address_of(&(p: *mut c_void))   -> p          (already opaque)
//! address_of(&(r: &T))            -> address_of(r)
//! ```
//!
//! The walk is resolved per static type through [`TypeShape::erase`]:
//! pointer and reference descriptors read one level and recurse, every
//! other descriptor returns the address it was handed. An opaque pointer
//! ends the walk at its `c_void` pointee, which hands the pointer back
//! untouched.

use core::ffi::c_void;

use crate::shape::TypeShape;

/// Opaque, non-owning address of `value`, following every raw-pointer and
/// reference layer of its static type.
///
/// Constness is dropped; writing through the result is only sound where
/// the original pointers allowed it.
///
/// # Safety
///
/// Every pointer reached through `value` must be non-null and valid for
/// reads. A plain value (no pointer layers) has no requirement.
#[inline(always)]
pub unsafe fn address_of<T: ?Sized + TypeShape>(value: &T) -> *mut c_void {
    // SAFETY: `value` is a live reference; the chain behind it is the caller's contract.
    unsafe { T::erase(value) }
}
