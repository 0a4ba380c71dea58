//! # Layer 1: Type Descriptors
//!
//! `TypeShape` is the per-type descriptor every other query builds on.
//! Leaves describe themselves; the pointer and reference impls peel one
//! layer and delegate to the pointee, so every fact is resolved by trait
//! selection once per distinct type.
//!
//! ```text
//! &*const *mut Widget
//!  |   |      |
//!  |   |      +-- *mut   : pointer, depth 1 + depth(Widget)
//!  |   +--------- *const : pointer, depth 1 + depth(*mut Widget)
//!  +------------- &      : not a pointer, depth 0; Raw = Raw(*const ..)
//! ```
//!
//! ## Registering a type
//!
//! ```ignore
//! #[derive(TypeShape)]
//! struct Widget;
//!
//! assert_eq!(pointer_depth::<*const *mut Widget>(), 2);
//! ```

use core::ffi::c_void;

use crate::primitives::{Bool, TypeKey};

mod decay;
mod pointers;

pub use decay::FnDecay;

/// Structural descriptor of a type.
///
/// Implemented for primitives and the core/alloc/std families in
/// [`crate::impls`], for raw pointers and references here, and for user
/// types through `#[derive(TypeShape)]`.
pub trait TypeShape {
    /// The type with every reference and raw-pointer layer removed.
    /// Function pointers are leaves, so they are kept as-is.
    type Raw: ?Sized + TypeShape;

    /// One reference layer removed; everything else (array extents
    /// included) preserved.
    type Decayed: ?Sized;

    /// Every raw-pointer layer removed. References stop the walk.
    type Pointee: ?Sized;

    /// Every raw-pointer layer but the last one removed. Non-pointers
    /// are returned unchanged.
    type InnermostPointer: ?Sized;

    /// `Present` for `*const T` / `*mut T`.
    type IsPointer: Bool;

    /// Number of nested raw-pointer layers.
    const POINTER_DEPTH: usize;

    /// Structural identity of the type.
    const KEY: TypeKey;

    /// True only for the single-ownership wrapper family (`Box<T>`).
    const UNIQUE_OWNER: bool = false;

    /// Opaque address of the value behind `ptr`.
    ///
    /// Pointer descriptors read one level through `ptr` and recurse;
    /// everything else returns `ptr` itself.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads, and so must every pointer reached
    /// while walking a pointer chain.
    #[doc(hidden)]
    #[inline(always)]
    unsafe fn erase(ptr: *const Self) -> *mut c_void {
        ptr.cast::<c_void>().cast_mut()
    }
}

/// Raw identity of `T`.
pub type RawOf<T> = <T as TypeShape>::Raw;

/// `T` with one reference layer removed.
pub type DecayOf<T> = <T as TypeShape>::Decayed;

/// `T` with every raw-pointer layer removed.
pub type PointeeOf<T> = <T as TypeShape>::Pointee;

/// `T` with every raw-pointer layer but the last removed.
pub type InnermostPointerOf<T> = <T as TypeShape>::InnermostPointer;

/// Function item or closure decayed to its function-pointer type.
pub type DecayFn<F, Args> = <F as FnDecay<Args>>::Pointer;

/// Number of raw-pointer layers of `T`.
#[inline(always)]
pub const fn pointer_depth<T: ?Sized + TypeShape>() -> usize {
    T::POINTER_DEPTH
}

/// True for `*const T` and `*mut T`.
#[inline(always)]
pub const fn is_pointer<T: ?Sized + TypeShape>() -> bool {
    <T::IsPointer as Bool>::VALUE
}

/// True iff `T` is a single-ownership wrapper (`Box<_>`).
#[inline(always)]
pub const fn is_unique_owner<T: ?Sized + TypeShape>() -> bool {
    T::UNIQUE_OWNER
}

/// True iff `T` and `U` have the same structural identity.
#[inline(always)]
pub const fn same_type<T: ?Sized + TypeShape, U: ?Sized + TypeShape>() -> bool {
    T::KEY.same(U::KEY)
}

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use `#[derive(TypeShape)]` instead.
///
/// Expands to the associated items of a leaf descriptor: every layer
/// query answers `Self`, depth is zero, the key is `$key`.
#[macro_export]
#[doc(hidden)]
macro_rules! __leaf_shape {
    ($key:expr) => {
        type Raw = Self;
        type Decayed = Self;
        type Pointee = Self;
        type InnermostPointer = Self;
        type IsPointer = $crate::Absent;
        const POINTER_DEPTH: usize = 0;
        const KEY: $crate::TypeKey = $key;
    };
}
