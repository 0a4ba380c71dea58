//! Descriptors and array adapters for library types.
//!
//! Leaves are registered through `scalar_shape!`; single-parameter
//! families through `generic_shape!`. Sequence containers register an
//! element relation so the decomposer treats them as array-like.

/// Leaf descriptors keyed by their spelled-out type.
macro_rules! scalar_shape {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::TypeShape for $ty {
            $crate::__leaf_shape!($crate::TypeKey::named(stringify!($ty)));
        }

        impl $crate::ArrayAdapter for $ty {
            type IsArray = $crate::Absent;
            type Element = Self;
        }
    )*};
}

/// Non-array families with type parameters, keyed by path plus arguments.
///
/// `?Sized` in front of a parameter relaxes its bound.
macro_rules! generic_shape {
    ($($name:literal => $family:ident < $($(? $unsized:ident)? $param:ident),+ >),* $(,)?) => {$(
        impl<$($param: $(? $unsized +)? $crate::TypeShape),+> $crate::TypeShape for $family<$($param),+> {
            $crate::__leaf_shape!($crate::TypeKey::named($name)$(.with(<$param as $crate::TypeShape>::KEY))+);
        }

        impl<$($param: $(? $unsized)?),+> $crate::ArrayAdapter for $family<$($param),+> {
            type IsArray = $crate::Absent;
            type Element = Self;
        }
    )*};
}

/// Sequence containers: array-like over their single parameter.
macro_rules! sequence_shape {
    ($($name:literal => $family:ident),* $(,)?) => {$(
        impl<T: $crate::TypeShape> $crate::TypeShape for $family<T> {
            $crate::__leaf_shape!($crate::TypeKey::named($name).with(T::KEY));
        }

        impl<T> $crate::ArrayAdapter for $family<T> {
            type IsArray = $crate::Present;
            type Element = T;
        }
    )*};
}

// Definition for `core::` types
mod impls_core;

// Definition for function pointers
mod impls_fn;

// Definition for `alloc::` types
#[cfg(feature = "alloc")]
mod impls_alloc;

// Definition for `std::` types (that aren't in `alloc` or `core`)
#[cfg(feature = "std")]
mod impls_std;
