//! # Layer 2: Type-List Algebra
//!
//! A type list is a non-empty tuple of registered types. Lists may also be
//! handed over wrapped in one container layer (`Types<L>`, `PhantomData<L>`,
//! or any type registered with [`type_list_container!`]); [`IntoTypeList`]
//! normalizes both spellings to the tuple before any query runs.
//!
//! ```ignore
//! assert!(contains::<i32, (bool, f64, i32)>());
//! assert!(contains::<i32, Types<(bool, f64, i32)>>());
//! assert_eq!(max_size::<(u8, u32, f64)>(), 8);
//! ```
//!
//! The empty tuple is not a list: every query over it fails to compile.

use core::marker::PhantomData;
use core::mem::{align_of, size_of};

use crate::primitives::{key_in, max_of, TypeKey};
use crate::shape::TypeShape;

/// Canonical ordered sequence of types.
pub trait TypeList {
    const LEN: usize;

    /// Identity key of every element, in order.
    const KEYS: &'static [TypeKey];

    const MAX_SIZE: usize;
    const MAX_ALIGN: usize;
}

/// Normalization step: bare tuples map to themselves, wrappers unwrap once.
pub trait IntoTypeList {
    type List: TypeList;
}

/// Marker for wrapped lists (the container form of a list).
pub trait ListContainer: IntoTypeList {}

/// The canonical list wrapper.
pub struct Types<L>(PhantomData<L>);

impl<L: TypeList> IntoTypeList for Types<L> {
    type List = L;
}

impl<L: TypeList> ListContainer for Types<L> {}

impl<L: TypeList> IntoTypeList for PhantomData<L> {
    type List = L;
}

impl<L: TypeList> ListContainer for PhantomData<L> {}

macro_rules! tuple_list {
    ($($name:ident),+) => {
        impl<$($name: TypeShape),+> TypeList for ($($name,)+) {
            const LEN: usize = Self::KEYS.len();
            const KEYS: &'static [TypeKey] = &[$(<$name as TypeShape>::KEY),+];
            const MAX_SIZE: usize = max_of(&[$(size_of::<$name>()),+]);
            const MAX_ALIGN: usize = max_of(&[$(align_of::<$name>()),+]);
        }

        impl<$($name: TypeShape),+> IntoTypeList for ($($name,)+) {
            type List = Self;
        }
    };
}

macro_rules! tuple_lists {
    ($head:ident $(, $tail:ident)*) => {
        tuple_list!($head $(, $tail)*);
        tuple_lists!($($tail),*);
    };
    () => {};
}

tuple_lists!(P, O, N, M, L, K, J, I, H, G, F, E, D, C, B, A);

/// Register a user generic type as a list container.
///
/// The container's shape is ignored; its type arguments, in order, form
/// the list.
///
/// ```ignore
/// struct Catalog<A, B, C>(PhantomData<(A, B, C)>);
/// type_list_container!(Catalog<A, B, C>);
///
/// assert!(contains::<u8, Catalog<i32, u8, bool>>());
/// ```
#[macro_export]
macro_rules! type_list_container {
    ($container:ident < $($param:ident),+ $(,)? >) => {
        impl<$($param: $crate::TypeShape),+> $crate::list::IntoTypeList for $container<$($param),+> {
            type List = ($($param,)+);
        }

        impl<$($param: $crate::TypeShape),+> $crate::list::ListContainer for $container<$($param),+> {}
    };
}

/// True iff `T` is identical to some element of `L`.
#[inline(always)]
pub const fn contains<T: ?Sized + TypeShape, L: IntoTypeList>() -> bool {
    key_in(T::KEY, <L::List as TypeList>::KEYS)
}

/// [`contains`] for lists given in container form.
#[inline(always)]
pub const fn is_in_list<T: ?Sized + TypeShape, C: ListContainer>() -> bool {
    contains::<T, C>()
}

/// Number of elements of `L`.
#[inline(always)]
pub const fn list_len<L: IntoTypeList>() -> usize {
    <L::List as TypeList>::LEN
}

/// Largest `size_of` over `L`.
#[inline(always)]
pub const fn max_size<L: IntoTypeList>() -> usize {
    <L::List as TypeList>::MAX_SIZE
}

/// Largest `align_of` over `L`.
#[inline(always)]
pub const fn max_align<L: IntoTypeList>() -> usize {
    <L::List as TypeList>::MAX_ALIGN
}

/// Variadic spelling of [`contains`]: `contains!(T; A, B, C)`.
#[macro_export]
macro_rules! contains {
    ($ty:ty; $($item:ty),+ $(,)?) => {
        $crate::list::contains::<$ty, ($($item,)+)>()
    };
}

/// Variadic spelling of [`max_size`]: `max_size_of!(A, B, C)`.
#[macro_export]
macro_rules! max_size_of {
    ($($item:ty),+ $(,)?) => {
        $crate::list::max_size::<($($item,)+)>()
    };
}

/// Variadic spelling of [`max_align`]: `max_align_of!(A, B, C)`.
#[macro_export]
macro_rules! max_align_of {
    ($($item:ty),+ $(,)?) => {
        $crate::list::max_align::<($($item,)+)>()
    };
}
