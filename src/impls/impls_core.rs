use core::cell::{Cell, OnceCell, RefCell, UnsafeCell};
use core::cmp::Reverse;
use core::ffi::c_void;
use core::marker::{PhantomData, PhantomPinned};
use core::mem::{ManuallyDrop, MaybeUninit};
use core::num::Wrapping;
use core::pin::Pin;
use core::ptr::NonNull;

use crate::primitives::{Absent, Present, TypeKey};
use crate::{ArrayAdapter, TypeShape};

scalar_shape! {
    (), bool, char, str,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    c_void,
    PhantomPinned,
    core::num::NonZeroU8, core::num::NonZeroU16, core::num::NonZeroU32,
    core::num::NonZeroU64, core::num::NonZeroU128, core::num::NonZeroUsize,
    core::num::NonZeroI8, core::num::NonZeroI16, core::num::NonZeroI32,
    core::num::NonZeroI64, core::num::NonZeroI128, core::num::NonZeroIsize,
    core::time::Duration,
    core::cmp::Ordering,
    core::any::TypeId,
}

generic_shape! {
    "core::option::Option" => Option<T>,
    "core::result::Result" => Result<T, E>,
    "core::marker::PhantomData" => PhantomData<?Sized T>,
    "core::cell::Cell" => Cell<?Sized T>,
    "core::cell::RefCell" => RefCell<?Sized T>,
    "core::cell::UnsafeCell" => UnsafeCell<?Sized T>,
    "core::cell::OnceCell" => OnceCell<T>,
    "core::mem::ManuallyDrop" => ManuallyDrop<?Sized T>,
    "core::mem::MaybeUninit" => MaybeUninit<T>,
    "core::num::Wrapping" => Wrapping<T>,
    "core::cmp::Reverse" => Reverse<T>,
    "core::pin::Pin" => Pin<T>,
    "core::ptr::NonNull" => NonNull<?Sized T>,
}

// =============================================================================
// Native arrays and slices
// =============================================================================

impl<T: TypeShape, const N: usize> TypeShape for [T; N] {
    crate::__leaf_shape!(TypeKey::named("[;]").with(T::KEY).with_len(N));
}

impl<T, const N: usize> ArrayAdapter for [T; N] {
    type IsArray = Present;
    type Element = T;
    const EXTENT: Option<usize> = Some(N);
}

impl<T: TypeShape> TypeShape for [T] {
    crate::__leaf_shape!(TypeKey::named("[]").with(T::KEY));
}

impl<T> ArrayAdapter for [T] {
    type IsArray = Present;
    type Element = T;
}

// References forward array-likeness but not the native extent; raw
// pointers are never array-like.

impl<T: ?Sized + ArrayAdapter> ArrayAdapter for &T {
    type IsArray = T::IsArray;
    type Element = T::Element;
}

impl<T: ?Sized + ArrayAdapter> ArrayAdapter for &mut T {
    type IsArray = T::IsArray;
    type Element = T::Element;
}

impl<T: ?Sized> ArrayAdapter for *const T {
    type IsArray = Absent;
    type Element = Self;
}

impl<T: ?Sized> ArrayAdapter for *mut T {
    type IsArray = Absent;
    type Element = Self;
}

// =============================================================================
// Tuples
// =============================================================================

macro_rules! tuple_shape {
    ($($name:ident),+) => {
        impl<$($name: TypeShape),+> TypeShape for ($($name,)+) {
            crate::__leaf_shape!(TypeKey::named("()")$(.with(<$name as TypeShape>::KEY))+);
        }

        impl<$($name),+> ArrayAdapter for ($($name,)+) {
            type IsArray = Absent;
            type Element = Self;
        }
    };
}

macro_rules! tuple_shapes {
    ($head:ident $(, $tail:ident)*) => {
        tuple_shape!($head $(, $tail)*);
        tuple_shapes!($($tail),*);
    };
    () => {};
}

tuple_shapes!(L, K, J, I, H, G, F, E, D, C, B, A);
