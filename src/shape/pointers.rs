//! Descriptors for raw pointers and references.

use core::ffi::c_void;

use super::TypeShape;
use crate::primitives::{Absent, Bool, Present, TypeKey};

macro_rules! raw_pointer_shape {
    ($($ptr:tt => $name:literal),* $(,)?) => {$(
        impl<T: ?Sized + TypeShape> TypeShape for *$ptr T {
            type Raw = T::Raw;
            type Decayed = Self;
            type Pointee = T::Pointee;
            type InnermostPointer = <T::IsPointer as Bool>::If<T::InnermostPointer, Self>;
            type IsPointer = Present;
            const POINTER_DEPTH: usize = T::POINTER_DEPTH + 1;
            const KEY: TypeKey = TypeKey::named($name).with(T::KEY);

            #[inline(always)]
            unsafe fn erase(ptr: *const Self) -> *mut c_void {
                // SAFETY: the caller guarantees `ptr` and the chain behind it are readable.
                unsafe { T::erase(*ptr as *const T) }
            }
        }
    )*};
}

raw_pointer_shape! {
    const => "*const",
    mut => "*mut",
}

impl<T: ?Sized + TypeShape> TypeShape for &T {
    type Raw = T::Raw;
    type Decayed = T;
    type Pointee = Self;
    type InnermostPointer = Self;
    type IsPointer = Absent;
    const POINTER_DEPTH: usize = 0;
    const KEY: TypeKey = TypeKey::named("&").with(T::KEY);

    #[inline(always)]
    unsafe fn erase(ptr: *const Self) -> *mut c_void {
        // SAFETY: `ptr` is readable; the reference it holds is valid by construction.
        unsafe { T::erase(*ptr) }
    }
}

impl<T: ?Sized + TypeShape> TypeShape for &mut T {
    type Raw = T::Raw;
    type Decayed = T;
    type Pointee = Self;
    type InnermostPointer = Self;
    type IsPointer = Absent;
    const POINTER_DEPTH: usize = 0;
    const KEY: TypeKey = TypeKey::named("&mut").with(T::KEY);

    #[inline(always)]
    unsafe fn erase(ptr: *const Self) -> *mut c_void {
        // SAFETY: as for `&T`.
        unsafe { T::erase(&**ptr) }
    }
}
