//! Reflection handles returned by the consumer probes.

use core::ffi::c_void;

use crate::primitives::TypeKey;
use crate::shape::TypeShape;

/// Handle naming a type by its structural identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Type {
    key: TypeKey,
}

impl Type {
    pub const fn of<T: ?Sized + TypeShape>() -> Self {
        Type { key: T::KEY }
    }

    pub const fn key(self) -> TypeKey {
        self.key
    }

    /// Handle of the raw identity (references and pointers stripped).
    pub const fn raw_of<T: ?Sized + TypeShape>() -> Self {
        Type { key: <T::Raw as TypeShape>::KEY }
    }
}

/// The most-derived address and type of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedInfo {
    pub ptr: *mut c_void,
    pub ty: Type,
}
