//! # Layer 3: Type Descriptors
//!
//! [`Descriptor`] gathers every structural fact about one type into a
//! single `const` value. Capability flags need a concrete type at the call
//! site and come from [`capabilities!`](crate::capabilities) instead.

use crate::array::{ArrayAdapter, Decompose};
use crate::primitives::{Bool, TypeKey};
use crate::shape::TypeShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    pub key: TypeKey,
    pub raw_key: TypeKey,
    pub pointer_depth: usize,
    pub is_pointer: bool,
    pub is_array: bool,
    pub rank: usize,
    pub extent: Option<usize>,
    pub is_char_row: bool,
    pub unique_owner: bool,
}

impl Descriptor {
    pub const fn of<T>() -> Self
    where
        T: ?Sized + TypeShape + ArrayAdapter + Decompose,
        T::Innermost: TypeShape,
    {
        Descriptor {
            key: <T as TypeShape>::KEY,
            raw_key: <T::Raw as TypeShape>::KEY,
            pointer_depth: T::POINTER_DEPTH,
            is_pointer: <<T as TypeShape>::IsPointer as Bool>::VALUE,
            is_array: <<T as ArrayAdapter>::IsArray as Bool>::VALUE,
            rank: T::RANK,
            extent: T::EXTENT,
            is_char_row: crate::array::is_char_row::<T>(),
            unique_owner: T::UNIQUE_OWNER,
        }
    }
}
