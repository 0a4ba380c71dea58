use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque};
use alloc::rc::{Rc, Weak as RcWeak};
use alloc::string::String;
use alloc::sync::{Arc, Weak as ArcWeak};
use alloc::vec::Vec;

use crate::primitives::{Absent, TypeKey};
use crate::{ArrayAdapter, TypeShape};

scalar_shape! {
    String,
}

sequence_shape! {
    "alloc::vec::Vec" => Vec,
    "alloc::collections::VecDeque" => VecDeque,
    "alloc::collections::LinkedList" => LinkedList,
}

// Shared-ownership wrappers: plain leaves, never unique owners.
generic_shape! {
    "alloc::rc::Rc" => Rc<?Sized T>,
    "alloc::rc::Weak" => RcWeak<?Sized T>,
    "alloc::sync::Arc" => Arc<?Sized T>,
    "alloc::sync::Weak" => ArcWeak<?Sized T>,
    "alloc::collections::BTreeMap" => BTreeMap<K, V>,
    "alloc::collections::BTreeSet" => BTreeSet<T>,
    "alloc::collections::BinaryHeap" => BinaryHeap<T>,
}

// =============================================================================
// Single ownership
// =============================================================================

impl<T: ?Sized + TypeShape> TypeShape for Box<T> {
    type Raw = Self;
    type Decayed = Self;
    type Pointee = Self;
    type InnermostPointer = Self;
    type IsPointer = Absent;
    const POINTER_DEPTH: usize = 0;
    const KEY: TypeKey = TypeKey::named("alloc::boxed::Box").with(T::KEY);
    const UNIQUE_OWNER: bool = true;
}

impl<T: ?Sized> ArrayAdapter for Box<T> {
    type IsArray = Absent;
    type Element = Self;
}

impl<B: ?Sized + alloc::borrow::ToOwned + TypeShape> TypeShape for Cow<'_, B> {
    crate::__leaf_shape!(TypeKey::named("alloc::borrow::Cow").with(B::KEY));
}

impl<B: ?Sized + alloc::borrow::ToOwned> ArrayAdapter for Cow<'_, B> {
    type IsArray = Absent;
    type Element = Self;
}
