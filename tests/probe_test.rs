//! Capability probes: exact trait declarations only, raw identity first.

use core::ffi::c_void;

use tola_reflect::prelude::*;

#[derive(TypeShape)]
struct Reflected {
    value: u32,
}

impl GetType for Reflected {
    fn get_type(&self) -> Type {
        Type::of::<Reflected>()
    }
}

impl GetPtr for Reflected {
    fn get_ptr(&mut self) -> *mut c_void {
        (&mut self.value as *mut u32).cast()
    }
}

/// Declares `get_type` with a `&mut self` receiver only: not the probed signature.
#[derive(TypeShape)]
struct MutableAccessor;

impl MutableAccessor {
    #[allow(dead_code)]
    fn get_type(&mut self) -> Type {
        Type::of::<MutableAccessor>()
    }
}

#[derive(TypeShape)]
struct Derived;

impl GetDerivedInfo for Derived {
    fn get_derived_info(&mut self) -> DerivedInfo {
        DerivedInfo {
            ptr: (self as *mut Derived).cast(),
            ty: Type::of::<Derived>(),
        }
    }
}

define_probe! {
    /// Human readable label.
    pub trait Describe {
        fn describe(&self) -> &'static str;
    }
}

impl Describe for Derived {
    fn describe(&self) -> &'static str {
        "derived"
    }
}

#[test]
fn test_get_type_probe() {
    assert!(has_capability!(Reflected: GetType));
    assert!(!has_capability!(MutableAccessor: GetType));
    assert!(!has_capability!(Derived: GetType));
    assert!(!has_capability!(i32: GetType));
}

#[test]
fn test_probe_applies_raw_identity() {
    assert!(has_capability!(&Reflected: GetType));
    assert!(has_capability!(*const *mut Reflected: GetType));
    assert!(has_capability!(&mut *const Reflected: GetPtr));
    // Containers are not stripped.
    assert!(!has_capability!(Box<Reflected>: GetType));
}

#[test]
fn test_probes_are_independent() {
    assert!(has_capability!(Reflected: GetPtr));
    assert!(!has_capability!(Reflected: GetDerivedInfo));
    assert!(has_capability!(Derived: GetDerivedInfo));
    assert!(!has_capability!(Derived: GetPtr));
}

#[test]
fn test_probe_by_path() {
    assert!(has_capability!(Reflected: tola_reflect::probe::GetType));
    assert!(!has_capability!(u8: tola_reflect::probe::GetDerivedInfo));
}

#[test]
fn test_user_defined_probe() {
    assert!(has_capability!(Derived: Describe));
    assert!(has_capability!(&Derived: Describe));
    assert!(!has_capability!(Reflected: Describe));
    assert_eq!(Derived.describe(), "derived");
}

#[test]
fn test_capabilities_in_const_context() {
    const REFLECTED: Capabilities = capabilities!(Reflected);
    assert_eq!(
        REFLECTED,
        Capabilities { get_type: true, get_ptr: true, get_derived_info: false }
    );
    assert!(capabilities!(*const Derived).get_derived_info);
    assert_eq!(capabilities!(String), Capabilities::default());
}

#[test]
fn test_probed_accessors_are_callable() {
    let mut reflected = Reflected { value: 7 };
    assert_eq!(reflected.get_type(), Type::of::<Reflected>());
    let ptr = reflected.get_ptr();
    assert_eq!(unsafe { *ptr.cast::<u32>() }, 7);

    let mut derived = Derived;
    let info = derived.get_derived_info();
    assert_eq!(info.ty, Type::of::<Derived>());
    assert_eq!(info.ptr, (&mut derived as *mut Derived).cast::<c_void>());
}

#[test]
fn test_probes_are_object_safe() {
    let reflected = Reflected { value: 1 };
    let erased: &dyn GetType = &reflected;
    assert_eq!(erased.get_type().key(), <Reflected as TypeShape>::KEY);
}
