//! Raw identity: references and raw pointers stripped, leaves kept.

use static_assertions::assert_type_eq_all;
use tola_reflect::prelude::*;

#[derive(TypeShape)]
struct Widget;

type Callback = fn(i32) -> bool;

assert_type_eq_all!(RawOf<i32>, i32);
assert_type_eq_all!(RawOf<&i32>, i32);
assert_type_eq_all!(RawOf<&mut i32>, i32);
assert_type_eq_all!(RawOf<*const i32>, i32);
assert_type_eq_all!(RawOf<*mut *const i32>, i32);
assert_type_eq_all!(RawOf<&*const &mut *mut Widget>, Widget);
assert_type_eq_all!(RawOf<&str>, str);
assert_type_eq_all!(RawOf<*const [u8]>, [u8]);

// Arrays and containers are not indirection.
assert_type_eq_all!(RawOf<&[i32; 4]>, [i32; 4]);
assert_type_eq_all!(RawOf<[*const i32; 4]>, [*const i32; 4]);
assert_type_eq_all!(RawOf<Box<i32>>, Box<i32>);
assert_type_eq_all!(RawOf<Option<&i32>>, Option<&i32>);

// Function pointers are leaves: pointers to them strip down to the fn.
assert_type_eq_all!(RawOf<Callback>, Callback);
assert_type_eq_all!(RawOf<*const Callback>, Callback);
assert_type_eq_all!(RawOf<&&Callback>, Callback);

// Idempotence
assert_type_eq_all!(RawOf<RawOf<&*const Widget>>, RawOf<&*const Widget>);
assert_type_eq_all!(RawOf<RawOf<*mut *mut [u16; 3]>>, RawOf<*mut *mut [u16; 3]>);

#[test]
fn test_raw_identity_has_no_pointers() {
    assert_eq!(pointer_depth::<RawOf<*const *const *const u8>>(), 0);
    assert_eq!(pointer_depth::<RawOf<&*mut Widget>>(), 0);
    assert_eq!(pointer_depth::<RawOf<*const Callback>>(), 0);
}

#[test]
fn test_raw_keys_match() {
    assert!(same_type::<RawOf<&&*const Widget>, Widget>());
    assert!(!same_type::<RawOf<&Widget>, &Widget>());
    assert_eq!(Type::raw_of::<*mut Widget>(), Type::of::<Widget>());
}

#[test]
fn test_pointee_stops_at_references() {
    assert_type_eq_all!(PointeeOf<*const *mut u32>, u32);
    assert_type_eq_all!(PointeeOf<*const &*const u32>, &*const u32);
    assert_type_eq_all!(PointeeOf<&*const u32>, &*const u32);
    assert_type_eq_all!(PointeeOf<u32>, u32);
}

#[test]
fn test_innermost_pointer() {
    assert_type_eq_all!(InnermostPointerOf<*const *const i32>, *const i32);
    assert_type_eq_all!(InnermostPointerOf<*mut *const *mut i32>, *mut i32);
    assert_type_eq_all!(InnermostPointerOf<*const i32>, *const i32);
    assert_type_eq_all!(InnermostPointerOf<i32>, i32);
    assert_type_eq_all!(InnermostPointerOf<*const *const str>, *const str);
}
