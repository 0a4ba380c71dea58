//! Opaque address normalization over pointer/reference chains.

use core::ffi::c_void;

use tola_reflect::address_of;

#[test]
fn test_plain_value_address() {
    let value = 42u64;
    let addr = unsafe { address_of(&value) };
    assert_eq!(addr, (&value as *const u64).cast_mut().cast::<c_void>());
}

#[test]
fn test_triple_pointer_chain() {
    let value = 7i32;
    let p1: *const i32 = &value;
    let p2: *const *const i32 = &p1;
    let p3: *const *const *const i32 = &p2;

    let addr = unsafe { address_of(&p3) };
    assert_eq!(addr, unsafe { **p3 }.cast_mut().cast::<c_void>());
    assert_eq!(addr, (&value as *const i32).cast_mut().cast::<c_void>());
}

#[test]
fn test_opaque_pointer_is_unchanged() {
    let mut value = 3u8;
    let opaque: *mut c_void = (&mut value as *mut u8).cast();
    assert_eq!(unsafe { address_of(&opaque) }, opaque);

    let opaque_const: *const c_void = opaque.cast_const();
    assert_eq!(unsafe { address_of(&opaque_const) }, opaque);
}

#[test]
fn test_opaque_pointer_behind_typed_pointer() {
    let mut value = 3u8;
    let opaque: *mut c_void = (&mut value as *mut u8).cast();
    let outer: *const *mut c_void = &opaque;
    assert_eq!(unsafe { address_of(&outer) }, opaque);
}

#[test]
fn test_reference_chain() {
    let value = [1u16, 2, 3];
    let r1 = &value;
    let r2 = &r1;
    let mut r1_mut = &value;
    let r3 = &mut r1_mut;
    let expected = (&value as *const [u16; 3]).cast_mut().cast::<c_void>();
    assert_eq!(unsafe { address_of(&r2) }, expected);
    assert_eq!(unsafe { address_of(&r3) }, expected);
}

#[test]
fn test_unsized_pointee() {
    let text: &str = "reflect";
    let ptr: *const str = text;
    assert_eq!(unsafe { address_of(&ptr) }, text.as_ptr().cast_mut().cast::<c_void>());
    assert_eq!(unsafe { address_of(text) }, text.as_ptr().cast_mut().cast::<c_void>());
}
