//! Const evaluation utilities

use super::key::TypeKey;

/// FNV-1a 128-bit offset basis.
pub const FNV_OFFSET_128: u128 = 144066263297769815596495629667062367629;

/// FNV-1a 128-bit prime.
pub const FNV_PRIME_128: u128 = 309485009821345068724781371;

/// Feed `input` into a running FNV-1a 128-bit hash.
pub const fn fnv1a_128_feed(mut hash: u128, input: &[u8]) -> u128 {
    let mut i = 0;
    while i < input.len() {
        hash ^= input[i] as u128;
        hash = hash.wrapping_mul(FNV_PRIME_128);
        i += 1;
    }
    hash
}

/// FNV-1a 128-bit Hash for strings (const fn)
pub const fn fnv1a_128_str(s: &str) -> u128 {
    fnv1a_128_feed(FNV_OFFSET_128, s.as_bytes())
}

/// True if any flag is set. Empty input is `false`.
pub const fn any_of(flags: &[bool]) -> bool {
    let mut i = 0;
    while i < flags.len() {
        if flags[i] {
            return true;
        }
        i += 1;
    }
    false
}

/// True if every flag is set. Empty input is `true`.
pub const fn all_of(flags: &[bool]) -> bool {
    let mut i = 0;
    while i < flags.len() {
        if !flags[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Largest value of a non-empty slice.
///
/// An empty slice fails const evaluation.
pub const fn max_of(values: &[usize]) -> usize {
    assert!(!values.is_empty(), "max_of: empty list");
    let mut max = values[0];
    let mut i = 1;
    while i < values.len() {
        if values[i] > max {
            max = values[i];
        }
        i += 1;
    }
    max
}

/// Exact key membership.
pub const fn key_in(key: TypeKey, keys: &[TypeKey]) -> bool {
    let mut i = 0;
    while i < keys.len() {
        if key.same(keys[i]) {
            return true;
        }
        i += 1;
    }
    false
}
