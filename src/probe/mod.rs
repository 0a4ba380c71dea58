//! # Layer 2: Capability Probes
//!
//! A probe answers "does this type declare this exact operation?" without
//! calling anything. Every probe is a trait; the trait fixes the method
//! name, receiver and return type, so only an exact declaration counts.
//! Detection uses the "Inherent Const Fallback" pattern:
//!
//! 1. A fallback trait with `const PRESENT: bool = false`
//! 2. The fallback implemented for `XProbe<T>` for all T
//! 3. An inherent `const PRESENT: bool = true` for `XProbe<T>` where `T: X`
//!
//! When resolving `XProbe::<Concrete>::PRESENT`, the compiler picks the
//! inherent const if `Concrete: X`, otherwise the trait const.
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! Inside `fn foo<T>()` the fallback always wins.
//!
//! ## Usage
//!
//! ```ignore
//! use tola_reflect::probe::GetType;
//!
//! assert!(has_capability!(Widget: GetType));
//! assert!(has_capability!(&*const Widget: GetType)); // raw identity first
//! ```

mod handles;

pub use handles::{DerivedInfo, Type};

use core::ffi::c_void;

/// Define a capability probe.
///
/// Emits the trait itself plus `<Trait>Probe<T>` and `<Trait>Fallback`,
/// which [`has_capability!`] resolves against.
///
/// ```ignore
/// define_probe! {
///     pub trait Describe {
///         fn describe(&self) -> &'static str;
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_probe {
    (
        $(#[$meta:meta])*
        $vis:vis trait $Trait:ident {
            $(#[$fn_meta:meta])*
            fn $method:ident $($sig:tt)*
        }
    ) => {
        $(#[$meta])*
        $vis trait $Trait {
            $(#[$fn_meta])*
            fn $method $($sig)*
        }

        $crate::paste::paste! {
            #[doc = "Detection wrapper for `" $Trait "`."]
            #[doc(hidden)]
            $vis struct [<$Trait Probe>]<T: ?Sized>(::core::marker::PhantomData<T>);

            #[doc = "Fallback for `" $Trait "` detection."]
            #[doc(hidden)]
            $vis trait [<$Trait Fallback>] {
                const PRESENT: bool = false;
            }

            impl<T: ?Sized> [<$Trait Fallback>] for [<$Trait Probe>]<T> {}

            impl<T: ?Sized + $Trait> [<$Trait Probe>]<T> {
                pub const PRESENT: bool = true;
            }
        }
    };
}

/// Check a probe against the raw identity of a concrete type.
///
/// `has_capability!(Type: path::to::Probe)` evaluates to a `bool` usable in
/// const context. References and raw pointers are stripped first.
#[macro_export]
macro_rules! has_capability {
    (@path $ty:ty; [$($prefix:ident)*] $last:ident) => {
        $crate::paste::paste! {{
            #[allow(unused_imports)]
            use $($prefix::)* [<$last Fallback>] as _;
            <$($prefix::)* [<$last Probe>]<$crate::RawOf<$ty>>>::PRESENT
        }}
    };
    (@path $ty:ty; [$($prefix:ident)*] $head:ident :: $($rest:tt)+) => {
        $crate::has_capability!(@path $ty; [$($prefix)* $head] $($rest)+)
    };
    ($ty:ty : $($probe:tt)+) => {
        $crate::has_capability!(@path $ty; [] $($probe)+)
    };
}

/// Flags for the three probes the registration layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    pub get_type: bool,
    pub get_ptr: bool,
    pub get_derived_info: bool,
}

/// Evaluate every consumer probe for a concrete type.
#[macro_export]
macro_rules! capabilities {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::probe::{
            GetDerivedInfoFallback as _, GetPtrFallback as _, GetTypeFallback as _,
        };
        $crate::probe::Capabilities {
            get_type: <$crate::probe::GetTypeProbe<$crate::RawOf<$ty>>>::PRESENT,
            get_ptr: <$crate::probe::GetPtrProbe<$crate::RawOf<$ty>>>::PRESENT,
            get_derived_info: <$crate::probe::GetDerivedInfoProbe<$crate::RawOf<$ty>>>::PRESENT,
        }
    }};
}

define_probe! {
    /// Type-identity accessor: `fn get_type(&self) -> Type`.
    pub trait GetType {
        fn get_type(&self) -> Type;
    }
}

define_probe! {
    /// Opaque-pointer accessor: `fn get_ptr(&mut self) -> *mut c_void`.
    pub trait GetPtr {
        fn get_ptr(&mut self) -> *mut c_void;
    }
}

define_probe! {
    /// Derived-type-info accessor: `fn get_derived_info(&mut self) -> DerivedInfo`.
    pub trait GetDerivedInfo {
        fn get_derived_info(&mut self) -> DerivedInfo;
    }
}
